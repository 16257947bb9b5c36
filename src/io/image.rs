//! Slide decoding and mosaic preview export

use crate::io::error::{MosaicError, Result};
use image::{ImageBuffer, Rgb};
use ndarray::{Array3, ArrayView3};
use std::path::Path;

/// Decode a slide or tile image into an RGB array
///
/// Any format the `image` crate recognizes is accepted; pixels land in a
/// `(height, width, 3)` array in RGB channel order.
///
/// # Errors
///
/// Returns `ImageLoad` when the file cannot be opened or decoded
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<Array3<u8>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgb_img = img.to_rgb8();

    let (width, height) = (rgb_img.width() as usize, rgb_img.height() as usize);
    let mut image_data = Array3::zeros((height, width, 3));

    for (x, y, pixel) in rgb_img.enumerate_pixels() {
        let channels = pixel.0;
        for c in 0..3 {
            let val = channels.get(c).copied().unwrap_or(0);
            if let Some(sample) = image_data.get_mut((y as usize, x as usize, c)) {
                *sample = val;
            }
        }
    }

    Ok(image_data)
}

/// Export a composed canvas as a PNG preview
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_png(canvas: ArrayView3<'_, u8>, output_path: &Path) -> Result<()> {
    let (height, width, _) = canvas.dim();
    let mut img = ImageBuffer::new(width as u32, height as u32);

    for y in 0..height {
        for x in 0..width {
            let sample = |c: usize| canvas.get((y, x, c)).copied().unwrap_or(0);
            img.put_pixel(x as u32, y as u32, Rgb([sample(0), sample(1), sample(2)]));
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MosaicError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
