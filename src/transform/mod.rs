//! Augmentation transform hooks applied per tile or per mosaic
//!
//! Hooks are opaque to the core: any shape-preserving image-to-image function
//! can be wired in. Failures propagate unchanged; the core never substitutes
//! a default image for a failed transform.

use crate::io::error::{Result, transform_error};
use ndarray::{Array3, s};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// A fallible image-to-image augmentation hook
///
/// Implementations must preserve the array shape and channel count. Square
/// inputs (tiles and mosaics are always square) make the geometric flips
/// below trivially shape-preserving.
pub trait Transform: Send + Sync {
    /// Apply the transform to one image
    ///
    /// # Errors
    ///
    /// Implementations report their own failures; the caller propagates them
    /// without retrying or substituting
    fn apply(&self, image: Array3<u8>) -> Result<Array3<u8>>;
}

/// Apply an optional hook and enforce its shape contract
///
/// # Errors
///
/// Propagates the hook's own error, or reports a contract violation when the
/// output shape differs from the input shape
pub fn apply_checked(
    hook: Option<&dyn Transform>,
    stage: &'static str,
    image: Array3<u8>,
) -> Result<Array3<u8>> {
    let Some(hook) = hook else {
        return Ok(image);
    };
    let dim_in = image.dim();
    let out = hook.apply(image)?;
    if out.dim() == dim_in {
        Ok(out)
    } else {
        Err(transform_error(
            stage,
            &format!("shape changed from {dim_in:?} to {:?}", out.dim()),
        ))
    }
}

/// Seeded training augmentation: transpose, vertical flip, horizontal flip,
/// each applied independently with probability one half
pub struct RandomFlips {
    rng: Mutex<StdRng>,
}

impl RandomFlips {
    /// Create a seeded flip transform
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Transform for RandomFlips {
    fn apply(&self, image: Array3<u8>) -> Result<Array3<u8>> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_poisoned| transform_error("random_flips", &"rng lock poisoned"))?;

        let mut out = image;
        if rng.random::<f64>() < 0.5 {
            out = transpose_hw(&out);
        }
        if rng.random::<f64>() < 0.5 {
            out = out.slice(s![..;-1, .., ..]).to_owned();
        }
        if rng.random::<f64>() < 0.5 {
            out = out.slice(s![.., ..;-1, ..]).to_owned();
        }
        Ok(out)
    }
}

/// Swap the spatial axes, leaving channels in place
pub fn transpose_hw(image: &Array3<u8>) -> Array3<u8> {
    image
        .view()
        .permuted_axes([1, 0, 2])
        .as_standard_layout()
        .to_owned()
}
