//! Batch progress reporting
//!
//! One bar tracks the file batch; the current slide name is shown in the
//! message slot. Slide decoding dominates runtime, so there is no per-slide
//! inner progress.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Slides: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch mosaic runs
#[derive(Default)]
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Initialize the batch bar for a known file count
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(bar);
    }

    /// Show the slide currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.batch_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark the current slide as completed
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All slides processed");
        }
    }
}
