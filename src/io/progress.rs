//! Batch progress display over the images being analyzed

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{prefix}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many images of a batch are done
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    failed: usize,
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the bar for a batch of `image_count` images
    pub fn initialize(&mut self, image_count: usize) {
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
        self.completed = 0;
        self.failed = 0;
    }

    /// Show the image currently being analyzed
    pub fn start_image(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            bar.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }
    }

    /// Mark the current image as done
    pub fn complete_image(&mut self, succeeded: bool) {
        self.completed += 1;
        if !succeeded {
            self.failed += 1;
        }
        if let Some(ref bar) = self.bar {
            bar.set_prefix(self.status());
            bar.inc(1);
        }
    }

    /// Images finished so far, including failures
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Images that failed so far
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Failure count shown in the bar, empty while nothing has failed
    pub fn status(&self) -> String {
        if self.failed == 0 {
            String::new()
        } else {
            format!("({} failed)", self.failed)
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
