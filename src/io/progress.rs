//! Progress display for export runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static EXPORT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar covering one export run's tiles
pub struct ExportProgress {
    bar: ProgressBar,
}

impl ExportProgress {
    /// Create a bar sized to the number of planned tiles
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(EXPORT_STYLE.clone());
        Self { bar }
    }

    /// Advance past one written tile, showing its filename
    pub fn tick(&self, filename: &str) {
        self.bar.set_message(filename.to_string());
        self.bar.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
