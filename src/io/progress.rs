//! Progress display over the zones of a site plan

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ZONE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Zones: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per filled zone
///
/// A hidden bar is used in quiet mode so callers never branch on it.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Visible bar over `zone_count` zones
    pub fn new(zone_count: usize) -> Self {
        let bar = ProgressBar::new(zone_count as u64);
        bar.set_style(ZONE_STYLE.clone());
        Self { bar }
    }

    /// Bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Mark a zone as filled
    pub fn complete_zone(&self, zone: &str) {
        self.bar.set_message(zone.to_string());
        self.bar.inc(1);
    }

    /// Number of zones completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
