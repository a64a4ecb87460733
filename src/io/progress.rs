//! Progress display for long walks

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static WALK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} moves, {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the moves of one walk
pub struct WalkProgress {
    bar: ProgressBar,
}

impl WalkProgress {
    /// Create a bar for a walk of `total_moves` moves over `name`
    pub fn new(name: &str, total_moves: usize) -> Self {
        let bar = ProgressBar::new(total_moves as u64);
        bar.set_style(WALK_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Report a completed move and the number of tiles placed so far
    pub fn advance(&self, tiles_generated: usize) {
        self.bar.inc(1);
        self.bar.set_message(format!("{tiles_generated} tiles"));
    }

    /// Current position of the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
