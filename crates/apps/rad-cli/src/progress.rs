//! Spinners for waits that need no user input.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a ticking spinner with `message`.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// A spinner that draws nothing.
pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}
