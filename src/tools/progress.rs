//! Console progress bar

use indicatif::{ProgressBar as Bar, ProgressDrawTarget, ProgressStyle};

use crate::error::{AudiolibError, Result};

/// `"{label} |███---| 40%"`, 50 cells wide
const TEMPLATE: &str = "{prefix} |{bar:50}| {percent}%";

/// Filled cell, then empty cell
const PROGRESS_CHARS: &str = "█-";

/// Single-line progress bar over a known number of steps
#[derive(Debug, Clone)]
pub struct ProgressBar {
    bar: Bar,
}

impl ProgressBar {
    /// Create a bar drawn on stdout
    ///
    /// # Errors
    /// * `InvalidArgument` - if `total` is zero
    pub fn new(total: usize, label: &str) -> Result<Self> {
        Self::with_draw_target(total, label, ProgressDrawTarget::stdout())
    }

    /// Create a bar that tracks progress without drawing anything
    pub fn hidden(total: usize, label: &str) -> Result<Self> {
        Self::with_draw_target(total, label, ProgressDrawTarget::hidden())
    }

    fn with_draw_target(total: usize, label: &str, target: ProgressDrawTarget) -> Result<Self> {
        if total == 0 {
            return Err(AudiolibError::invalid_argument("progress total must be positive"));
        }

        let style = ProgressStyle::with_template(TEMPLATE)
            .map_err(|e| AudiolibError::invalid_argument(format!("progress template: {}", e)))?
            .progress_chars(PROGRESS_CHARS);

        let bar = Bar::with_draw_target(Some(total as u64), target);
        bar.set_style(style);
        bar.set_prefix(label.to_string());

        Ok(ProgressBar { bar })
    }

    /// Jump to `iteration`; positions past the total show as complete
    pub fn set_position(&self, iteration: usize) {
        self.bar.set_position((iteration as u64).min(self.total()));
    }

    /// Advance by one step
    pub fn inc(&self) {
        if self.position() < self.total() {
            self.bar.inc(1);
        }
    }

    /// Draw the final state and end the line
    pub fn finish(&self) {
        self.bar.finish();
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

/// Draw a bar at `iteration` out of `total` on stdout
///
/// Each call draws a fresh bar, finished once `iteration` reaches `total`.
/// Hold a [`ProgressBar`] instead to update one line in place.
///
/// # Errors
/// * `InvalidArgument` - if `total` is zero
pub fn print_progress_bar(iteration: usize, total: usize, label: &str) -> Result<()> {
    let bar = ProgressBar::new(total, label)?;
    bar.set_position(iteration);
    if iteration >= total {
        bar.finish();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_is_rejected() {
        assert!(matches!(
            ProgressBar::hidden(0, "x"),
            Err(AudiolibError::InvalidArgument { .. })
        ));
        assert!(matches!(
            print_progress_bar(1, 0, "x"),
            Err(AudiolibError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_inc_and_finish() {
        let bar = ProgressBar::hidden(3, "Decoding").unwrap();
        assert_eq!(bar.total(), 3);
        assert_eq!(bar.position(), 0);

        bar.inc();
        bar.inc();
        assert_eq!(bar.position(), 2);
        assert!(!bar.is_finished());

        bar.inc();
        bar.finish();
        assert_eq!(bar.position(), 3);
        assert!(bar.is_finished());
    }

    #[test]
    fn test_position_is_clamped_to_total() {
        let bar = ProgressBar::hidden(3, "x").unwrap();

        bar.set_position(7);
        assert_eq!(bar.position(), 3);

        bar.inc();
        assert_eq!(bar.position(), 3);

        bar.set_position(1);
        assert_eq!(bar.position(), 1);
    }

    #[test]
    fn test_print_progress_bar_accepts_any_iteration() {
        assert!(print_progress_bar(0, 4, "x").is_ok());
        assert!(print_progress_bar(2, 4, "x").is_ok());
        assert!(print_progress_bar(9, 4, "x").is_ok());
    }
}
