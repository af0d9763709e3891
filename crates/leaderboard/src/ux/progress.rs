use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner shown on stderr while result files are fetched.
#[derive(Debug)]
pub struct LoadingSpinner {
    spinner: ProgressBar,
}

impl LoadingSpinner {
    /// Starts ticking for a load from `location`.
    pub fn start(location: &str) -> Self {
        Self::with_bar(ProgressBar::new_spinner(), location)
    }

    fn with_bar(spinner: ProgressBar, location: &str) -> Self {
        let style = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);
        spinner.set_style(style);
        spinner.set_message(loading_message(location));
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    /// Stops the spinner and erases it, leaving room for the load summary.
    pub fn finish(self) {
        self.spinner.finish_and_clear();
    }
}

fn loading_message(location: &str) -> String {
    format!("Loading results from {location}...")
}

#[cfg(test)]
mod tests {
    use indicatif::ProgressDrawTarget;

    use super::*;

    #[test]
    fn test_loading_message_names_location() {
        assert_eq!(
            loading_message("https://example.com/results"),
            "Loading results from https://example.com/results..."
        );
    }

    #[test]
    fn test_finish_clears_spinner() {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        let spinner = LoadingSpinner::with_bar(bar.clone(), "./results");
        assert_eq!(bar.message(), "Loading results from ./results...");

        spinner.finish();

        assert!(bar.is_finished());
    }
}
