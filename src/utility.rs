use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner on stderr for jobs of unknown length, such as reading a network.
pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.set_style(
        ProgressStyle::with_template(" {spinner} {msg} {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
