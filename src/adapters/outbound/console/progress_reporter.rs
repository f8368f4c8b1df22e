use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) - {msg}";
const SPINNER_TEMPLATE: &str = "   {spinner:.green} {bytes} ({bytes_per_sec}) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so progress never mixes with the table on stdout.
/// Uses indicatif for the download bar; a spinner is shown when the server
/// does not announce a content length.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: Option<u64>) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = match total {
            Some(total) => {
                let pb = ProgressBar::new(total);
                if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
                    pb.set_style(style.progress_chars("=>-"));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
                    pb.set_style(style);
                }
                pb
            }
        };
        *pb_option = Some(pb.clone());
        pb
    }

    /// Finishes and forgets the current bar so the next download gets a fresh one
    fn clear_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: u64, total: Option<u64>, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }
}

/// SilentProgressReporter discards everything
///
/// For library callers that do not want console output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgressReporter;

impl SilentProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: u64, _total: Option<u64>, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_progress(512, Some(1024), Some("test"));
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_bar_is_recreated_after_completion() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(10, Some(100), None);
        reporter.report_completion("done");
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_progress(10, None, Some("unknown size"));
        assert!(reporter.progress_bar.borrow().is_some());
    }

    #[test]
    fn test_silent_reporter() {
        let reporter = SilentProgressReporter::new();
        reporter.report("ignored");
        reporter.report_progress(1, None, None);
    }
}
