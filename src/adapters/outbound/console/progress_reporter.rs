use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so the report on stdout stays machine-readable.
/// Uses indicatif for the progress bar shown while entries are classified.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
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

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_progress_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("{}", message.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Test message");
        reporter.report_progress(5, 10, Some("lodash"));
        reporter.report_error("Test warning");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_bar_finishes_at_total() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(2, 2, None);
        assert!(reporter.progress_bar.borrow().is_none());
    }
}
