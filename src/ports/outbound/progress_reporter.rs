/// ProgressReporter port for reporting progress during operations
///
/// This is the tool's only logging channel: informational lines, warnings
/// and progress all go through it (stderr in production).
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a position out of a total
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
