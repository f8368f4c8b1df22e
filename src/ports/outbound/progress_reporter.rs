/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr) so that
/// long downloads give feedback without the library printing anything
/// itself.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports byte-level progress
    ///
    /// # Arguments
    /// * `current` - Bytes processed so far
    /// * `total` - Expected total, when the server announced one
    /// * `message` - Optional message to include
    fn report_progress(&self, current: u64, total: Option<u64>, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation and clears any progress display
    fn report_completion(&self, message: &str);
}
