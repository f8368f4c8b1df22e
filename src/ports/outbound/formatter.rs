use crate::interactions::domain::Table;
use crate::shared::Result;

/// TableFormatter port for rendering result tables
///
/// This port abstracts the output encoding (TSV, JSON, Markdown, etc.).
pub trait TableFormatter {
    /// Formats a result table
    ///
    /// # Arguments
    /// * `table` - Interaction table returned by a use case
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, table: &Table) -> Result<String>;
}
