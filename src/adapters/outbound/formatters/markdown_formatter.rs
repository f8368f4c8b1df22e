use crate::interactions::domain::{cell_text, Table};
use crate::ports::outbound::TableFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter rendering a GitHub-flavoured Markdown table
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn table_line<I>(cells: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        let cells: Vec<String> = cells.into_iter().collect();
        format!("| {} |\n", cells.join(" | "))
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for MarkdownFormatter {
    fn format(&self, table: &Table) -> Result<String> {
        if table.columns().is_empty() {
            return Ok("_No interactions._\n".to_string());
        }

        let mut output = String::new();
        output.push_str(&Self::table_line(
            table
                .columns()
                .iter()
                .map(|c| Self::escape_markdown_table_cell(c)),
        ));
        output.push_str(&Self::table_line(
            table.columns().iter().map(|c| "-".repeat(c.len().max(3))),
        ));
        for row in table.rows() {
            output.push_str(&Self::table_line(
                row.cells()
                    .iter()
                    .map(|cell| Self::escape_markdown_table_cell(&cell_text(cell))),
            ));
        }
        Ok(output)
    }
}
