use crate::interactions::domain::{cell_text, Table};
use crate::ports::outbound::TableFormatter;
use crate::shared::Result;
use anyhow::Context;

/// TsvFormatter adapter for tab-separated output
///
/// A header row with the column names is always written; null cells are empty.
pub struct TsvFormatter;

impl TsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for TsvFormatter {
    fn format(&self, table: &Table) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(Vec::new());

        writer
            .write_record(table.columns())
            .context("Failed to write TSV header")?;
        for row in table.rows() {
            writer
                .write_record(row.cells().iter().map(cell_text))
                .context("Failed to write TSV row")?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush TSV output: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::domain::Row;
    use serde_json::{json, Value};

    #[test]
    fn test_tsv_output() {
        let mut table = Table::new(vec!["protein1".into(), "combined_score".into(), "preferred_name".into()]);
        table
            .push_row(Row::new(vec![json!("9606.A"), json!(812), json!("MAPK10")]))
            .unwrap();
        table
            .push_row(Row::new(vec![json!("9606.B"), json!(700), Value::Null]))
            .unwrap();

        let output = TsvFormatter::new().format(&table).unwrap();
        assert_eq!(
            output,
            "protein1\tcombined_score\tpreferred_name\n9606.A\t812\tMAPK10\n9606.B\t700\t\n"
        );
    }

    #[test]
    fn test_tsv_empty_table() {
        let table = Table::new(vec!["a".into(), "b".into()]);
        let output = TsvFormatter::new().format(&table).unwrap();
        assert_eq!(output, "a\tb\n");
    }
}
