use crate::interactions::domain::Table;
use crate::ports::outbound::TableFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting an array of row objects
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for JsonFormatter {
    fn format(&self, table: &Table) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&table.to_records())?;
        output.push('\n');
        Ok(output)
    }
}
