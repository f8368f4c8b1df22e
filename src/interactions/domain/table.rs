use crate::shared::error::ProtlinksError;
use crate::shared::Result;
use serde_json::{Map, Value};

/// One interaction record
///
/// `label` is the service's internal record identifier, kept as the row index
/// rather than as a data column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    label: Option<String>,
    cells: Vec<Value>,
}

impl Row {
    pub fn new(cells: Vec<Value>) -> Self {
        Self { label: None, cells }
    }

    pub fn labelled(label: impl Into<String>, cells: Vec<Value>) -> Self {
        Self {
            label: Some(label.into()),
            cells,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }
}

/// Row-oriented result table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Appends a row; its width must match the column count
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.cells.len() != self.columns.len() {
            return Err(ProtlinksError::Validation {
                message: format!(
                    "row has {} cell(s) but the table has {} column(s)",
                    row.cells.len(),
                    self.columns.len()
                ),
            }
            .into());
        }
        self.rows.push(row);
        Ok(())
    }

    /// Cell at `row` in the named column
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// All values of the named column, top to bottom
    pub fn column_values<'a>(&'a self, column: &str) -> Option<impl Iterator<Item = &'a Value>> {
        let index = self.column_index(column)?;
        Some(self.rows.iter().filter_map(move |row| row.get(index)))
    }

    /// Returns the table without the named column; unknown names are ignored
    pub fn drop_column(mut self, column: &str) -> Table {
        if let Some(index) = self.column_index(column) {
            self.columns.remove(index);
            for row in &mut self.rows {
                row.cells.remove(index);
            }
        }
        self
    }

    /// Keeps only the rows for which `keep` returns true
    pub fn retain_rows<F>(mut self, mut keep: F) -> Table
    where
        F: FnMut(&Row) -> bool,
    {
        self.rows.retain(|row| keep(row));
        self
    }

    /// Appends all rows of `other`.
    ///
    /// Tables without columns (empty responses) are absorbed; otherwise the
    /// column lists must be identical.
    pub fn extend(&mut self, other: Table) -> Result<()> {
        if other.columns.is_empty() && other.rows.is_empty() {
            return Ok(());
        }
        if self.columns.is_empty() && self.rows.is_empty() {
            *self = other;
            return Ok(());
        }
        if self.columns != other.columns {
            return Err(ProtlinksError::Validation {
                message: format!(
                    "cannot combine tables with different columns: [{}] vs [{}]",
                    self.columns.join(", "),
                    other.columns.join(", ")
                ),
            }
            .into());
        }
        self.rows.extend(other.rows);
        Ok(())
    }

    /// Rows as JSON objects keyed by column name
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.cells.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

/// Plain-text rendering of a cell: strings unquoted, null as empty
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
