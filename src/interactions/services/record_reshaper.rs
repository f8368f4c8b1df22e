use crate::interactions::domain::{Row, Table};
use crate::shared::Result;
use anyhow::Context;
use serde_json::{Map, Value};

/// Reshapes a JSON response body into a row-oriented table.
///
/// Accepted shapes:
/// - an object keyed by internal record id, each value a record object
///   (the key becomes the row label, not a column)
/// - an array of record objects (rows are unlabelled)
///
/// Columns are the union of record fields in first-seen order; fields a
/// record lacks are null.
pub fn records_to_table(body: &str) -> Result<Table> {
    let value: Value =
        serde_json::from_str(body).context("response body is not valid JSON")?;

    let records: Vec<(Option<String>, Map<String, Value>)> = match value {
        Value::Object(entries) => entries
            .into_iter()
            .map(|(id, record)| match record {
                Value::Object(fields) => Ok((Some(id), fields)),
                other => anyhow::bail!(
                    "record '{}' is a {} instead of an object",
                    id,
                    json_kind(&other)
                ),
            })
            .collect::<Result<_>>()?,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(position, record)| match record {
                Value::Object(fields) => Ok((None, fields)),
                other => anyhow::bail!(
                    "record #{} is a {} instead of an object",
                    position,
                    json_kind(&other)
                ),
            })
            .collect::<Result<_>>()?,
        other => anyhow::bail!(
            "expected a JSON object or array of records, got a {}",
            json_kind(&other)
        ),
    };

    let mut columns: Vec<String> = Vec::new();
    for (_, fields) in &records {
        for name in fields.keys() {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
    }

    let mut table = Table::new(columns.clone());
    for (label, mut fields) in records {
        let cells = columns
            .iter()
            .map(|column| fields.remove(column).unwrap_or(Value::Null))
            .collect();
        let row = match label {
            Some(label) => Row::labelled(label, cells),
            None => Row::new(cells),
        };
        table.push_row(row)?;
    }

    Ok(table)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
