use crate::interactions::domain::{Row, Table};
use crate::shared::error::ProtlinksError;
use crate::shared::Result;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use tracing::debug;

/// Alias id column in STRING releases before v12
const LEGACY_ALIAS_ID_COLUMN: &str = "protein_external_id";

/// Alias id column in STRING v12 and later
const ALIAS_ID_COLUMN: &str = "#string_protein_id";

const PREFERRED_NAME_COLUMN: &str = "preferred_name";

/// Columns of the joined links table, in output order
///
/// `preferred_name` only drives the gene filter and is not returned.
pub const JOINED_COLUMNS: [&str; 3] = ["protein1", "protein2", "combined_score"];

/// Placeholder sample name when the dataset has no named proteins at all
const UNKNOWN_EXAMPLE: &str = "<no named proteins in this dataset>";

/// Lookup from STRING protein id to preferred gene name
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    names: HashMap<String, String>,
}

impl AliasIndex {
    /// Reads a tab-separated STRING `protein.info` table
    ///
    /// Only the protein id and `preferred_name` columns are kept.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| parse_error("protein info", e))?;
        let id_index = headers
            .iter()
            .position(|h| h == ALIAS_ID_COLUMN || h == LEGACY_ALIAS_ID_COLUMN)
            .ok_or_else(|| {
                parse_error(
                    "protein info",
                    format!(
                        "missing '{}' or '{}' column",
                        ALIAS_ID_COLUMN, LEGACY_ALIAS_ID_COLUMN
                    ),
                )
            })?;
        let name_index = headers
            .iter()
            .position(|h| h == PREFERRED_NAME_COLUMN)
            .ok_or_else(|| {
                parse_error(
                    "protein info",
                    format!("missing '{}' column", PREFERRED_NAME_COLUMN),
                )
            })?;

        let mut names = HashMap::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| parse_error("protein info", e))?;
            if let (Some(id), Some(name)) = (record.get(id_index), record.get(name_index)) {
                names.insert(id.to_string(), name.to_string());
            }
        }

        debug!("Loaded {} protein alias(es)", names.len());
        Ok(Self { names })
    }

    pub fn preferred_name(&self, protein_id: &str) -> Option<&str> {
        self.names.get(protein_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for AliasIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Joins a space-separated STRING `protein.links` table against `aliases` and
/// keeps the interactions of `genes` scoring at least `min_score`.
///
/// The join is a left join on `protein1`: links without an alias get a null
/// `preferred_name` (and therefore never match a gene). The name is only used
/// for filtering; the result holds the [`JOINED_COLUMNS`].
///
/// # Errors
/// - `NoInteractionsFound` when no joined row names one of `genes`; the
///   message carries the first preferred name seen as a format example
/// - `ScoreThresholdTooHigh` when the gene filter matched but no row reaches `min_score`
/// - `DatasetParseError` on a malformed links table
pub fn join_links<R: Read>(
    links: R,
    aliases: &AliasIndex,
    genes: &HashSet<String>,
    min_score: u32,
) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(links);

    let headers = csv_reader.headers().map_err(|e| parse_error("protein links", e))?;
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| parse_error("protein links", format!("missing '{}' column", name)))
    };
    let protein1_index = column("protein1")?;
    let protein2_index = column("protein2")?;
    let score_index = column("combined_score")?;

    let mut example: Option<String> = None;
    let mut gene_matches: Vec<(String, String, u32)> = Vec::new();
    let mut total = 0usize;

    for (line, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| parse_error("protein links", e))?;
        let field = |index: usize| {
            record.get(index).ok_or_else(|| {
                parse_error("protein links", format!("line {} is missing a field", line + 2))
            })
        };
        let protein1 = field(protein1_index)?;
        let protein2 = field(protein2_index)?;
        let score_text = field(score_index)?;
        total += 1;

        let preferred = aliases.preferred_name(protein1);
        if example.is_none() {
            example = preferred.map(str::to_string);
        }

        if preferred.is_some_and(|name| genes.contains(name)) {
            let score: u32 = score_text.parse().map_err(|_| {
                parse_error(
                    "protein links",
                    format!("line {}: invalid combined_score '{}'", line + 2, score_text),
                )
            })?;
            gene_matches.push((protein1.to_string(), protein2.to_string(), score));
        }
    }

    debug!(
        "Joined {} link(s); {} involve the requested gene(s)",
        total,
        gene_matches.len()
    );

    if gene_matches.is_empty() {
        return Err(ProtlinksError::NoInteractionsFound {
            example: example.unwrap_or_else(|| UNKNOWN_EXAMPLE.to_string()),
        }
        .into());
    }

    let mut table = Table::new(JOINED_COLUMNS.iter().map(|c| c.to_string()).collect());
    for (protein1, protein2, score) in gene_matches {
        if score >= min_score {
            table.push_row(Row::new(vec![
                Value::String(protein1),
                Value::String(protein2),
                Value::from(score),
            ]))?;
        }
    }

    if table.is_empty() {
        return Err(ProtlinksError::ScoreThresholdTooHigh { min_score }.into());
    }

    Ok(table)
}

fn parse_error(file: &str, details: impl std::fmt::Display) -> anyhow::Error {
    ProtlinksError::DatasetParseError {
        file: file.to_string(),
        details: details.to_string(),
    }
    .into()
}
