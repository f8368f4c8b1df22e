use crate::interactions::domain::{SpeciesId, Table};
use crate::interactions::services::{join_links, AliasIndex};
use crate::ports::outbound::{HttpClient, ProgressReporter};
use crate::shared::error::ProtlinksError;
use crate::shared::Result;
use anyhow::Context;
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Default minimum combined score (STRING "medium confidence")
pub const DEFAULT_MIN_SCORE: u32 = 600;

/// Highest combined score STRING reports
pub const MAX_COMBINED_SCORE: u32 = 1000;

/// STRING endpoints used to locate the bulk files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEndpoints {
    /// JSON endpoint returning the current database version
    pub version_url: String,
    /// Root of the versioned download tree
    pub download_base: String,
}

impl Default for StringEndpoints {
    fn default() -> Self {
        Self {
            version_url: "https://string-db.org/api/json/version".to_string(),
            download_base: "https://stringdb-static.org/download".to_string(),
        }
    }
}

/// Kinds of per-species bulk files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFileKind {
    /// Interaction links with combined scores
    Links,
    /// Protein info (preferred names)
    Info,
}

impl StringFileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringFileKind::Links => "links",
            StringFileKind::Info => "info",
        }
    }
}

impl StringEndpoints {
    /// Versioned, species-templated download URL of a bulk file
    pub fn download_url(&self, kind: StringFileKind, version: &str, species: &SpeciesId) -> String {
        let kind = kind.as_str();
        format!(
            "{base}/protein.{kind}.v{version}/{species}.protein.{kind}.v{version}.txt.gz",
            base = self.download_base.trim_end_matches('/'),
            kind = kind,
            version = version,
            species = species,
        )
    }
}

#[derive(Debug, Deserialize)]
struct VersionEntry {
    string_version: String,
}

/// StringDataset - a downloaded STRING network for one organism
///
/// Loading looks up the current STRING version, downloads the links and info
/// files into a private temporary directory and indexes the preferred names.
/// The directory is removed when the dataset is dropped, whichever way the
/// caller exits.
pub struct StringDataset {
    species: SpeciesId,
    version: String,
    links_path: PathBuf,
    aliases: AliasIndex,
    _workdir: TempDir,
}

impl StringDataset {
    /// Loads the dataset for `species` from the public STRING servers
    pub fn load<H: HttpClient>(
        http_client: &H,
        species: SpeciesId,
        reporter: &dyn ProgressReporter,
    ) -> Result<Self> {
        Self::load_from(http_client, species, reporter, &StringEndpoints::default())
    }

    /// Loads the dataset using explicit endpoints
    ///
    /// # Errors
    /// - `VersionLookupFailed` when the version endpoint fails or returns no version
    /// - `DatabaseNotFound` when a bulk file returns a non-success status
    /// - `DatasetParseError` when the info file cannot be read
    pub fn load_from<H: HttpClient>(
        http_client: &H,
        species: SpeciesId,
        reporter: &dyn ProgressReporter,
        endpoints: &StringEndpoints,
    ) -> Result<Self> {
        let version = lookup_version(http_client, &endpoints.version_url)?;
        debug!("Current STRING version is {}", version);

        let workdir = tempfile::Builder::new()
            .prefix("protlinks-")
            .tempdir()
            .context("Failed to create a temporary directory for STRING downloads")?;

        reporter.report(&format!(
            "📥 Downloading STRING v{} network for species {}",
            version, species
        ));
        let links_path = download_file(
            http_client,
            &endpoints.download_url(StringFileKind::Links, &version, &species),
            &workdir.path().join(format!("{}.txt.gz", species)),
            reporter,
        )?;
        reporter.report_completion("✅ Interaction links downloaded");

        let info_path = download_file(
            http_client,
            &endpoints.download_url(StringFileKind::Info, &version, &species),
            &workdir.path().join(format!("{}-pt_info.txt.gz", species)),
            reporter,
        )?;
        reporter.report_completion("✅ Protein info downloaded");

        let aliases = AliasIndex::from_reader(open_gzip(&info_path)?)?;

        Ok(Self {
            species,
            version,
            links_path,
            aliases,
            _workdir: workdir,
        })
    }

    pub fn species(&self) -> &SpeciesId {
        &self.species
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Location of the downloaded links file (inside the dataset's temp dir)
    pub fn links_path(&self) -> &Path {
        &self.links_path
    }

    pub fn aliases(&self) -> &AliasIndex {
        &self.aliases
    }

    /// Interactions of `genes` with a combined score of at least `min_score`
    ///
    /// Genes are matched against STRING preferred names. Returns the columns
    /// `protein1, protein2, combined_score`.
    ///
    /// # Errors
    /// - `NoInteractionsFound` when none of `genes` appears; the message shows
    ///   a preferred name from this dataset as a format example
    /// - `ScoreThresholdTooHigh` when no interaction reaches `min_score`,
    ///   including any threshold above [`MAX_COMBINED_SCORE`]
    pub fn get_neighbors<S: AsRef<str>>(&self, genes: &[S], min_score: u32) -> Result<Table> {
        let genes: HashSet<String> = genes.iter().map(|g| g.as_ref().to_string()).collect();
        join_links(open_gzip(&self.links_path)?, &self.aliases, &genes, min_score)
    }
}

impl fmt::Display for StringDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<StringDB(v{}) network data for species {}>",
            self.version, self.species
        )
    }
}

impl fmt::Debug for StringDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringDataset")
            .field("species", &self.species)
            .field("version", &self.version)
            .field("links_path", &self.links_path)
            .field("aliases", &self.aliases.len())
            .finish()
    }
}

/// Queries the STRING version endpoint
fn lookup_version<H: HttpClient>(http_client: &H, url: &str) -> Result<String> {
    let version_failed = |details: String| -> anyhow::Error {
        ProtlinksError::VersionLookupFailed { details }.into()
    };

    let response = http_client
        .get(url)
        .map_err(|e| version_failed(format!("{:#}", e)))?;
    if !response.is_success() {
        return Err(version_failed(format!(
            "version endpoint returned status {}",
            response.status
        )));
    }

    let entries: Vec<VersionEntry> = serde_json::from_slice(&response.body)
        .map_err(|e| version_failed(format!("unexpected version response: {}", e)))?;

    entries
        .into_iter()
        .map(|entry| entry.string_version.trim().to_string())
        .find(|version| !version.is_empty())
        .ok_or_else(|| version_failed("version endpoint returned no version".to_string()))
}

fn download_file<H: HttpClient>(
    http_client: &H,
    url: &str,
    destination: &Path,
    reporter: &dyn ProgressReporter,
) -> Result<PathBuf> {
    debug!("Downloading {}", url);
    let outcome = http_client.download(url, destination, reporter)?;
    if !outcome.is_success() {
        reporter.report_error(&format!("❌ Download failed with status {}", outcome.status));
        return Err(ProtlinksError::DatabaseNotFound {
            url: url.to_string(),
            status: outcome.status,
        }
        .into());
    }
    Ok(destination.to_path_buf())
}

fn open_gzip(path: &Path) -> Result<GzDecoder<BufReader<File>>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(GzDecoder::new(BufReader::new(file)))
}
