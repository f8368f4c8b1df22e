//! protlinks - protein-protein interaction client for BioGRID and STRING
//!
//! This library validates query options against each service's documented
//! API, builds request URLs, downloads and decompresses STRING bulk files and
//! returns interactions as tables. Everything is synchronous and blocking.
//!
//! # Architecture
//!
//! - **Domain Layer** (`interactions`): option sets, queries, tables and the
//!   pure validation / URL / join logic
//! - **Application Layer** (`application`): use cases for each data source
//! - **Ports** (`ports`): interfaces for HTTP, progress and output
//! - **Adapters** (`adapters`): reqwest, indicatif and formatter implementations
//! - **Shared** (`shared`): error types and the result alias
//!
//! # Example
//!
//! ```no_run
//! use protlinks::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let biogrid = GetInteractionsUseCase::new(BlockingHttpClient::new()?, "my-access-key");
//! let query = Query::new()
//!     .with("searchNames", true)
//!     .with("geneList", ["MAPK10", "BRCA1"]);
//! let interactions = biogrid.execute(&query)?;
//!
//! let http = BlockingHttpClient::new()?;
//! let dataset = StringDataset::load(&http, SpeciesId::new("9606")?, &SilentProgressReporter)?;
//! let neighbors = dataset.get_neighbors(&["MAPK10"], DEFAULT_MIN_SCORE)?;
//!
//! print!("{}", TsvFormatter::new().format(&interactions)?);
//! print!("{}", TsvFormatter::new().format(&neighbors)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod interactions;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TsvFormatter,
    };
    pub use crate::adapters::outbound::network::BlockingHttpClient;
    pub use crate::application::dto::NetworkRequest;
    pub use crate::application::use_cases::{
        GetInteractionsUseCase, GetNetworkUseCase, StringDataset, StringEndpoints,
        DEFAULT_MIN_SCORE,
    };
    pub use crate::interactions::domain::{
        OptionValue, Query, Row, SpeciesId, Table, ValidatedQuery, BIOGRID_OPTIONS,
    };
    pub use crate::interactions::services::{ParameterValidator, UrlBuilder};
    pub use crate::ports::outbound::{
        DownloadOutcome, HttpClient, HttpResponse, OutputPresenter, ProgressReporter,
        TableFormatter,
    };
    pub use crate::shared::error::{ExitCode, ProtlinksError};
    pub use crate::shared::Result;
}
