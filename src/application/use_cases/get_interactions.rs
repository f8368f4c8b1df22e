use crate::interactions::domain::{Query, Table};
use crate::interactions::services::{records_to_table, ParameterValidator, UrlBuilder};
use crate::ports::outbound::HttpClient;
use crate::shared::error::ProtlinksError;
use crate::shared::Result;
use tracing::debug;

/// Default BioGRID REST host
pub const BIOGRID_BASE_URL: &str = "https://webservice.thebiogrid.org/";

/// BioGRID resource returning interaction records
const INTERACTIONS_RESOURCE: &str = "interactions/";

/// GetInteractionsUseCase - fetches interaction records from the BioGRID REST API
///
/// Each call validates the query, builds the URL and issues exactly one GET.
/// Nothing is cached; repeated calls may return different live data.
///
/// # Type Parameters
/// * `H` - HttpClient implementation
pub struct GetInteractionsUseCase<H> {
    http_client: H,
    validator: ParameterValidator,
    url_builder: UrlBuilder,
}

impl<H: HttpClient> GetInteractionsUseCase<H> {
    /// Creates a use case against the public BioGRID host
    pub fn new(http_client: H, access_key: impl Into<String>) -> Self {
        Self {
            http_client,
            validator: ParameterValidator::biogrid(),
            url_builder: UrlBuilder::new(BIOGRID_BASE_URL, INTERACTIONS_RESOURCE, access_key),
        }
    }

    /// Points the use case at another host (mirrors, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let access_key = self.url_builder.access_key().to_string();
        self.url_builder = UrlBuilder::new(base_url, INTERACTIONS_RESOURCE, access_key);
        self
    }

    /// Validates `query` and returns the request URL without sending it
    ///
    /// # Errors
    /// - `InvalidOption` / `MissingSearchMode` from validation
    /// - `Validation` when no access key was configured
    pub fn make_url(&self, query: &Query) -> Result<String> {
        let validated = self.validator.validate(query)?;

        if self.url_builder.access_key().trim().is_empty() {
            return Err(ProtlinksError::Validation {
                message: "a BioGRID access key is required; request one at https://webservice.thebiogrid.org/".to_string(),
            }
            .into());
        }

        Ok(self.url_builder.build(&validated))
    }

    /// Fetches the interactions matching `query`
    ///
    /// # Returns
    /// One row per interaction record; the BioGRID interaction key is the row
    /// label rather than a column.
    ///
    /// # Errors
    /// Validation errors as in [`Self::make_url`]; `FetchFailed` on transport
    /// errors, non-2xx statuses or a body that is not a JSON record collection.
    pub fn execute(&self, query: &Query) -> Result<Table> {
        let url = self.make_url(query)?;
        debug!(
            "Requesting BioGRID interactions with {} parameter(s)",
            query.len()
        );

        let response = self.http_client.get(&url).map_err(|e| fetch_failed(format!("{:#}", e)))?;

        if !response.is_success() {
            return Err(fetch_failed(format!(
                "BioGRID returned status {}",
                response.status
            )));
        }

        let body = response
            .text()
            .map_err(|e| fetch_failed(format!("{:#}", e)))?;
        let table = records_to_table(&body)
            .map_err(|e| fetch_failed(format!("malformed BioGRID response: {:#}", e)))?;

        debug!("BioGRID returned {} interaction(s)", table.len());
        Ok(table)
    }
}

fn fetch_failed(details: String) -> anyhow::Error {
    ProtlinksError::FetchFailed { details }.into()
}
