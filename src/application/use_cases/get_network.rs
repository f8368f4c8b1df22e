use crate::application::dto::NetworkRequest;
use crate::interactions::domain::Table;
use crate::interactions::services::records_to_table;
use crate::ports::outbound::HttpClient;
use crate::shared::error::ProtlinksError;
use crate::shared::Result;
use tracing::debug;

/// Default STRING API root
pub const STRING_API_BASE_URL: &str = "https://string-db.org/api";

/// STRING rejects requests naming more identifiers than this
pub const MAX_IDENTIFIERS_PER_REQUEST: usize = 2000;

/// Separator STRING expects between identifiers (sent encoded as `%0D`)
const IDENTIFIER_SEPARATOR: &str = "\r";

/// Splits `items` into sub-lists of at most `size` entries
pub fn make_sublists<T>(items: &[T], size: usize) -> Vec<&[T]> {
    items.chunks(size.max(1)).collect()
}

/// GetNetworkUseCase - queries the STRING network API
///
/// Identifiers travel in a form-encoded POST body, since a full batch is far
/// too long for a query string. Large identifier lists are split into batches
/// of [`MAX_IDENTIFIERS_PER_REQUEST`]; the batch tables are concatenated.
pub struct GetNetworkUseCase<H> {
    http_client: H,
    api_base: String,
}

impl<H: HttpClient> GetNetworkUseCase<H> {
    pub fn new(http_client: H) -> Self {
        Self {
            http_client,
            api_base: STRING_API_BASE_URL.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// URL every network batch is posted to
    pub fn endpoint(&self) -> String {
        format!("{}/json/network", self.api_base.trim_end_matches('/'))
    }

    /// Form fields of the network query for one batch of identifiers
    pub fn make_form(
        &self,
        identifiers: &[String],
        request: &NetworkRequest,
    ) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("identifiers", identifiers.join(IDENTIFIER_SEPARATOR)),
            ("species", request.species.to_string()),
        ];
        if let Some(score) = request.required_score {
            form.push(("required_score", score.to_string()));
        }
        form.push(("caller_identity", "protlinks".to_string()));
        form
    }

    /// Fetches the network among `request.identifiers`
    ///
    /// # Errors
    /// `FetchFailed` when any batch fails, including batches whose columns
    /// do not line up; no partial table is returned.
    pub fn execute(&self, request: &NetworkRequest) -> Result<Table> {
        let batches = make_sublists(&request.identifiers, MAX_IDENTIFIERS_PER_REQUEST);
        debug!(
            "Querying STRING network for {} identifier(s) in {} batch(es)",
            request.identifiers.len(),
            batches.len()
        );

        let url = self.endpoint();
        let mut table = Table::default();
        for batch in batches {
            let response = self
                .http_client
                .post_form(&url, &self.make_form(batch, request))
                .map_err(|e| fetch_failed(format!("{:#}", e)))?;

            if !response.is_success() {
                return Err(fetch_failed(format!(
                    "STRING returned status {}",
                    response.status
                )));
            }

            let body = response
                .text()
                .map_err(|e| fetch_failed(format!("{:#}", e)))?;
            let batch_table = records_to_table(&body)
                .map_err(|e| fetch_failed(format!("malformed STRING response: {:#}", e)))?;
            table
                .extend(batch_table)
                .map_err(|e| fetch_failed(format!("{:#}", e)))?;
        }

        Ok(table)
    }
}

fn fetch_failed(details: String) -> anyhow::Error {
    ProtlinksError::FetchFailed { details }.into()
}
