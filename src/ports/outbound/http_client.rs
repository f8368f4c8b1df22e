use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use std::path::Path;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8
    pub fn text(&self) -> Result<String> {
        std::str::from_utf8(&self.body)
            .map(str::to_owned)
            .map_err(|e| anyhow::anyhow!("response body is not valid UTF-8: {}", e))
    }
}

/// Result of streaming a file to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub status: u16,
    /// Bytes written to the destination; zero when the status was not 2xx
    pub bytes_written: u64,
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HttpClient port for synchronous outbound HTTP
///
/// Implementations return `Err` only for transport failures (DNS, TLS,
/// connection reset, I/O). Non-2xx statuses are reported through the status
/// code so callers can map them to their own errors.
pub trait HttpClient {
    /// Issues a single GET request and buffers the body
    fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Issues a single POST with an `application/x-www-form-urlencoded` body
    ///
    /// Used where the parameters are too large for a query string.
    fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<HttpResponse>;

    /// Streams the body of a GET request into `destination`
    ///
    /// # Arguments
    /// * `url` - Resource to download
    /// * `destination` - File to create; left untouched when the status is not 2xx
    /// * `reporter` - Receives byte-level progress
    fn download(
        &self,
        url: &str,
        destination: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<DownloadOutcome>;
}
