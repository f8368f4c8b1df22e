use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Arc, Mutex};

use protlinks::prelude::*;

/// Mock HttpClient serving canned responses keyed by URL
///
/// Unknown URLs answer 404. POST responses queue up per URL and are served
/// in order. Every requested URL (and every posted form) is recorded, and
/// clones share the logs so a test can inspect them after moving the client
/// into a use case.
#[derive(Default, Clone)]
pub struct MockHttpClient {
    responses: HashMap<String, HttpResponse>,
    downloads: HashMap<String, HttpResponse>,
    posts: Arc<Mutex<HashMap<String, VecDeque<HttpResponse>>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub forms: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    pub should_fail: bool,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(url.to_string(), HttpResponse::new(status, body));
        self
    }

    pub fn with_download(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.downloads
            .insert(url.to_string(), HttpResponse::new(status, body));
        self
    }

    pub fn with_post_response(self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.posts
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(HttpResponse::new(status, body));
        self
    }

    pub fn get_forms(&self) -> Vec<Vec<(String, String)>> {
        self.forms.lock().unwrap().clone()
    }

    /// Every request fails as if the connection was refused
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record(&self, url: &str) -> Result<()> {
        self.requests.lock().unwrap().push(url.to_string());
        if self.should_fail {
            anyhow::bail!("Mock connection refused: {}", url);
        }
        Ok(())
    }
}

impl HttpClient for MockHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.record(url)?;
        Ok(self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "Not Found")))
    }

    fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<HttpResponse> {
        self.record(url)?;
        self.forms.lock().unwrap().push(
            form.iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        );
        Ok(self
            .posts
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| HttpResponse::new(404, "Not Found")))
    }

    fn download(
        &self,
        url: &str,
        destination: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<DownloadOutcome> {
        self.record(url)?;
        let Some(response) = self.downloads.get(url) else {
            return Ok(DownloadOutcome {
                status: 404,
                bytes_written: 0,
            });
        };
        if !response.is_success() {
            return Ok(DownloadOutcome {
                status: response.status,
                bytes_written: 0,
            });
        }

        std::fs::write(destination, &response.body)?;
        let written = response.body.len() as u64;
        reporter.report_progress(written, Some(written), Some("Downloading database"));
        Ok(DownloadOutcome {
            status: response.status,
            bytes_written: written,
        })
    }
}
