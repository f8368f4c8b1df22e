use crate::interactions::services::encode_query;
use crate::ports::outbound::{DownloadOutcome, HttpClient, HttpResponse, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// BlockingHttpClient adapter backed by `reqwest::blocking`
///
/// Plain requests keep reqwest's default timeout. Bulk downloads use a
/// second client without a total timeout, since STRING link files for
/// large organisms take minutes to transfer.
///
/// No retries: every failure is reported to the caller as-is.
pub struct BlockingHttpClient {
    client: Client,
    download_client: Client,
}

impl BlockingHttpClient {
    const CHUNK_SIZE: usize = 64 * 1024;

    /// Creates a new client with the crate user agent
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("protlinks/{}", version);

        let client = Client::builder().user_agent(user_agent.clone()).build()?;
        let download_client = Client::builder()
            .user_agent(user_agent)
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            download_client,
        })
    }
}

impl HttpClient for BlockingHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        debug!("GET returned status {} ({} bytes)", status, body.len());
        Ok(HttpResponse::new(status, body.to_vec()))
    }

    fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<HttpResponse> {
        let body = encode_query(form);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        debug!("POST returned status {} ({} bytes)", status, body.len());
        Ok(HttpResponse::new(status, body.to_vec()))
    }

    fn download(
        &self,
        url: &str,
        destination: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<DownloadOutcome> {
        let mut response = self.download_client.get(url).send()?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            debug!("Download of {} returned status {}", url, status);
            return Ok(DownloadOutcome {
                status,
                bytes_written: 0,
            });
        }

        let total = response.content_length();
        let file = File::create(destination)
            .with_context(|| format!("Failed to create {}", destination.display()))?;
        let mut writer = BufWriter::new(file);

        let mut buffer = vec![0u8; Self::CHUNK_SIZE];
        let mut written: u64 = 0;
        loop {
            let read = response
                .read(&mut buffer)
                .with_context(|| format!("Connection lost while downloading {}", url))?;
            if read == 0 {
                break;
            }
            writer
                .write_all(&buffer[..read])
                .with_context(|| format!("Failed to write {}", destination.display()))?;
            written += read as u64;
            reporter.report_progress(written, total, Some("Downloading database"));
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", destination.display()))?;

        debug!("Downloaded {} bytes to {}", written, destination.display());
        Ok(DownloadOutcome {
            status,
            bytes_written: written,
        })
    }
}

// Note: no Default implementation, since building the TLS client can fail.
