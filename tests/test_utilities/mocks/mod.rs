/// Mock implementations for testing
mod mock_http_client;
mod mock_progress_reporter;

pub use mock_http_client::MockHttpClient;
pub use mock_progress_reporter::MockProgressReporter;
