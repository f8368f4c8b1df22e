/// Network adapters for external API calls
mod blocking_http_client;

pub use blocking_http_client::BlockingHttpClient;
