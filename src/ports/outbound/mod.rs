/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the network, the console and the file system.
pub mod formatter;
pub mod http_client;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::TableFormatter;
pub use http_client::{DownloadOutcome, HttpClient, HttpResponse};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
