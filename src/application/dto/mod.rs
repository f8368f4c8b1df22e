/// Data Transfer Objects for application layer
///
/// DTOs carry validated input from adapters (CLI, library callers)
/// into the use cases.
mod network_request;

pub use network_request::NetworkRequest;
