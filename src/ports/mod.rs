/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the library API itself is the
/// inbound side, called directly by the CLI and by library users.
pub mod outbound;
