/// Interaction domain - pure query, table and join logic
///
/// Nothing in this module performs I/O; network and filesystem access
/// go through the ports in `crate::ports`.
pub mod domain;
pub mod services;
