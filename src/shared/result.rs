/// Crate-wide result type.
///
/// Typed failures are `ProtlinksError` values wrapped in `anyhow::Error`,
/// so callers can add context with `?` and still recover the variant.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
