pub mod link_joiner;
pub mod parameter_validator;
pub mod record_reshaper;
pub mod url_builder;

pub use link_joiner::{join_links, AliasIndex, JOINED_COLUMNS};
pub use parameter_validator::ParameterValidator;
pub use record_reshaper::records_to_table;
pub use url_builder::{encode_query, UrlBuilder};
