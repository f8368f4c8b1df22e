/// Formatter adapters for the supported table output formats
mod json_formatter;
mod markdown_formatter;
mod tsv_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use tsv_formatter::TsvFormatter;
