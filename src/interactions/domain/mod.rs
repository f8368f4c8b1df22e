pub mod option_set;
pub mod query;
pub mod species;
pub mod table;

pub use option_set::{OptionSet, OptionSpec, BIOGRID_OPTIONS, GENE_LIST, SEARCH_MODES};
pub use query::{OptionValue, Query, ValidatedQuery};
pub use species::SpeciesId;
pub use table::{cell_text, Row, Table};
