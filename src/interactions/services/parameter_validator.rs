use crate::interactions::domain::query::join_list;
use crate::interactions::domain::{
    OptionSet, OptionValue, Query, ValidatedQuery, BIOGRID_OPTIONS, GENE_LIST, SEARCH_MODES,
};
use crate::shared::error::ProtlinksError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// ParameterValidator checks a query against a service's option set
///
/// Validation never touches the caller's query; a new `ValidatedQuery` is
/// returned instead.
#[derive(Debug, Clone, Copy)]
pub struct ParameterValidator {
    options: &'static OptionSet,
}

impl ParameterValidator {
    pub fn new(options: &'static OptionSet) -> Self {
        Self { options }
    }

    pub fn biogrid() -> Self {
        Self::new(&BIOGRID_OPTIONS)
    }

    pub fn options(&self) -> &'static OptionSet {
        self.options
    }

    /// Validates `query` and serializes the gene list for transport
    ///
    /// # Errors
    /// - `InvalidOption` for the first key (in sorted order) missing from the option set
    /// - `MissingSearchMode` when `geneList` is given without a truthy search mode
    pub fn validate(&self, query: &Query) -> Result<ValidatedQuery> {
        if let Some(unknown) = query.keys().find(|key| !self.options.contains(key)) {
            return Err(ProtlinksError::InvalidOption {
                option: unknown.to_string(),
                service: self.options.service,
                docs_url: self.options.docs_url,
            }
            .into());
        }

        let mut params: BTreeMap<String, OptionValue> = query
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();

        if let Some(genes) = params.get(GENE_LIST) {
            let has_search_mode = SEARCH_MODES
                .iter()
                .any(|mode| query.get(mode).is_some_and(OptionValue::is_truthy));

            if !has_search_mode {
                return Err(ProtlinksError::MissingSearchMode {
                    companions: Self::companions(),
                }
                .into());
            }

            let serialized = match genes {
                OptionValue::List(items) => join_list(items),
                other => other.render(),
            };
            params.insert(GENE_LIST.to_string(), OptionValue::Text(serialized));
        }

        Ok(ValidatedQuery::new(params))
    }

    fn companions() -> String {
        format!(
            "{}, {} or {}",
            SEARCH_MODES[0], SEARCH_MODES[1], SEARCH_MODES[2]
        )
    }
}

impl Default for ParameterValidator {
    fn default() -> Self {
        Self::biogrid()
    }
}
