use crate::interactions::domain::ValidatedQuery;
use crate::interactions::domain::query::LIST_DELIMITER;

/// Percent-encoded form of the list delimiter
const ENCODED_DELIMITER: &str = "%7C";

/// UrlBuilder composes request URLs for a record query API
///
/// The fixed credential and format fields are appended after the caller's
/// parameters, which are emitted in sorted key order.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    resource: String,
    access_key: String,
    format: String,
}

impl UrlBuilder {
    pub fn new(
        base_url: impl Into<String>,
        resource: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            resource: resource.into(),
            access_key: access_key.into(),
            format: "json".to_string(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// base + resource + `?` + encoded query
    pub fn build(&self, query: &ValidatedQuery) -> String {
        let mut pairs: Vec<(&str, String)> = query
            .iter()
            .map(|(key, value)| (key, value.render()))
            .collect();
        pairs.push(("accessKey", self.access_key.clone()));
        pairs.push(("format", self.format.clone()));

        format!(
            "{}{}?{}",
            Self::with_trailing_slash(&self.base_url),
            self.resource,
            encode_query(&pairs)
        )
    }

    fn with_trailing_slash(base: &str) -> String {
        if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        }
    }
}

/// Encodes `key=value` pairs joined by `&`, leaving the list delimiter unescaped
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(component: &str) -> String {
    urlencoding::encode(component).replace(ENCODED_DELIMITER, &LIST_DELIMITER.to_string())
}
