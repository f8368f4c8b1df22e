use std::collections::BTreeMap;
use std::fmt;

/// Delimiter the services expect between list entries
pub const LIST_DELIMITER: char = '|';

/// A caller-supplied option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

impl OptionValue {
    /// Whether the value switches an option on.
    ///
    /// Text is truthy unless it is empty, `"false"` or `"0"` (case-insensitive).
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(value) => *value,
            OptionValue::Text(text) => {
                let text = text.trim();
                !(text.is_empty() || text.eq_ignore_ascii_case("false") || text == "0")
            }
            OptionValue::List(items) => !items.is_empty(),
        }
    }

    /// Renders the value as it is sent on the wire
    pub fn render(&self) -> String {
        match self {
            OptionValue::Text(text) => text.clone(),
            OptionValue::Bool(value) => value.to_string(),
            OptionValue::List(items) => join_list(items),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        OptionValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(value: [&str; N]) -> Self {
        OptionValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Joins list entries with the service delimiter
pub fn join_list(items: &[String]) -> String {
    items.join(&LIST_DELIMITER.to_string())
}

/// Caller-supplied options for one request
///
/// Keys are kept sorted so that the same options always produce the same URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<String, OptionValue>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.params.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

/// A query whose keys have all been checked against a service's option set
///
/// Only the parameter validator constructs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    params: BTreeMap<String, OptionValue>,
}

impl ValidatedQuery {
    pub(crate) fn new(params: BTreeMap<String, OptionValue>) -> Self {
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.params.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(OptionValue::Bool(true).is_truthy());
        assert!(!OptionValue::Bool(false).is_truthy());
        assert!(OptionValue::from("true").is_truthy());
        assert!(OptionValue::from("yes").is_truthy());
        assert!(!OptionValue::from("").is_truthy());
        assert!(!OptionValue::from("FALSE").is_truthy());
        assert!(!OptionValue::from("0").is_truthy());
        assert!(OptionValue::from(vec!["A"]).is_truthy());
        assert!(!OptionValue::List(vec![]).is_truthy());
    }

    #[test]
    fn test_render() {
        assert_eq!(OptionValue::Bool(true).render(), "true");
        assert_eq!(OptionValue::from("9606").render(), "9606");
        assert_eq!(OptionValue::from(["MAPK10", "BRCA1"]).render(), "MAPK10|BRCA1");
    }

    #[test]
    fn test_query_builder_overwrites_duplicate_keys() {
        let query = Query::new().with("max", "10").with("max", "20");
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("max"), Some(&OptionValue::from("20")));
    }

    #[test]
    fn test_query_keys_are_sorted() {
        let query: Query = vec![("taxId", "9606"), ("max", "5"), ("start", "0")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = query.keys().collect();
        assert_eq!(keys, vec!["max", "start", "taxId"]);
    }
}
