/*
[INPUT]:  Normalized request fields as key/value strings
[OUTPUT]: Insertion-ordered parameter list and its form-urlencoded form
[POS]:    Data layer - request parameters shared by builder and signer
[UPDATE]: When changing query encoding rules
*/

use url::form_urlencoded;

/// Ordered request parameters.
///
/// Order is part of the signed payload, so this is a plain list of pairs
/// rather than a map. `push` always appends; duplicate keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<(String, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter at the end
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Builder-style `push`
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` serialization in insertion order
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let params = ParameterSet::new()
            .with("symbol", "BTCUSDT")
            .with("side", "BUY")
            .with("quantity", "0.001");

        let keys: Vec<_> = params.keys().collect();
        assert_eq!(keys, vec!["symbol", "side", "quantity"]);
        assert_eq!(params.to_query_string(), "symbol=BTCUSDT&side=BUY&quantity=0.001");
    }

    #[test]
    fn test_query_string_escapes_reserved_characters() {
        let params = ParameterSet::new().with("note", "a b&c=d");
        assert_eq!(params.to_query_string(), "note=a+b%26c%3Dd");
    }

    #[test]
    fn test_get_and_contains() {
        let params: ParameterSet = [("type", "LIMIT"), ("price", "80000")].into_iter().collect();
        assert_eq!(params.get("price"), Some("80000"));
        assert!(params.contains_key("type"));
        assert!(!params.contains_key("stopPrice"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_empty_set_encodes_to_empty_string() {
        let params = ParameterSet::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }
}
