//! Multi-value query parameters.

use std::fmt;

/// Query parameters split from a raw query string.
///
/// Keys keep the order of their first appearance, and the values of a
/// repeated key keep the order they appeared in. Nothing is percent-decoded.
/// Lookups are linear, which suits the handful of parameters a URL carries.
///
/// # Examples
///
/// ```
/// use rawurl::QueryValues;
///
/// let values = QueryValues::parse("a=1&a=2&b");
/// assert_eq!(values.get_all("a"), &["1", "2"]);
/// assert_eq!(values.get("b"), Some(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryValues {
    params: Vec<(String, Vec<String>)>,
}

impl QueryValues {
    /// Creates an empty instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a query string (without leading '?') on `&`, then each pair
    /// on its first `=`.
    ///
    /// Empty pairs are skipped; a pair without `=` gets an empty value.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut values = Self::new();

        for pair in input.split('&') {
            if pair.is_empty() {
                continue;
            }

            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            values.push(name, value);
        }

        values
    }

    fn push(&mut self, name: &str, value: &str) {
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some((_, values)) => values.push(value.to_string()),
            None => self.params.push((name.to_string(), vec![value.to_string()])),
        }
    }

    fn values_of(&self, name: &str) -> Option<&Vec<String>> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values)
    }

    /// Returns the first value for a key, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values_of(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value for a key, in order of appearance.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values_of(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if the key appeared at least once.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.values_of(name).is_some()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over keys and their value lists, in order of
    /// first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the underlying key and value lists.
    #[must_use]
    pub fn into_inner(self) -> Vec<(String, Vec<String>)> {
        self.params
    }
}

impl fmt::Display for QueryValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, values) in &self.params {
            for value in values {
                if !first {
                    f.write_str("&")?;
                }
                first = false;
                write!(f, "{key}={value}")?;
            }
        }
        Ok(())
    }
}
