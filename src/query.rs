//! Query parameters type for identity request URIs.

use std::fmt;
use std::str::FromStr;

use crate::constants::{PARAM_SEPARATOR, VALUE_SEPARATOR};
use crate::error::ParseErrorKind;

/// Query parameters from an identity request URI.
///
/// Names are unique. Inserting a name that is already present replaces its
/// value in place, so iteration follows first-insertion order while the
/// last written value wins.
///
/// # Examples
///
/// ```
/// use identity_request::QueryParams;
///
/// let params = QueryParams::parse("source=netvisor&paymentnumber=102226").unwrap();
/// assert_eq!(params.get("source"), Some("netvisor"));
/// assert_eq!(params.to_string(), "source=netvisor&paymentnumber=102226");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses query parameters from a query string (without leading '?').
    ///
    /// An empty string yields no parameters. Every other token must split
    /// on `=` into exactly a name and a value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::MalformedParameter`] naming the first token
    /// that lacks `=` or contains more than one.
    pub fn parse(input: &str) -> Result<Self, ParseErrorKind> {
        let mut params = Self::new();

        if input.is_empty() {
            return Ok(params);
        }

        for token in input.split(PARAM_SEPARATOR) {
            let mut parts = token.split(VALUE_SEPARATOR);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(value), None) => params.insert(name, value),
                _ => {
                    return Err(ParseErrorKind::MalformedParameter {
                        token: token.to_string(),
                    });
                }
            }
        }

        Ok(params)
    }

    /// Inserts a parameter, replacing the value of an existing name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((name, value)),
        }
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the parameter is present, even with an empty value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}{VALUE_SEPARATOR}{v}"))
            .collect();
        write!(f, "{}", pairs.join(PARAM_SEPARATOR))
    }
}

impl FromStr for QueryParams {
    type Err = ParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for (k, v) in &self.params {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
