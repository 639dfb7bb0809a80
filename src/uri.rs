//! Structural parsing of identity request URIs.

use std::fmt;
use std::str::FromStr;

use crate::constants::{QUERY_SEPARATOR, SCHEME_SEPARATOR};
use crate::error::{ParseError, ParseErrorKind};
use crate::query::QueryParams;

/// A structurally parsed identity request URI.
///
/// Parsing only splits the input; it does not check the scheme, the path,
/// or any parameter value. See [`validate`](crate::validate()) for that.
///
/// # Structure
///
/// ```text
/// <scheme>://<path>?<name1>=<value1>&<name2>=<value2>...
/// ```
///
/// No escaping is supported. A `://`, `?`, `&`, or `=` inside a name or
/// value breaks the split and is reported as a parse error.
///
/// # Examples
///
/// ```
/// use identity_request::IdentityUri;
///
/// let uri = IdentityUri::parse("visma-identity://confirm?source=netvisor&paymentnumber=102226").unwrap();
/// assert_eq!(uri.scheme(), "visma-identity");
/// assert_eq!(uri.path(), "confirm");
/// assert_eq!(uri.query().get("paymentnumber"), Some("102226"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityUri {
    scheme: String,
    path: String,
    query: QueryParams,
}

impl IdentityUri {
    /// Parses an identity request URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if, checked in this order:
    /// - `://` does not appear exactly once
    /// - `?` does not appear exactly once after the scheme
    /// - any query token is not exactly `name=value`
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Creates a URI from already separated components.
    ///
    /// The components are not checked. Use
    /// [`IdentityUriBuilder`](crate::IdentityUriBuilder) to get a URI that is
    /// guaranteed to parse back.
    #[must_use]
    pub fn new(scheme: impl Into<String>, path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            scheme: scheme.into(),
            path: path.into(),
            query,
        }
    }

    /// Returns the scheme (text before `://`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the path (text between `://` and `?`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn query(&self) -> &QueryParams {
        &self.query
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        let (scheme, rest) = split_exactly_once(input, SCHEME_SEPARATOR)?;
        let (path, query_str) = split_exactly_once(rest, QUERY_SEPARATOR)?;
        let query = QueryParams::parse(query_str)?;

        Ok(Self {
            scheme: scheme.to_string(),
            path: path.to_string(),
            query,
        })
    }
}

/// Splits `input` around `separator`, which must occur exactly once.
fn split_exactly_once<'a>(
    input: &'a str,
    separator: &'static str,
) -> Result<(&'a str, &'a str), ParseErrorKind> {
    let found = input.matches(separator).count();
    let malformed = ParseErrorKind::MalformedUri { separator, found };
    if found != 1 {
        return Err(malformed);
    }
    input.split_once(separator).ok_or(malformed)
}

impl fmt::Display for IdentityUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SCHEME_SEPARATOR}{}{QUERY_SEPARATOR}{}",
            self.scheme, self.path, self.query
        )
    }
}

impl FromStr for IdentityUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for IdentityUri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IdentityUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IdentityUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
