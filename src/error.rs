//! Error types for identity request parsing, validation, and building.

use std::fmt;

/// Errors that can occur when parsing an identity request URI.
///
/// A parse error means the input is structurally unusable. Validation is
/// never attempted on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A structural separator (`://` or `?`) is absent or repeated
    MalformedUri {
        /// The separator that was expected exactly once
        separator: &'static str,
        /// How many times it was found
        found: usize,
    },
    /// A query token is not of the form `name=value`
    MalformedParameter {
        /// The offending token
        token: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse identity URI '{}': {}", self.input, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedUri { separator, found: 0 } => {
                let name = separator_name(separator);
                write!(f, "missing {name} separator '{separator}'")
            }
            Self::MalformedUri { separator, found } => {
                let name = separator_name(separator);
                write!(
                    f,
                    "{name} separator '{separator}' appears {found} times, expected exactly once"
                )
            }
            Self::MalformedParameter { token } => {
                write!(f, "malformed parameter '{token}'; expected 'name=value'")
            }
        }
    }
}

fn separator_name(separator: &str) -> &'static str {
    if separator == crate::constants::SCHEME_SEPARATOR {
        "scheme"
    } else {
        "query"
    }
}

impl std::error::Error for ParseError {}

/// Semantic rejections reported by the validator.
///
/// These are expected outcomes rather than faults; a [`Request`](crate::Request)
/// carries one as its verdict when a rule fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Scheme is not the registered one
    InvalidScheme {
        /// The scheme that was found
        found: String,
    },
    /// Path is not a known operation
    InvalidPath {
        /// The path that was found
        found: String,
    },
    /// `source` parameter is missing or empty
    InvalidSource,
    /// `paymentnumber` is missing, empty, or not all decimal digits
    InvalidPaymentNumber,
    /// `documentid` is missing or empty
    InvalidDocumentId,
}

impl ValidationError {
    /// Returns the short human-readable rejection reason.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidScheme { .. } => "invalid scheme",
            Self::InvalidPath { .. } => "invalid path",
            Self::InvalidSource => "invalid source",
            Self::InvalidPaymentNumber => "invalid payment number",
            Self::InvalidDocumentId => "invalid document ID",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme { found } | Self::InvalidPath { found } => {
                write!(f, "{} '{found}'", self.reason())
            }
            _ => write!(f, "{}", self.reason()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur when building an identity URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A parameter name or value contains a separator the parser would split on
    ReservedCharacter {
        /// Which part of the parameter was rejected ("name" or "value")
        field: &'static str,
        /// The rejected text
        value: String,
    },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedCharacter { field, value } => write!(
                f,
                "parameter {field} '{value}' contains a reserved separator; escaping is not supported"
            ),
        }
    }
}

impl std::error::Error for BuilderError {}
