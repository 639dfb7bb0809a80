//! The operations an identity request can ask for.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DOCUMENT_ID_PARAM, PAYMENT_NUMBER_PARAM};

/// A known operation, taken from the path of an identity request URI.
///
/// The path allow-list is exactly the set of variants. Matching is
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sign in to the application
    Login,
    /// Confirm a payment; requires a `paymentnumber`
    Confirm,
    /// Sign a document; requires a `documentid`
    Sign,
}

impl Operation {
    /// All known operations.
    pub const ALL: [Self; 3] = [Self::Login, Self::Confirm, Self::Sign];

    /// Returns the path string for this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Confirm => "confirm",
            Self::Sign => "sign",
        }
    }

    /// Returns the parameter this operation requires beyond `source`, if any.
    #[must_use]
    pub const fn required_param(self) -> Option<&'static str> {
        match self {
            Self::Login => None,
            Self::Confirm => Some(PAYMENT_NUMBER_PARAM),
            Self::Sign => Some(DOCUMENT_ID_PARAM),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Self::Login),
            "confirm" => Ok(Self::Confirm),
            "sign" => Ok(Self::Sign),
            _ => Err("unknown operation"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
