//! The request entity handed to callers.

use std::fmt;

use crate::error::{ParseError, ValidationError};
use crate::operation::Operation;
use crate::query::QueryParams;
use crate::uri::IdentityUri;
use crate::validate::validate;

/// Outcome of validating a parsed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every applicable rule passed
    Valid(Operation),
    /// The first rule that failed
    Invalid(ValidationError),
}

impl Verdict {
    /// Returns true for [`Verdict::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl From<Result<Operation, ValidationError>> for Verdict {
    fn from(result: Result<Operation, ValidationError>) -> Self {
        match result {
            Ok(op) => Self::Valid(op),
            Err(e) => Self::Invalid(e),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(_) => write!(f, "valid"),
            Self::Invalid(e) => write!(f, "invalid ({})", e.reason()),
        }
    }
}

/// A parsed and validated identity request.
///
/// Built once from a raw string and read-only afterwards. Structurally
/// malformed input never produces a `Request`; semantically invalid input
/// does, with a [`Verdict::Invalid`] verdict.
///
/// # Examples
///
/// ```
/// use identity_request::{Operation, Request};
///
/// let req = Request::new("visma-identity://confirm?source=netvisor&paymentnumber=102226").unwrap();
/// assert!(req.is_valid());
/// assert_eq!(req.operation(), Some(Operation::Confirm));
/// assert_eq!(req.params().and_then(|p| p.get("paymentnumber")), Some("102226"));
///
/// let req = Request::new("visma-identity://logout?source=severa").unwrap();
/// assert!(!req.is_valid());
/// assert_eq!(req.rejection().map(|e| e.reason()), Some("invalid path"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    raw_uri: String,
    uri: IdentityUri,
    verdict: Verdict,
}

impl Request {
    /// Parses and validates a raw request URI.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is structurally malformed. Failing
    /// validation is not an error; inspect [`Request::verdict`].
    pub fn new(raw: &str) -> Result<Self, ParseError> {
        let uri = IdentityUri::parse(raw)?;
        Ok(Self::from_uri(raw, uri))
    }

    fn from_uri(raw: &str, uri: IdentityUri) -> Self {
        let verdict = validate(&uri).into();
        Self {
            raw_uri: raw.to_string(),
            uri,
            verdict,
        }
    }

    /// Returns the original input string.
    #[must_use]
    pub fn raw_uri(&self) -> &str {
        &self.raw_uri
    }

    /// Returns the parsed components, whatever the verdict.
    #[must_use]
    pub const fn uri(&self) -> &IdentityUri {
        &self.uri
    }

    /// Returns the scheme as written in the input.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.uri.scheme()
    }

    /// Returns the validation verdict.
    #[must_use]
    pub const fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns true if every validation rule passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    /// Returns the requested operation when valid.
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        match self.verdict {
            Verdict::Valid(op) => Some(op),
            Verdict::Invalid(_) => None,
        }
    }

    /// Returns the rejection when invalid.
    #[must_use]
    pub const fn rejection(&self) -> Option<&ValidationError> {
        match &self.verdict {
            Verdict::Valid(_) => None,
            Verdict::Invalid(e) => Some(e),
        }
    }

    /// Returns the identified path when valid.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.is_valid().then_some(self.uri.path())
    }

    /// Returns the parameters when valid.
    #[must_use]
    pub fn params(&self) -> Option<&QueryParams> {
        self.is_valid().then_some(self.uri.query())
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Request:")?;
        writeln!(f, "  Path of request:")?;
        writeln!(f, "    {}", self.uri.path())?;
        writeln!(f, "  Parameters:")?;
        for (name, value) in self.uri.query().iter() {
            writeln!(f, "    {name} : {value}")?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Request {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Request {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Request", 5)?;
        s.serialize_field("uri", &self.raw_uri)?;
        s.serialize_field("valid", &self.is_valid())?;
        s.serialize_field("path", &self.path())?;
        s.serialize_field("params", &self.params())?;
        s.serialize_field("reason", &self.rejection().map(ValidationError::reason))?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_exposes_path_and_params() {
        let req = Request::new("visma-identity://sign?source=vismasign&documentid=105ab44").unwrap();
        assert!(req.is_valid());
        assert_eq!(req.path(), Some("sign"));
        assert_eq!(req.operation(), Some(Operation::Sign));
        let params = req.params().unwrap();
        assert_eq!(params.get("documentid"), Some("105ab44"));
        assert!(req.rejection().is_none());
    }

    #[test]
    fn invalid_request_hides_path_and_params() {
        let req = Request::new("Visma-Identity://login?source=severa").unwrap();
        assert!(!req.is_valid());
        assert_eq!(req.path(), None);
        assert!(req.params().is_none());
        assert_eq!(req.operation(), None);
        assert_eq!(req.rejection().map(ValidationError::reason), Some("invalid scheme"));
        // Parsed components stay available for diagnostics.
        assert_eq!(req.uri().path(), "login");
        assert_eq!(req.scheme(), "Visma-Identity");
    }

    #[test]
    fn malformed_input_yields_no_request() {
        let err = Request::new("visma-identity://login").unwrap_err();
        assert_eq!(err.input, "visma-identity://login");
    }

    #[test]
    fn raw_uri_is_retained() {
        let raw = "visma-identity://login?source=severa";
        let req = Request::new(raw).unwrap();
        assert_eq!(req.raw_uri(), raw);
    }

    #[test]
    fn display_lists_path_and_params_in_order() {
        let req =
            Request::new("visma-identity://confirm?source=netvisor&paymentnumber=102226").unwrap();
        let expected = "Request:\n  Path of request:\n    confirm\n  Parameters:\n    source : netvisor\n    paymentnumber : 102226\n";
        assert_eq!(req.to_string(), expected);
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::Valid(Operation::Login).to_string(), "valid");
        assert_eq!(
            Verdict::Invalid(ValidationError::InvalidSource).to_string(),
            "invalid (invalid source)"
        );
    }
}
