//! Semantic validation of parsed identity request URIs.
//!
//! Rules run in a fixed order and stop at the first failure:
//!
//! 1. scheme equals [`SCHEME`] exactly
//! 2. path is a known [`Operation`]
//! 3. `source` is present and non-empty
//! 4. the operation's own parameter, if any, is acceptable

use tracing::{debug, info};

use crate::constants::{DOCUMENT_ID_PARAM, PAYMENT_NUMBER_PARAM, SCHEME, SOURCE_PARAM};
use crate::error::ValidationError;
use crate::operation::Operation;
use crate::query::QueryParams;
use crate::uri::IdentityUri;

/// Validates a parsed URI and returns the operation it requests.
///
/// Validation is a pure function of its input. It emits `tracing` events
/// for each rule but those never affect the result.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first rule that fails.
///
/// # Examples
///
/// ```
/// use identity_request::{validate, IdentityUri, Operation, ValidationError};
///
/// let uri = IdentityUri::parse("visma-identity://login?source=severa").unwrap();
/// assert_eq!(validate(&uri), Ok(Operation::Login));
///
/// let uri = IdentityUri::parse("visma-identity://confirm?source=netvisor&paymentnumber=1A").unwrap();
/// assert_eq!(validate(&uri), Err(ValidationError::InvalidPaymentNumber));
/// ```
pub fn validate(uri: &IdentityUri) -> Result<Operation, ValidationError> {
    let result = check_all(uri);
    match &result {
        Ok(op) => debug!(operation = %op, "validation successful"),
        Err(e) => info!(uri = %uri, reason = e.reason(), "validation failed"),
    }
    result
}

fn check_all(uri: &IdentityUri) -> Result<Operation, ValidationError> {
    check_scheme(uri.scheme())?;
    debug!(scheme = uri.scheme(), "scheme ok");

    let op = check_path(uri.path())?;
    debug!(path = uri.path(), "path ok");

    check_source(uri.query())?;
    debug!("source ok");

    match op {
        Operation::Login => {}
        Operation::Confirm => {
            check_payment_number(uri.query())?;
            debug!("payment number ok");
        }
        Operation::Sign => {
            check_document_id(uri.query())?;
            debug!("document id ok");
        }
    }

    Ok(op)
}

fn check_scheme(scheme: &str) -> Result<(), ValidationError> {
    if scheme == SCHEME {
        Ok(())
    } else {
        Err(ValidationError::InvalidScheme {
            found: scheme.to_string(),
        })
    }
}

fn check_path(path: &str) -> Result<Operation, ValidationError> {
    path.parse().map_err(|_| ValidationError::InvalidPath {
        found: path.to_string(),
    })
}

fn check_source(query: &QueryParams) -> Result<(), ValidationError> {
    non_empty(query, SOURCE_PARAM)
        .map(|_| ())
        .ok_or(ValidationError::InvalidSource)
}

fn check_payment_number(query: &QueryParams) -> Result<(), ValidationError> {
    match non_empty(query, PAYMENT_NUMBER_PARAM) {
        Some(v) if is_decimal_digits(v) => Ok(()),
        _ => Err(ValidationError::InvalidPaymentNumber),
    }
}

fn check_document_id(query: &QueryParams) -> Result<(), ValidationError> {
    non_empty(query, DOCUMENT_ID_PARAM)
        .map(|_| ())
        .ok_or(ValidationError::InvalidDocumentId)
}

fn non_empty<'a>(query: &'a QueryParams, name: &str) -> Option<&'a str> {
    query.get(name).filter(|v| !v.is_empty())
}

/// Returns true if `s` is non-empty and made only of ASCII digits.
#[must_use]
pub fn is_decimal_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
