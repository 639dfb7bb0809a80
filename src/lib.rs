//! Parser and validator for `visma-identity://` request URIs.
//!
//! Applications receive identity requests as app-link URIs and must decide
//! which in-app handler to open. This crate turns the raw string into a
//! [`Request`] carrying the requested [`Operation`] and its parameters, or
//! explains why the request was rejected.
//!
//! # Overview
//!
//! Request URIs have the structure:
//!
//! ```text
//! visma-identity://<path>?<name1>=<value1>&<name2>=<value2>...
//! ```
//!
//! Processing is a two-stage pipeline:
//!
//! 1. [`IdentityUri::parse`] splits the input. Structural problems are a
//!    [`ParseError`] and no request is produced.
//! 2. [`validate()`] applies the scheme, path, and parameter rules. A failed
//!    rule is recorded as the request's [`Verdict`], not raised as an error.
//!
//! # Quick Start
//!
//! ```rust
//! use identity_request::{Operation, Request};
//!
//! let req = Request::new("visma-identity://confirm?source=netvisor&paymentnumber=102226").unwrap();
//! assert!(req.is_valid());
//! assert_eq!(req.operation(), Some(Operation::Confirm));
//! assert_eq!(req.params().and_then(|p| p.get("source")), Some("netvisor"));
//!
//! let req = Request::new("visma-identity://confirm?source=netvisor&paymentnumber=102226A").unwrap();
//! assert_eq!(req.rejection().map(|e| e.reason()), Some("invalid payment number"));
//! ```
//!
//! # Validation Rules
//!
//! | Order | Rule | Reason on failure |
//! |-------|------|-------------------|
//! | 1 | scheme is exactly `visma-identity` | invalid scheme |
//! | 2 | path is `login`, `confirm`, or `sign` | invalid path |
//! | 3 | `source` is present and non-empty | invalid source |
//! | 4 | `confirm`: `paymentnumber` is all decimal digits | invalid payment number |
//! | 4 | `sign`: `documentid` is present and non-empty | invalid document ID |
//!
//! # Limitations
//!
//! There is no percent-decoding. A `://`, `?`, `&`, or `=` inside a
//! parameter name or value cannot be represented.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod batch;
mod builder;
mod config;
mod constants;
mod error;
pub mod logging;
mod operation;
pub mod prelude;
mod query;
mod report;
mod request;
mod uri;
mod validate;

pub use batch::{BatchSummary, Outcome, process_batch};
pub use builder::{Empty, IdentityUriBuilder, Ready};
pub use config::RunConfig;
pub use constants::{
    DOCUMENT_ID_PARAM, PARAM_SEPARATOR, PAYMENT_NUMBER_PARAM, QUERY_SEPARATOR, SCHEME,
    SCHEME_SEPARATOR, SOURCE_PARAM, VALUE_SEPARATOR,
};
pub use error::{BuilderError, ParseError, ParseErrorKind, ValidationError};
pub use operation::Operation;
pub use query::QueryParams;
pub use report::OutcomeReport;
pub use request::{Request, Verdict};
pub use uri::IdentityUri;
pub use validate::{is_decimal_digits, validate};
