//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use identity_request::prelude::*;
//!
//! let req = Request::new("visma-identity://login?source=severa").unwrap();
//! assert_eq!(req.operation(), Some(Operation::Login));
//! ```
//!
//! Builder state markers (`Empty`, `Ready`) are intentionally excluded.

pub use crate::{
    // Core types
    IdentityUri, Operation, QueryParams, Request, Verdict,
    // Pipeline
    BatchSummary, Outcome, process_batch, validate,
    // Builder
    IdentityUriBuilder,
    // Errors
    BuilderError, ParseError, ParseErrorKind, ValidationError,
    // Constants
    SCHEME,
};
