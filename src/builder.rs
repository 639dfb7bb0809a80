//! Typestate builder for constructing [`IdentityUri`] instances.
//!
//! The builder will not produce a URI until an operation is chosen, and it
//! refuses parameters that the parser would split apart, so every built URI
//! parses back to the same components.

use crate::constants::{RESERVED_SEQUENCES, SCHEME, SOURCE_PARAM};
use crate::error::{BuilderError, ValidationError};
use crate::operation::Operation;
use crate::query::QueryParams;
use crate::uri::IdentityUri;

/// Marker: no operation set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: operation set, ready to build.
#[derive(Debug, Clone, Copy)]
pub struct Ready {
    operation: Operation,
}

/// A typestate builder for [`IdentityUri`] instances using the registered
/// scheme.
///
/// # Examples
///
/// ```
/// use identity_request::{IdentityUriBuilder, Operation, Request};
///
/// let uri = IdentityUriBuilder::new()
///     .operation(Operation::Confirm)
///     .source("netvisor")
///     .param("paymentnumber", "102226")
///     .build()
///     .unwrap();
///
/// assert_eq!(uri.to_string(), "visma-identity://confirm?source=netvisor&paymentnumber=102226");
/// assert!(Request::new(&uri.to_string()).unwrap().is_valid());
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use identity_request::IdentityUriBuilder;
///
/// // Error: cannot call build() before operation()
/// let uri = IdentityUriBuilder::new().source("severa").build();
/// ```
#[derive(Debug, Clone)]
pub struct IdentityUriBuilder<State = Empty> {
    query: QueryParams,
    state: State,
}

impl IdentityUriBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: QueryParams::new(),
            state: Empty,
        }
    }

    /// Sets the operation and advances to the [`Ready`] state.
    #[must_use]
    pub fn operation(self, operation: Operation) -> IdentityUriBuilder<Ready> {
        IdentityUriBuilder {
            query: self.query,
            state: Ready { operation },
        }
    }

    /// Parses and sets the operation from its path string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPath`] if the path is not a known
    /// operation.
    pub fn try_operation(self, path: &str) -> Result<IdentityUriBuilder<Ready>, ValidationError> {
        let operation = path.parse().map_err(|_| ValidationError::InvalidPath {
            found: path.to_string(),
        })?;
        Ok(self.operation(operation))
    }
}

impl Default for IdentityUriBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

/// Methods available in every state.
impl<State> IdentityUriBuilder<State> {
    /// Adds a parameter. A repeated name replaces the earlier value.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name, value);
        self
    }

    /// Sets the `source` parameter.
    #[must_use]
    pub fn source(self, value: impl Into<String>) -> Self {
        self.param(SOURCE_PARAM, value)
    }
}

impl IdentityUriBuilder<Ready> {
    /// Returns the operation chosen for this builder.
    #[must_use]
    pub const fn current_operation(&self) -> Operation {
        self.state.operation
    }

    /// Builds the final [`IdentityUri`].
    ///
    /// The result is structurally sound but not necessarily valid: a
    /// missing `source`, for example, is still reported by validation.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ReservedCharacter`] if any parameter name or
    /// value contains `://`, `?`, `&`, or `=`.
    pub fn build(self) -> Result<IdentityUri, BuilderError> {
        for (name, value) in self.query.iter() {
            check_reserved("name", name)?;
            check_reserved("value", value)?;
        }

        Ok(IdentityUri::new(
            SCHEME,
            self.state.operation.as_str(),
            self.query,
        ))
    }
}

fn check_reserved(field: &'static str, text: &str) -> Result<(), BuilderError> {
    if RESERVED_SEQUENCES.iter().any(|seq| text.contains(seq)) {
        return Err(BuilderError::ReservedCharacter {
            field,
            value: text.to_string(),
        });
    }
    Ok(())
}
