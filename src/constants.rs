//! Constants for identity request parsing and validation.

/// The registered URI scheme. Compared case-sensitively.
pub const SCHEME: &str = "visma-identity";

/// Separator between the scheme and the path.
pub const SCHEME_SEPARATOR: &str = "://";

/// Separator between the path and the query string.
pub const QUERY_SEPARATOR: &str = "?";

/// Separator between query parameters.
pub const PARAM_SEPARATOR: &str = "&";

/// Separator between a parameter name and its value.
pub const VALUE_SEPARATOR: &str = "=";

/// Parameter required by every operation.
pub const SOURCE_PARAM: &str = "source";

/// Parameter required by the `confirm` operation.
pub const PAYMENT_NUMBER_PARAM: &str = "paymentnumber";

/// Parameter required by the `sign` operation.
pub const DOCUMENT_ID_PARAM: &str = "documentid";

/// Substrings that cannot appear inside a parameter name or value.
pub const RESERVED_SEQUENCES: [&str; 4] = [
    SCHEME_SEPARATOR,
    QUERY_SEPARATOR,
    PARAM_SEPARATOR,
    VALUE_SEPARATOR,
];
