//! Property-based tests for the parser and validator.
//!
//! Inputs are generated from the separator-free alphabet so that every
//! generated URI is well-formed, then checked against the components they
//! were built from.

use proptest::prelude::*;

use identity_request::{
    IdentityUri, IdentityUriBuilder, Operation, Request, ValidationError, validate,
};

/// Strategies for generating well-formed inputs.
mod strategies {
    use super::*;

    /// A scheme: letters, digits, hyphens, either case
    pub fn scheme() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9-]{0,15}"
    }

    /// A path: any separator-free text, possibly empty
    pub fn path() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.-]{0,12}"
    }

    /// A parameter name, kept short to force duplicates now and then
    pub fn name() -> impl Strategy<Value = String> {
        "[a-c]{1,2}"
    }

    /// A parameter value, possibly empty
    pub fn value() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.-]{0,10}"
    }

    /// A list of parameters, possibly with repeated names
    pub fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec((name(), value()), 0..8)
    }

    /// One of the known operations
    pub fn operation() -> impl Strategy<Value = Operation> {
        prop::sample::select(Operation::ALL.to_vec())
    }

    /// Text that is not made only of decimal digits
    pub fn non_digits() -> impl Strategy<Value = String> {
        "[0-9]{0,5}[a-zA-Z.+-][0-9a-zA-Z]{0,5}"
    }
}

fn render(scheme: &str, path: &str, pairs: &[(String, String)]) -> String {
    let query: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{scheme}://{path}?{}", query.join("&"))
}

/// Expected map after last-write-wins, in first-insertion order.
fn expected_params(pairs: &[(String, String)]) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();
    for (k, v) in pairs {
        match out.iter_mut().find(|(name, _)| name == k) {
            Some((_, existing)) => existing.clone_from(v),
            None => out.push((k.clone(), v.clone())),
        }
    }
    out
}

mod parse_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn recovers_components(s in scheme(), p in path(), kv in pairs()) {
            let input = render(&s, &p, &kv);
            let uri = IdentityUri::parse(&input).unwrap();

            prop_assert_eq!(uri.scheme(), s.as_str());
            prop_assert_eq!(uri.path(), p.as_str());

            let got: Vec<(String, String)> = uri
                .query()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            prop_assert_eq!(got, expected_params(&kv));
        }

        #[test]
        fn extra_query_separator_rejected(s in scheme(), p in path(), kv in pairs()) {
            let input = format!("{}?", render(&s, &p, &kv));
            prop_assert!(IdentityUri::parse(&input).is_err());
        }

        #[test]
        fn token_without_equals_rejected(s in scheme(), p in path(), n in name()) {
            let input = format!("{s}://{p}?{n}");
            prop_assert!(IdentityUri::parse(&input).is_err());
        }

        #[test]
        fn display_reparses_to_same(s in scheme(), p in path(), kv in pairs()) {
            let uri = IdentityUri::parse(&render(&s, &p, &kv)).unwrap();
            let again = IdentityUri::parse(&uri.to_string()).unwrap();
            prop_assert_eq!(again, uri);
        }
    }
}

mod validate_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn validation_is_idempotent(s in scheme(), p in path(), kv in pairs()) {
            let uri = IdentityUri::parse(&render(&s, &p, &kv)).unwrap();
            prop_assert_eq!(validate(&uri), validate(&uri));
        }

        #[test]
        fn wrong_scheme_always_reported_first(s in scheme(), p in path(), kv in pairs()) {
            prop_assume!(s != "visma-identity");
            let uri = IdentityUri::parse(&render(&s, &p, &kv)).unwrap();
            let err = validate(&uri).unwrap_err();
            prop_assert_eq!(err.reason(), "invalid scheme");
        }

        #[test]
        fn digit_payment_numbers_accepted(source in "[a-z]{1,10}", number in "[0-9]{1,12}") {
            let raw = format!("visma-identity://confirm?source={source}&paymentnumber={number}");
            let req = Request::new(&raw).unwrap();
            prop_assert_eq!(req.operation(), Some(Operation::Confirm));
        }

        #[test]
        fn non_digit_payment_numbers_rejected(number in non_digits()) {
            let raw = format!("visma-identity://confirm?source=netvisor&paymentnumber={number}");
            let req = Request::new(&raw).unwrap();
            prop_assert_eq!(req.rejection(), Some(&ValidationError::InvalidPaymentNumber));
        }

        #[test]
        fn built_requests_with_required_params_are_valid(
            op in operation(),
            source in "[a-z]{1,10}",
            extra in "[0-9]{1,8}",
        ) {
            let mut builder = IdentityUriBuilder::new().operation(op).source(source);
            if let Some(param) = op.required_param() {
                builder = builder.param(param, extra);
            }
            let uri = builder.build().unwrap();
            let req = Request::new(&uri.to_string()).unwrap();
            prop_assert_eq!(req.operation(), Some(op));
        }
    }
}
