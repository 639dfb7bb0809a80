//! Processing many request URIs independently.

use tracing::{debug, info};

use crate::error::ParseError;
use crate::request::Request;

/// Result of processing one raw URI.
pub type Outcome = Result<Request, ParseError>;

/// Parses and validates each URI independently, in input order.
///
/// A malformed or invalid URI never stops the batch; every input yields
/// exactly one [`Outcome`].
///
/// # Examples
///
/// ```
/// use identity_request::process_batch;
///
/// let outcomes = process_batch([
///     "visma-identity://login?source=severa",
///     "visma-identity://login",
/// ]);
/// assert_eq!(outcomes.len(), 2);
/// assert!(outcomes[0].as_ref().is_ok_and(|r| r.is_valid()));
/// assert!(outcomes[1].is_err());
/// ```
#[must_use]
pub fn process_batch<I, S>(uris: I) -> Vec<Outcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let outcomes: Vec<Outcome> = uris
        .into_iter()
        .map(|raw| {
            let raw = raw.as_ref();
            debug!(uri = raw, "processing request");
            Request::new(raw)
        })
        .collect();

    let summary = BatchSummary::from_outcomes(&outcomes);
    info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        malformed = summary.malformed,
        "batch processed"
    );

    outcomes
}

/// Counts of each kind of outcome in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Number of inputs
    pub total: usize,
    /// Parsed and passed validation
    pub valid: usize,
    /// Parsed but failed validation
    pub invalid: usize,
    /// Failed to parse
    pub malformed: usize,
}

impl BatchSummary {
    /// Tallies a slice of outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut acc, outcome| {
            acc.total += 1;
            match outcome {
                Ok(req) if req.is_valid() => acc.valid += 1,
                Ok(_) => acc.invalid += 1,
                Err(_) => acc.malformed += 1,
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch() {
        let outcomes = process_batch(Vec::<String>::new());
        assert!(outcomes.is_empty());
        assert_eq!(BatchSummary::from_outcomes(&outcomes), BatchSummary::default());
    }

    #[test]
    fn keeps_order_and_continues_past_failures() {
        let outcomes = process_batch([
            "visma-identity://logout?source=severa",
            "not a uri",
            "visma-identity://login?source=severa",
        ]);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].as_ref().is_ok_and(|r| !r.is_valid()));
        assert!(outcomes[1].is_err());
        assert!(outcomes[2].as_ref().is_ok_and(Request::is_valid));
    }

    #[test]
    fn summary_counts() {
        let outcomes = process_batch(vec![
            String::from("visma-identity://login?source=severa"),
            String::from("visma-identity://sign?source=vismasign&documentid=1"),
            String::from("Visma-Identity://login?source=severa"),
            String::from("visma-identity://login?source"),
        ]);
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(
            summary,
            BatchSummary {
                total: 4,
                valid: 2,
                invalid: 1,
                malformed: 1,
            }
        );
    }
}
