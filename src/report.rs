//! Human-readable reports for processed requests.

use std::fmt;

use crate::batch::Outcome;
use crate::config::RunConfig;

/// Display adapter that renders one [`Outcome`] for a console.
///
/// The short form names the URI and its status. In verbose mode a valid or
/// invalid request is followed by its path and parameters.
///
/// # Examples
///
/// ```
/// use identity_request::{OutcomeReport, Request, RunConfig};
///
/// let outcome = Request::new("visma-identity://logout?source=severa");
/// let config = RunConfig::default();
/// let text = OutcomeReport::new(&outcome, &config).to_string();
/// assert!(text.contains("Status: invalid (invalid path)"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OutcomeReport<'a> {
    outcome: &'a Outcome,
    config: &'a RunConfig,
}

impl<'a> OutcomeReport<'a> {
    /// Creates a report for an outcome.
    #[must_use]
    pub const fn new(outcome: &'a Outcome, config: &'a RunConfig) -> Self {
        Self { outcome, config }
    }
}

impl fmt::Display for OutcomeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Identity request:")?;
        match self.outcome {
            Ok(req) => {
                writeln!(f, "  URI: {}", req.raw_uri())?;
                writeln!(f, "  Status: {}", req.verdict())?;
                if self.config.verbose {
                    write!(f, "{req}")?;
                }
            }
            Err(e) => {
                writeln!(f, "  URI: {}", e.input)?;
                writeln!(f, "  Status: malformed ({})", e.kind)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Request;

    fn render(raw: &str, verbose: bool) -> String {
        let outcome = Request::new(raw);
        let config = RunConfig::new().with_verbose(verbose);
        OutcomeReport::new(&outcome, &config).to_string()
    }

    #[test]
    fn valid_short_form() {
        let text = render("visma-identity://login?source=severa", false);
        assert_eq!(
            text,
            "Identity request:\n  URI: visma-identity://login?source=severa\n  Status: valid\n"
        );
    }

    #[test]
    fn verbose_appends_request_block() {
        let text = render("visma-identity://login?source=severa", true);
        assert!(text.ends_with("  Parameters:\n    source : severa\n"));
        assert!(text.contains("  Path of request:\n    login\n"));
    }

    #[test]
    fn invalid_names_reason() {
        let text = render("Visma-Identity://login?source=severa", false);
        assert!(text.contains("Status: invalid (invalid scheme)"));
    }

    #[test]
    fn malformed_names_parse_error() {
        let text = render("visma-identity://login", true);
        assert!(text.contains("URI: visma-identity://login"));
        assert!(text.contains("Status: malformed (missing query separator '?')"));
        assert!(!text.contains("Parameters:"));
    }
}
