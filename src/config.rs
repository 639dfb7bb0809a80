//! Configuration for the request runner.

/// Configuration for processing and reporting identity requests.
///
/// Passed explicitly to the report and logging paths. Parsing and
/// validation never read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Print the full request block for each outcome and enable
    /// per-rule debug logging.
    ///
    /// Default: false
    pub verbose: bool,
}

impl RunConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables verbose output.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the default log filter directive for this configuration.
    #[must_use]
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "warn,identity_request=debug"
        } else {
            "warn"
        }
    }
}
