use anyhow::Result;
use clap::Parser;
use identity_request::logging::init_logging;
use identity_request::{BatchSummary, OutcomeReport, RunConfig, process_batch};

/// Request URIs processed when none are given on the command line.
const SAMPLE_URIS: [&str; 6] = [
    "visma-identity://login?source=severa",
    "visma-identity://confirm?source=netvisor&paymentnumber=102226",
    "visma-identity://sign?source=vismasign&documentid=105ab44",
    "Visma-Identity://login?source=severa",
    "visma-identity://logout?source=severa",
    "visma-identity://confirm?source=netvisor&paymentnumber=102226A",
];

/// Parse and validate visma-identity:// request URIs.
#[derive(Debug, Parser)]
#[command(name = "identity-request", version)]
#[command(about = "Parse and validate visma-identity:// request URIs", long_about = None)]
struct Cli {
    /// Print each request's path and parameters and enable debug logging.
    #[arg(long)]
    verbose: bool,

    /// Request URIs to process. Defaults to a built-in sample list.
    #[arg(value_name = "URI")]
    uris: Vec<String>,
}

impl Cli {
    fn config(&self) -> RunConfig {
        RunConfig::new().with_verbose(self.verbose)
    }

    fn inputs(&self) -> Vec<String> {
        if self.uris.is_empty() {
            SAMPLE_URIS.iter().map(ToString::to_string).collect()
        } else {
            self.uris.clone()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(&config)?;

    let outcomes = process_batch(cli.inputs());
    for outcome in &outcomes {
        println!("{}", OutcomeReport::new(outcome, &config));
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    println!(
        "{} processed: {} valid, {} invalid, {} malformed",
        summary.total, summary.valid, summary.invalid, summary.malformed
    );

    Ok(())
}
