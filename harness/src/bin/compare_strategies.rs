//! Runs the fixed strategy comparison and prints its observable lines.
//!
//! Usage: `compare_strategies`
//!
//! No arguments, no flags. Success lines go to stdout, failure lines to
//! stderr; decorated runs truncate and append to `log.txt` next to the
//! current working directory. Exits 0 on normal completion.

use std::process::ExitCode;

use crest_harness::runner::{failure_line, run_scenarios, success_line, RunOutcomeV1};
use crest_harness::scenario::ScenarioConfig;

fn main() -> ExitCode {
    let report = match run_scenarios(&ScenarioConfig::default()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("scenario setup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    for record in &report.records {
        match &record.outcome {
            RunOutcomeV1::Found { value, index } => {
                println!("{}", success_line(report.label_style, *value, *index));
            }
            RunOutcomeV1::Failed { message } => {
                eprintln!("{}", failure_line(message));
            }
        }
    }
    ExitCode::SUCCESS
}
