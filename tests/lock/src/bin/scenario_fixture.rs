//! Binary that runs the fixed scenario and prints deterministic key=value
//! lines for cross-process verification.
//!
//! Usage: `scenario_fixture`
//!
//! The log file is redirected into the system temp directory so the fixture
//! leaves the working tree untouched.

use crest_harness::runner::run_scenarios;
use crest_harness::scenario::ScenarioConfig;
use crest_harness::transcript::{transcript_bytes, transcript_digest};

fn main() {
    let config = ScenarioConfig {
        log_path: Some(std::env::temp_dir().join("crest_scenario_fixture_log.txt")),
        ..ScenarioConfig::default()
    };
    let report = run_scenarios(&config).expect("scenario run failed");
    let bytes = transcript_bytes(&report).expect("transcript serialization failed");
    let digest = transcript_digest(&bytes);

    let failed = report
        .records
        .iter()
        .filter(|r| matches!(r.outcome, crest_harness::runner::RunOutcomeV1::Failed { .. }))
        .count();

    println!("record_count={}", report.records.len());
    println!("failed_count={failed}");
    println!("transcript_digest={digest}");
}
