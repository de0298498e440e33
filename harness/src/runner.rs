//! Scenario runner: the fixed strategy × sample matrix.
//!
//! The runner owns orchestration only: it instantiates the policies, runs
//! the search under each strategy in a fixed order, and records what the
//! caller observed. Line rendering is pure so the demo binary and the lock
//! tests share it.
//!
//! # Matrix
//!
//! ```text
//! for each sample:  carry → carry behind the logging decorator → unwind
//! ```

use std::fs::File;
use std::path::PathBuf;

use crest_kernel::carry::CarryPolicy;
use crest_kernel::logging::LoggingPolicy;
use crest_kernel::policy::FaultMessages;
use crest_kernel::registry::RegistryError;
use crest_kernel::unwind::{recover, UnwindPolicy};
use crest_search::max::find_max;

use crate::scenario::{resolve_log_path, samples, search_registry, LabelStyle, ScenarioConfig};

/// The strategy active for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyV1 {
    /// Carry policy: failure is a tagged return value.
    Carry,
    /// Carry policy wrapped in the logging decorator.
    CarryLogged,
    /// Unwind policy behind a recovery boundary.
    Unwind,
}

impl StrategyV1 {
    /// Stable identifier used in transcripts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Carry => "carry",
            Self::CarryLogged => "carry_logged",
            Self::Unwind => "unwind",
        }
    }
}

/// Outcome of one search run, as the caller observed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcomeV1 {
    /// The maximum was found.
    Found { value: i64, index: usize },
    /// The search signaled a fault. `message` is the rendered text the
    /// caller saw: registry text for carried faults, recovered payload text
    /// for unwound ones — identical by construction.
    Failed { message: String },
}

/// One entry in the scenario transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecordV1 {
    /// Index into [`samples`](crate::scenario::samples).
    pub sample_index: usize,
    /// The strategy that produced this record.
    pub strategy: StrategyV1,
    /// What the caller observed.
    pub outcome: RunOutcomeV1,
}

/// Report of a full scenario run.
#[derive(Debug)]
pub struct ScenarioReportV1 {
    /// All run records, in execution order.
    pub records: Vec<RunRecordV1>,
    /// The resolved log file path the decorated runs appended to.
    pub log_path: PathBuf,
    /// Success-line wording to use when rendering this report.
    pub label_style: LabelStyle,
}

/// Error during a scenario run.
#[derive(Debug)]
pub enum ScenarioError {
    /// Fixture registry construction failed.
    RegistryFailed(RegistryError),
    /// The log file could not be created or the working directory resolved.
    Io { detail: String },
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RegistryFailed(e) => write!(f, "registry construction failed: {e}"),
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

/// Run the fixed scenario matrix.
///
/// For each sample, in order: the carry policy, the logging decorator around
/// a carry policy, and the unwind policy behind a
/// [`recover`] boundary. The log file is created (truncated) once per run,
/// before the first decorated call; it is not appended across runs.
///
/// # Errors
///
/// Returns [`ScenarioError`] if the fixture registry is malformed or the
/// log file cannot be created.
pub fn run_scenarios(config: &ScenarioConfig) -> Result<ScenarioReportV1, ScenarioError> {
    let log_path = resolve_log_path(config).map_err(|e| ScenarioError::Io {
        detail: format!("resolve log path: {e}"),
    })?;
    let log_file = File::create(&log_path).map_err(|e| ScenarioError::Io {
        detail: format!("create {}: {e}", log_path.display()),
    })?;

    let mut carry = CarryPolicy::new(search_registry().map_err(ScenarioError::RegistryFailed)?);
    let mut logged = LoggingPolicy::new(
        CarryPolicy::new(search_registry().map_err(ScenarioError::RegistryFailed)?),
        log_file,
    );
    let mut unwind = UnwindPolicy::new(search_registry().map_err(ScenarioError::RegistryFailed)?);

    let mut records = Vec::new();
    for (sample_index, sample) in samples().iter().enumerate() {
        let outcome = match find_max(sample, &mut carry) {
            Ok(peak) => RunOutcomeV1::Found {
                value: peak.value,
                index: peak.index,
            },
            Err(kind) => RunOutcomeV1::Failed {
                message: carry.message(kind).to_string(),
            },
        };
        records.push(RunRecordV1 {
            sample_index,
            strategy: StrategyV1::Carry,
            outcome,
        });

        let outcome = match find_max(sample, &mut logged) {
            Ok(peak) => RunOutcomeV1::Found {
                value: peak.value,
                index: peak.index,
            },
            Err(kind) => RunOutcomeV1::Failed {
                message: logged.message(kind).to_string(),
            },
        };
        records.push(RunRecordV1 {
            sample_index,
            strategy: StrategyV1::CarryLogged,
            outcome,
        });

        let outcome = match recover(|| find_max(sample, &mut unwind)) {
            Ok(peak) => RunOutcomeV1::Found {
                value: peak.value,
                index: peak.index,
            },
            Err(message) => RunOutcomeV1::Failed { message },
        };
        records.push(RunRecordV1 {
            sample_index,
            strategy: StrategyV1::Unwind,
            outcome,
        });
    }

    Ok(ScenarioReportV1 {
        records,
        log_path,
        label_style: config.label_style,
    })
}

/// Render the stdout line for a found maximum.
#[must_use]
pub fn success_line(style: LabelStyle, value: i64, index: usize) -> String {
    match style {
        LabelStyle::Value => format!("max is: {value}"),
        LabelStyle::Position => format!("max is: nums[{index}]"),
    }
}

/// Render the stderr line for a failed search.
#[must_use]
pub fn failure_line(message: &str) -> String {
    format!("could not find max, because {message}")
}
