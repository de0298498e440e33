//! Scenario fixtures and configuration.
//!
//! The demonstration is fully hard-coded: one fault message, two sample
//! inputs. The config struct exists so tests can redirect the log file and
//! select the success-label wording without modifying fixtures — overrides,
//! not runtime configuration (no env reads, no flags).

use std::path::{Path, PathBuf};

use crest_kernel::registry::{MessageRegistry, RegistryError};
use crest_search::fault::SearchFault;

/// Name of the demo log file, created next to the current working directory.
pub const LOG_FILE_NAME: &str = "log.txt";

/// The fixed sample inputs: an empty slice and `[-1, 2, 0]`.
#[must_use]
pub fn samples() -> Vec<Vec<i64>> {
    vec![vec![], vec![-1, 2, 0]]
}

/// Build the search fault registry with its single message.
///
/// # Errors
///
/// Returns [`RegistryError`] if the message count does not match the fault
/// kind count (a fixture bug).
pub fn search_registry() -> Result<MessageRegistry<SearchFault>, RegistryError> {
    MessageRegistry::new(vec!["is empty".to_string()])
}

/// Success-line wording.
///
/// The search computes value and position together, so the choice is
/// rendering-only; the underlying computation never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// `max is: <value>`
    #[default]
    Value,
    /// `max is: nums[<index>]`
    Position,
}

/// Scenario configuration with overridable defaults.
#[derive(Debug, Clone, Default)]
pub struct ScenarioConfig {
    /// Log file path for the decorated runs. `None` resolves to
    /// [`LOG_FILE_NAME`] in the parent of the current working directory.
    pub log_path: Option<PathBuf>,
    /// Success-line wording.
    pub label_style: LabelStyle,
}

/// Resolve the effective log path for a config.
///
/// The default location is the sibling of the current working directory
/// (falling back to the working directory itself at a filesystem root).
///
/// # Errors
///
/// Returns an I/O error if the current working directory cannot be read.
pub fn resolve_log_path(config: &ScenarioConfig) -> std::io::Result<PathBuf> {
    if let Some(path) = &config.log_path {
        return Ok(path.clone());
    }
    let cwd = std::env::current_dir()?;
    let dir = cwd.parent().map_or_else(|| cwd.clone(), Path::to_path_buf);
    Ok(dir.join(LOG_FILE_NAME))
}
