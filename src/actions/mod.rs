//! Best-effort cleanup actions and their runner.
//!
//! A crash-fix plan is an ordered sequence of tagged actions interpreted
//! here; stored strings are never executed as shell source. Execution is
//! strictly sequential and failures are suppressed: a failing action is
//! logged, recorded in its outcome, and the rest of the plan still runs.

mod system;

pub use system::SystemExecutor;

use crate::error::ActionError;
use crate::render::RenderSink;
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

// ---------------------------------------------------------------------------
// CleanupAction
// ---------------------------------------------------------------------------

/// One cleanup operation in a crash-fix plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupAction {
    /// Terminate a process by executable name.
    StopProcess(String),
    /// Delete regular files directly inside a directory.
    DeleteTempFiles(PathBuf),
    /// Print a line without touching the system.
    Note(String),
}

impl fmt::Display for CleanupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopProcess(name) => write!(f, "stopping process {name}"),
            Self::DeleteTempFiles(dir) => {
                write!(f, "deleting temp files in {}", dir.display())
            }
            Self::Note(text) => write!(f, "{text}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionExecutor
// ---------------------------------------------------------------------------

/// Executes the system-touching half of cleanup actions.
///
/// Implement this to substitute execution in tests so plans can run without
/// terminating processes or deleting files.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Terminate every process with the given executable name.
    async fn stop_process(&self, name: &str) -> Result<(), ActionError>;

    /// Delete regular files directly inside `dir`.
    async fn delete_temp_files(&self, dir: &Path) -> Result<(), ActionError>;
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Whether an action completed or had its failure suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStatus {
    Completed,
    /// The action failed; the failure was logged and discarded.
    Suppressed(String),
}

/// Per-action record of a plan run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub action: CleanupAction,
    pub status: ActionStatus,
}

// ---------------------------------------------------------------------------
// ActionRunner
// ---------------------------------------------------------------------------

/// Runs cleanup plans sequentially with failures suppressed.
pub struct ActionRunner {
    executor: Box<dyn ActionExecutor>,
}

impl ActionRunner {
    pub fn new(executor: impl ActionExecutor + 'static) -> Self {
        Self {
            executor: Box::new(executor),
        }
    }

    /// Run every action in `plan`, in order, rendering each before execution.
    ///
    /// Failures never abort the plan: they are logged at `warn`, rendered as
    /// a detail line, and recorded as [`ActionStatus::Suppressed`]. A
    /// completion notice is rendered after the last action.
    pub async fn run(&self, plan: &[CleanupAction], sink: &dyn RenderSink) -> Vec<ActionOutcome> {
        let mut outcomes = Vec::with_capacity(plan.len());
        for action in plan {
            sink.activity(&action.to_string());
            let result = match action {
                CleanupAction::StopProcess(name) => self.executor.stop_process(name).await,
                CleanupAction::DeleteTempFiles(dir) => self.executor.delete_temp_files(dir).await,
                CleanupAction::Note(_) => Ok(()),
            };
            let status = match result {
                Ok(()) => ActionStatus::Completed,
                Err(e) => {
                    warn!(action = %action, error = %e, "cleanup action failed, continuing");
                    sink.detail(&format!("{e} (continuing)"));
                    ActionStatus::Suppressed(e.to_string())
                }
            };
            outcomes.push(ActionOutcome {
                action: action.clone(),
                status,
            });
        }
        sink.activity("Cleanup finished.");
        outcomes
    }
}
