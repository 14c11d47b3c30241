//! System-backed executor for cleanup actions.

use crate::error::ActionError;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::process::Command;
use tracing::debug;

use super::ActionExecutor;

/// Executor that terminates real processes and deletes real files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

#[async_trait]
impl ActionExecutor for SystemExecutor {
    async fn stop_process(&self, name: &str) -> Result<(), ActionError> {
        let (program, args) = kill_invocation(name);
        let mut cmd = Command::new(program);
        // A hung kill tool should not outlive the helper.
        cmd.kill_on_drop(true);
        cmd.args(&args);

        let output = cmd
            .output()
            .await
            .map_err(|e| ActionError::ExecutionFailed(format!("{program}: {e}")))?;
        if output.status.success() {
            return Ok(());
        }

        let mut details = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if details.is_empty() {
            details = format!(
                "{program} exited with {}",
                output.status.code().unwrap_or(-1)
            );
        }
        Err(ActionError::ExecutionFailed(details))
    }

    async fn delete_temp_files(&self, dir: &Path) -> Result<(), ActionError> {
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| ActionError::ExecutionFailed(format!("{}: {e}", dir.display())))?;

        let mut removed = 0u64;
        loop {
            let entry = entries
                .next_entry()
                .await
                .map_err(|e| ActionError::ExecutionFailed(format!("{}: {e}", dir.display())))?;
            let Some(entry) = entry else {
                break;
            };
            let is_file = entry
                .file_type()
                .await
                .map(|kind| kind.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            // Locked temp files are routine; skip them and keep going.
            match fs::remove_file(entry.path()).await {
                Ok(()) => removed += 1,
                Err(e) => debug!(
                    path = %entry.path().display(),
                    error = %e,
                    "skipping undeletable temp file"
                ),
            }
        }

        debug!(dir = %dir.display(), removed, "temp files removed");
        Ok(())
    }
}

/// Platform invocation used to terminate processes by executable name.
fn kill_invocation(name: &str) -> (&'static str, Vec<String>) {
    if cfg!(windows) {
        (
            "taskkill",
            vec!["/F".to_string(), "/IM".to_string(), name.to_string()],
        )
    } else {
        ("pkill", vec!["-x".to_string(), name.to_string()])
    }
}
