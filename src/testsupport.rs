//! Shared test fixtures for catalog/action/dispatcher test modules.
//!
//! Keeping tiny but reusable helpers here prevents each test module from
//! rebuilding ad-hoc temp-dir, sink, and executor mocks.

use crate::actions::ActionExecutor;
use crate::error::ActionError;
use crate::render::RenderSink;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
///
/// This helper is intentionally simple and std-only so unit tests can use it
/// without introducing new dependencies.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("medic-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Capturing render sink recording one tagged line per call.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Snapshot of everything rendered so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// True when any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

impl RenderSink for MemorySink {
    fn prompt(&self) {
        self.push("prompt".into());
    }
    fn section(&self, title: &str) {
        self.push(format!("section: {title}"));
    }
    fn field(&self, key: &str, value: &str) {
        self.push(format!("field: {key} {value}"));
    }
    fn item(&self, text: &str) {
        self.push(format!("item: {text}"));
    }
    fn step(&self, index: usize, text: &str) {
        self.push(format!("step: {index}. {text}"));
    }
    fn activity(&self, text: &str) {
        self.push(format!("activity: {text}"));
    }
    fn detail(&self, text: &str) {
        self.push(format!("detail: {text}"));
    }
    fn warn(&self, msg: &str) {
        self.push(format!("warn: {msg}"));
    }
    fn error(&self, msg: &str) {
        self.push(format!("error: {msg}"));
    }
}

/// Whether a [`RecordingExecutor`] fails its stop-process calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingStops {
    None,
    All,
}

/// Executor mock recording calls in order, optionally failing stops.
#[derive(Debug)]
pub struct RecordingExecutor {
    calls: Arc<Mutex<Vec<String>>>,
    failing_stops: FailingStops,
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self::new(FailingStops::None)
    }
}

impl RecordingExecutor {
    pub fn new(failing_stops: FailingStops) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failing_stops,
        }
    }

    /// Shared handle onto the recorded call list.
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl ActionExecutor for RecordingExecutor {
    async fn stop_process(&self, name: &str) -> Result<(), ActionError> {
        self.calls.lock().unwrap().push(format!("stop {name}"));
        match self.failing_stops {
            FailingStops::None => Ok(()),
            FailingStops::All => Err(ActionError::ExecutionFailed(format!(
                "no process named {name}"
            ))),
        }
    }

    async fn delete_temp_files(&self, dir: &Path) -> Result<(), ActionError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("delete {}", dir.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn memory_sink_records_tagged_lines() {
        let sink = MemorySink::default();
        sink.warn("careful");
        sink.step(2, "do the thing");
        assert!(sink.contains("warn: careful"));
        assert!(sink.contains("step: 2. do the thing"));
    }

    #[tokio::test]
    async fn recording_executor_fails_stops_on_request() {
        let executor = RecordingExecutor::new(FailingStops::All);
        assert!(executor.stop_process("x").await.is_err());
        assert!(executor
            .delete_temp_files(Path::new("/tmp"))
            .await
            .is_ok());
        assert_eq!(executor.calls().lock().unwrap().len(), 2);
    }
}
