//! Artifact delivery.
//!
//! Rendering never performs output itself; the service hands finished
//! artifacts to an injected [`ReportSink`]. In the dashboard this is the
//! browser download; here the stock implementations are a directory writer
//! and an in-memory sink for tests.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A rendered report, ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Suggested filename, extension included.
    pub file_name: String,
    /// Complete artifact body (PDF bytes or CSV text).
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Create an artifact from a filename and body.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Destination for rendered artifacts.
///
/// Failures are surfaced to the caller as-is; the service never retries.
pub trait ReportSink {
    /// Persist or deliver one artifact.
    fn deliver(&self, artifact: &Artifact) -> io::Result<()>;
}

/// Writes artifacts into a fixed directory.
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink that writes into `dir` (which must already exist).
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ReportSink for FileSink {
    fn deliver(&self, artifact: &Artifact) -> io::Result<()> {
        std::fs::write(self.dir.join(&artifact.file_name), &artifact.bytes)
    }
}

/// Collects delivered artifacts in memory. Intended for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Mutex<Vec<Artifact>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, in delivery order.
    pub fn artifacts(&self) -> Vec<Artifact> {
        self.artifacts
            .lock()
            .map(|a| a.clone())
            .unwrap_or_default()
    }
}

impl ReportSink for MemorySink {
    fn deliver(&self, artifact: &Artifact) -> io::Result<()> {
        let mut artifacts = self
            .artifacts
            .lock()
            .map_err(|_| io::Error::other("memory sink mutex poisoned"))?;
        artifacts.push(artifact.clone());
        Ok(())
    }
}
