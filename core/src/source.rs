//! Collaborators the indexer talks to: where document text comes from, how a
//! directory is enumerated, and where per-file failures are reported.

use crate::error::{BuildError, ReadError};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub trait FileReader {
    /// Full text content of the file at `path`.
    fn read_to_string(&self, path: &str) -> Result<String, ReadError>;
}

pub trait DirectoryLister {
    /// Entry paths directly inside `dir`, in no particular order.
    fn list(&self, dir: &str) -> Result<Vec<String>, BuildError>;
}

/// Receives `(context, message)` pairs for failures that do not stop a build.
pub trait ErrorSink {
    fn report(&mut self, context: &str, message: &str);
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl FileReader for FsSource {
    fn read_to_string(&self, path: &str) -> Result<String, ReadError> {
        fs::read_to_string(path).map_err(|e| ReadError::from_io(path, &e))
    }
}

impl DirectoryLister for FsSource {
    fn list(&self, dir: &str) -> Result<Vec<String>, BuildError> {
        if !Path::new(dir).is_dir() {
            return Err(BuildError::NotADirectory { path: dir.to_string() });
        }
        // any entry error fails the whole listing
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .map(|entry| {
                entry
                    .map(|e| e.path().to_string_lossy().into_owned())
                    .map_err(|err| BuildError::Unreadable { path: dir.to_string(), reason: err.to_string() })
            })
            .collect()
    }
}

/// In-memory documents, for tests and for embedding callers that already
/// hold the text.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: BTreeMap<String, Result<String, String>>,
    dirs: BTreeSet<String>,
    unlistable: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn with_dir(mut self, dir: &str) -> Self {
        self.dirs.insert(dir.to_string());
        self
    }

    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.register_parent(path);
        self.files.insert(path.to_string(), Ok(text.to_string()));
        self
    }

    /// A file that is listed but fails to read with `reason`.
    pub fn with_unreadable(mut self, path: &str, reason: &str) -> Self {
        self.register_parent(path);
        self.files.insert(path.to_string(), Err(reason.to_string()));
        self
    }

    /// A directory that exists but fails to list with `reason`.
    pub fn with_unlistable(mut self, dir: &str, reason: &str) -> Self {
        self.dirs.insert(dir.to_string());
        self.unlistable.insert(dir.to_string(), reason.to_string());
        self
    }

    fn register_parent(&mut self, path: &str) {
        if let Some(parent) = Path::new(path).parent() {
            self.dirs.insert(parent.to_string_lossy().into_owned());
        }
    }
}

impl FileReader for MemorySource {
    fn read_to_string(&self, path: &str) -> Result<String, ReadError> {
        match self.files.get(path) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(reason)) => Err(ReadError::Read { path: path.to_string(), reason: reason.clone() }),
            None => Err(ReadError::NotFound { path: path.to_string() }),
        }
    }
}

impl DirectoryLister for MemorySource {
    fn list(&self, dir: &str) -> Result<Vec<String>, BuildError> {
        if !self.dirs.contains(dir) {
            return Err(BuildError::NotADirectory { path: dir.to_string() });
        }
        if let Some(reason) = self.unlistable.get(dir) {
            return Err(BuildError::Unreadable { path: dir.to_string(), reason: reason.clone() });
        }
        let dir_path = Path::new(dir);
        let mut entries: Vec<String> = self
            .files
            .keys()
            .filter(|p| Path::new(p.as_str()).parent() == Some(dir_path))
            .cloned()
            .collect();
        // nested directories show up as entries too, like a real listing
        entries.extend(
            self.dirs
                .iter()
                .filter(|d| Path::new(d.as_str()).parent() == Some(dir_path))
                .cloned(),
        );
        Ok(entries)
    }
}

/// Reports each failure through `tracing` as it happens.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&mut self, context: &str, message: &str) {
        tracing::warn!(context, "{message}");
    }
}

/// Fans each report out to both sinks, e.g. `(LogSink, CollectingSink::new())`.
impl<A: ErrorSink, B: ErrorSink> ErrorSink for (A, B) {
    fn report(&mut self, context: &str, message: &str) {
        self.0.report(context, message);
        self.1.report(context, message);
    }
}

/// Keeps every failure for an end-of-build report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectingSink {
    pub entries: Vec<(String, String)>,
}

impl CollectingSink {
    pub fn new() -> Self { Self::default() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn len(&self) -> usize { self.entries.len() }
}

impl ErrorSink for CollectingSink {
    fn report(&mut self, context: &str, message: &str) {
        self.entries.push((context.to_string(), message.to_string()));
    }
}
