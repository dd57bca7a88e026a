use crate::error::BuildError;
use crate::index::InvertedIndex;
use crate::source::{DirectoryLister, ErrorSink, FileReader, FsSource};
use crate::tokenizer::tokenize_document;
use serde::Serialize;

/// Context label attached to every per-file failure sent to an [`ErrorSink`].
pub const INDEXING_ERROR: &str = "Indexing Error";

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Literal, case-sensitive path suffix a file needs to be indexed.
    pub suffix: String,
}

impl Default for BuildConfig {
    fn default() -> Self { Self { suffix: ".txt".to_string() } }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub scanned: usize,
    pub skipped: usize,
    pub indexed: usize,
    pub failed: usize,
    pub terms: usize,
}

pub struct IndexBuilder<S = FsSource> {
    source: S,
    config: BuildConfig,
}

impl IndexBuilder<FsSource> {
    pub fn new() -> Self { Self::with_source(FsSource) }
}

impl Default for IndexBuilder<FsSource> {
    fn default() -> Self { Self::new() }
}

impl<S: FileReader + DirectoryLister> IndexBuilder<S> {
    pub fn with_source(source: S) -> Self {
        Self { source, config: BuildConfig::default() }
    }

    pub fn config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(&self, dir: &str, sink: &mut dyn ErrorSink) -> Result<InvertedIndex, BuildError> {
        self.build_with_report(dir, sink).map(|(index, _)| index)
    }

    /// Scan `dir` once and return a fresh index. Only a bad `dir` fails the
    /// build; unreadable files go to `sink` and the scan moves on.
    pub fn build_with_report(&self, dir: &str, sink: &mut dyn ErrorSink) -> Result<(InvertedIndex, BuildReport), BuildError> {
        let entries = self.source.list(dir)?;
        tracing::info!(dir, entries = entries.len(), "indexing directory");

        let mut index = InvertedIndex::new();
        let mut report = BuildReport { scanned: entries.len(), ..BuildReport::default() };

        for path in entries {
            if !path.ends_with(&self.config.suffix) {
                report.skipped += 1;
                continue;
            }
            match tokenize_document(&self.source, &path) {
                Ok(tokens) => {
                    let count = tokens.len();
                    for token in &tokens {
                        index.insert(token, &path);
                    }
                    report.indexed += 1;
                    tracing::debug!(path = %path, tokens = count, "indexed file");
                }
                Err(err) => {
                    report.failed += 1;
                    sink.report(INDEXING_ERROR, &err.to_string());
                }
            }
        }

        report.terms = index.len();
        tracing::info!(dir, files = report.indexed, failed = report.failed, terms = report.terms, "index build complete");
        Ok((index, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{CollectingSink, MemorySource};

    fn sample() -> MemorySource {
        MemorySource::new()
            .with_file("/docs/file1.txt", "This is a test document with the word test.")
            .with_file("/docs/file2.txt", "Another document containing the word another.")
            .with_file("/docs/file3.txt", "This file has the word test again.")
    }

    #[test]
    fn builds_expected_postings() {
        let builder = IndexBuilder::with_source(sample());
        let mut sink = CollectingSink::new();
        let index = builder.build("/docs", &mut sink).unwrap();

        let mut test = index.get("test").unwrap().to_vec();
        test.sort();
        assert_eq!(test, vec!["/docs/file1.txt", "/docs/file3.txt"]);
        assert_eq!(index.get("another").unwrap(), ["/docs/file2.txt".to_string()]);
        assert_eq!(index.get("test.").unwrap(), ["/docs/file1.txt".to_string()]);
        assert!(sink.is_empty());
    }

    #[test]
    fn suffix_is_case_sensitive() {
        let src = sample().with_file("/docs/LOUD.TXT", "zebra").with_file("/docs/notes.md", "zebra");
        let (index, report) = IndexBuilder::with_source(src).build_with_report("/docs", &mut CollectingSink::new()).unwrap();
        assert!(!index.contains("zebra"));
        assert_eq!(report.skipped, 2);
        assert_eq!(report.indexed, 3);
    }

    #[test]
    fn unreadable_file_is_reported_and_skipped() {
        let src = sample().with_unreadable("/docs/locked.txt", "permission denied");
        let mut sink = CollectingSink::new();
        let (index, report) = IndexBuilder::with_source(src).build_with_report("/docs", &mut sink).unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.indexed, 3);
        assert_eq!(sink.entries.len(), 1);
        assert_eq!(sink.entries[0].0, INDEXING_ERROR);
        assert!(sink.entries[0].1.contains("/docs/locked.txt"));
        assert!(sink.entries[0].1.contains("permission denied"));
        assert!(index.contains("another"));
    }

    #[test]
    fn not_a_directory_aborts() {
        let mut sink = CollectingSink::new();
        let err = IndexBuilder::with_source(sample()).build("/elsewhere", &mut sink).unwrap_err();
        assert_eq!(err, BuildError::NotADirectory { path: "/elsewhere".into() });
        assert!(sink.is_empty());
    }

    #[test]
    fn unlistable_dir_aborts() {
        let src = sample().with_unlistable("/locked", "permission denied");
        let mut sink = CollectingSink::new();
        let err = IndexBuilder::with_source(src).build("/locked", &mut sink).unwrap_err();
        assert_eq!(err, BuildError::Unreadable { path: "/locked".into(), reason: "permission denied".into() });
        assert!(sink.is_empty());
    }

    #[test]
    fn custom_suffix() {
        let src = sample().with_file("/docs/readme.md", "markdown words");
        let builder = IndexBuilder::with_source(src).config(BuildConfig { suffix: ".md".into() });
        let index = builder.build("/docs", &mut CollectingSink::new()).unwrap();
        assert!(index.contains("markdown"));
        assert!(!index.contains("test"));
    }
}
