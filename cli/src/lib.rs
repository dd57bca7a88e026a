use anyhow::Result;
use docsearch_core::{BuildConfig, BuildError, BuildReport, CollectingSink, IndexBuilder, InvertedIndex, LogSink, SearchEngine};
use parking_lot::RwLock;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::sync::Arc;

pub const NO_RESULTS: &str = "No results found.";
pub const NO_INDEX: &str = "Please index the documents first.";
pub const EMPTY_TERM: &str = "Please enter a search term.";

#[derive(Debug, Clone, Serialize)]
pub struct IndexOutcome {
    pub directory: String,
    pub report: BuildReport,
    pub errors: Vec<FileError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub context: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub total_hits: usize,
    pub results: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub directory: String,
    pub terms: usize,
    pub documents: usize,
    pub report: BuildReport,
}

struct Current {
    engine: SearchEngine,
    directory: Option<String>,
    report: BuildReport,
}

/// Owns the current index. Builds run without holding the lock and the
/// finished index is swapped in whole; a failed build keeps the old one.
pub struct App {
    builder: IndexBuilder,
    current: RwLock<Current>,
}

impl App {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            builder: IndexBuilder::new().config(config),
            current: RwLock::new(Current { engine: SearchEngine::new(), directory: None, report: BuildReport::default() }),
        }
    }

    pub fn index(&self, dir: &str) -> Result<IndexOutcome, BuildError> {
        let mut sink = (LogSink, CollectingSink::new());
        let (index, report) = self.builder.build_with_report(dir, &mut sink)?;

        let mut current = self.current.write();
        current.engine.set_index(Arc::new(index));
        current.directory = Some(dir.to_string());
        current.report = report.clone();
        drop(current);

        let errors = sink.1.entries.into_iter().map(|(context, message)| FileError { context, message }).collect();
        Ok(IndexOutcome { directory: dir.to_string(), report, errors })
    }

    pub fn has_index(&self) -> bool { self.current.read().engine.has_index() }

    pub fn search(&self, term: &str) -> Vec<String> { self.current.read().engine.search(term) }

    /// Current snapshot, for callers that want to query it directly.
    pub fn snapshot(&self) -> Option<Arc<InvertedIndex>> { self.current.read().engine.index().cloned() }

    pub fn stats(&self) -> Option<Stats> {
        let current = self.current.read();
        let index = current.engine.index()?;
        Some(Stats {
            directory: current.directory.clone().unwrap_or_default(),
            terms: index.len(),
            documents: index.document_count(),
            report: current.report.clone(),
        })
    }
}

impl Default for App {
    fn default() -> Self { Self::new(BuildConfig::default()) }
}

/// Writes command results as plain text or JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn indexed<W: Write>(&self, out: &mut W, outcome: &IndexOutcome) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(outcome)?)?;
            return Ok(());
        }
        for err in &outcome.errors {
            writeln!(out, "{}: {}", err.context, err.message)?;
        }
        writeln!(out, "Successfully indexed documents in: {}", outcome.directory)?;
        let r = &outcome.report;
        writeln!(out, "{} files indexed, {} failed, {} skipped, {} terms", r.indexed, r.failed, r.skipped, r.terms)?;
        Ok(())
    }

    pub fn results<W: Write>(&self, out: &mut W, query: &str, results: Vec<String>) -> Result<()> {
        if self.json {
            let resp = SearchResponse { query, total_hits: results.len(), results };
            writeln!(out, "{}", serde_json::to_string(&resp)?)?;
            return Ok(());
        }
        if results.is_empty() {
            writeln!(out, "{NO_RESULTS}")?;
        }
        for path in results {
            writeln!(out, "{path}")?;
        }
        Ok(())
    }

    pub fn message<W: Write>(&self, out: &mut W, msg: &str) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::json!({ "message": msg }))?;
        } else {
            writeln!(out, "{msg}")?;
        }
        Ok(())
    }

    pub fn stats<W: Write>(&self, out: &mut W, stats: &Stats) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(stats)?)?;
        } else {
            writeln!(out, "directory: {}", stats.directory)?;
            writeln!(out, "terms: {}", stats.terms)?;
            writeln!(out, "documents: {}", stats.documents)?;
            writeln!(out, "failed files: {}", stats.report.failed)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Index(String),
    Search(String),
    Stats,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line.trim_end(), ""),
        };
        match word {
            "" => Command::Empty,
            "index" => Command::Index(rest.to_string()),
            "search" => Command::Search(rest.to_string()),
            "stats" => Command::Stats,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

const HELP: &str = "commands: index <dir> | search <term> | stats | help | quit";

/// Run one command against `app`. Returns false once the session should end.
pub fn execute<W: Write>(app: &App, cmd: Command, out: &mut W, output: Output) -> Result<bool> {
    match cmd {
        Command::Index(dir) if dir.is_empty() => output.message(out, "Please select a document directory first.")?,
        Command::Index(dir) => match app.index(&dir) {
            Ok(outcome) => output.indexed(out, &outcome)?,
            Err(err) => output.message(out, &format!("Indexing Error: {err}"))?,
        },
        Command::Search(_) if !app.has_index() => output.message(out, NO_INDEX)?,
        Command::Search(term) if term.trim().is_empty() => output.message(out, EMPTY_TERM)?,
        Command::Search(term) => {
            let results = app.search(&term);
            output.results(out, &term, results)?;
        }
        Command::Stats => match app.stats() {
            Some(stats) => output.stats(out, &stats)?,
            None => output.message(out, NO_INDEX)?,
        },
        Command::Help => output.message(out, HELP)?,
        Command::Quit => return Ok(false),
        Command::Empty => {}
        Command::Unknown(word) => output.message(out, &format!("unknown command '{word}'; {HELP}"))?,
    }
    Ok(true)
}

/// Line-oriented command queue: every command runs to completion before the
/// next line is read, so builds and searches never interleave.
pub fn run_shell<R: BufRead, W: Write>(app: &App, input: R, out: &mut W, output: Output) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if !execute(app, Command::parse(&line), out, output)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}
