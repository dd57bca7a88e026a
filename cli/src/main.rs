use anyhow::Result;
use clap::{Parser, Subcommand};
use docsearch::{execute, run_shell, App, Command, Output};
use docsearch_core::BuildConfig;
use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Index a directory of text files and look up documents by term", long_about = None)]
struct Cli {
    /// Only files whose path ends with this literal, case-sensitive suffix are indexed
    #[arg(long, default_value = ".txt", global = true)]
    suffix: String,
    /// Print results as JSON
    #[arg(long, default_value_t = false, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index of a directory and report per-file errors
    Index {
        dir: String,
    },
    /// Build an index of a directory, then print the documents containing a term
    Search {
        dir: String,
        term: String,
    },
    /// Read commands (index, search, stats, quit) from stdin one line at a time
    Shell {
        /// Directory to index before reading commands
        dir: Option<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let app = App::new(BuildConfig { suffix: cli.suffix });
    let output = Output { json: cli.json };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Index { dir } => {
            let outcome = app.index(&dir)?;
            output.indexed(&mut out, &outcome)?;
        }
        Commands::Search { dir, term } => {
            app.index(&dir)?;
            execute(&app, Command::Search(term), &mut out, output)?;
        }
        Commands::Shell { dir } => {
            if let Some(dir) = dir {
                execute(&app, Command::Index(dir), &mut out, output)?;
            }
            run_shell(&app, io::stdin().lock(), &mut out, output)?;
        }
    }
    out.flush()?;
    Ok(())
}
