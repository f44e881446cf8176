use crate::config::InspectOptions;
use crate::facts::load_catalog;
use crate::inspect::Inspector;
use crate::validator::{fail_if_issues, print_issues};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Command-line interface for typegraph
#[derive(Parser)]
#[command(name = "typegraph")]
#[command(about = "Extract a schema graph and API surface from type catalogs", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a type catalog and emit the schema document as JSON
    Inspect {
        /// Path to the type catalog (YAML or JSON)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Searched module (repeatable)
        #[arg(short, long = "module")]
        modules: Vec<String>,

        /// Inspection options file (YAML or JSON); defaults come from the environment
        #[arg(long)]
        options: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON document
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Validate a type catalog without inspecting it
    Validate {
        /// Path to the type catalog (YAML or JSON)
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The catalog or options file cannot be loaded or parsed
/// - The catalog fails validation
/// - The inspection fails
/// - The output cannot be written
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Inspect {
            catalog,
            modules,
            options,
            output,
            pretty,
        } => {
            let facts = load_catalog(&catalog)?;
            fail_if_issues(facts.validate())?;

            let mut opts = match &options {
                Some(path) => InspectOptions::load(path)?,
                None => InspectOptions::from_env(),
            };
            opts.extend_modules(modules);
            if opts.searched_modules.is_empty() {
                tracing::warn!("no searched modules configured; only generics and collections are in scope");
            }

            let document = Inspector::new(&facts, opts)
                .inspect()
                .with_context(|| format!("inspection of {} failed", catalog.display()))?;
            let json = if pretty {
                serde_json::to_string_pretty(&document)?
            } else {
                serde_json::to_string(&document)?
            };
            write_output(output.as_deref(), &json)
        }
        Commands::Validate { catalog } => {
            let facts = load_catalog(&catalog)?;
            let issues = facts.validate();
            if issues.is_empty() {
                println!("{}: {} type(s), no issues", catalog.display(), facts.len());
                return Ok(());
            }
            print_issues(&issues);
            for issue in &issues {
                eprintln!("{issue}");
            }
            anyhow::bail!("{} issue(s) found in {}", issues.len(), catalog.display())
        }
    }
}

fn write_output(path: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")
        }
    }
}
