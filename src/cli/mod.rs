//! # CLI Module
//!
//! Command-line front end for running inspections over type catalogs.
//!
//! ## Commands
//!
//! ### `inspect`
//!
//! Inspect a catalog and write the `{ definitions, apis }` document as JSON:
//!
//! ```bash
//! typegraph inspect --catalog shop.yaml --module Shop --pretty
//! ```
//!
//! Options:
//! - `--catalog <FILE>` - Type catalog (YAML or JSON, required)
//! - `--module <NAME>` - Searched module, repeatable; added to those from the
//!   options file or `TYPEGRAPH_MODULES`
//! - `--options <FILE>` - Inspection options file (YAML or JSON)
//! - `--output <FILE>` - Write the document to a file instead of stdout
//! - `--pretty` - Pretty-print the JSON
//!
//! ### `validate`
//!
//! Check a catalog for dangling keys and inconsistent generics:
//!
//! ```bash
//! typegraph validate --catalog shop.yaml
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use typegraph::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(cli)?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
