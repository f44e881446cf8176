use clap::Parser;
use typegraph::cli::{run_cli, Cli};
use typegraph::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging_with_config(&LogConfig::from_env())?;
    run_cli(Cli::parse())
}
