//! NART CLI - command-line driver for the model converter passes.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nart_cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("nart_cli=info".parse()?)
                .add_directive("nart_convert=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize(cmd) => cmd.run()?,
    }

    Ok(())
}
