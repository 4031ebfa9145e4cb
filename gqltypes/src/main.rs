mod commands;
mod ops;
mod reports;
mod settings;
mod telemetry;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    telemetry::init_tracing("info");

    Cli::parse().run()
}
