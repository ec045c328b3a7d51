// src/bin/cli.rs
use clap::Parser;
use zipcaster::cli;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    cli::run(cli::Args::parse())
}
