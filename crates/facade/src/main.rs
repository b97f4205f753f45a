//! Facade - Entry Point
//!
//! Binary entry point for the `facade` tool. Lives in the `facade` crate
//! next to the library so the CLI logic stays testable.

// Force-link facade-infrastructure to ensure linkme facade and alias registrations are included
extern crate facade_infrastructure;

use clap::Parser;
use facade::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
