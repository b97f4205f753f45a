//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `facade aliases` | Print the merged alias table |
//! | `facade facades` | Print registered facade types and their accessors |
//! | `facade resolve-alias <alias>` | Print the facade type an alias loads |
//! | `facade call <facade> <method> [args...]` | Forward a call and print the JSON result |

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use facade_infrastructure::bootstrap::{AppContext, init_app};
use facade_infrastructure::config::ConfigLoader;
use facade_infrastructure::facade::list_facades;
use facade_infrastructure::logging::init_logging;
use serde_json::Value;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::debug;

/// Command line interface for the facade service locator
#[derive(Parser, Debug)]
#[command(name = "facade")]
#[command(about = "Facade service locator - resolve aliases and forward calls through facades")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the merged alias table
    Aliases,

    /// Print registered facade types and their accessor keys
    Facades,

    /// Print the facade type an alias resolves to
    ResolveAlias {
        /// Short alias name, e.g. `Cache`
        alias: String,
    },

    /// Forward a call through a facade and print the result
    Call {
        /// Alias (`Cache`) or raw accessor key (`cache`)
        facade: String,

        /// Method to invoke
        method: String,

        /// Positional arguments; parsed as JSON, plain text otherwise
        args: Vec<String>,
    },
}

/// Load configuration, initialize logging, bootstrap and run the command
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(config.logging.clone()).context("Failed to initialize logging")?;

    let context = init_app(config).context("Failed to bootstrap facades")?;
    let output = execute(&context, &cli.command)?;
    println!("{output}");
    Ok(())
}

/// Run `command` against a bootstrapped context, returning what to print
pub fn execute(context: &AppContext, command: &Command) -> anyhow::Result<String> {
    match command {
        Command::Aliases => {
            let mut out = String::new();
            for (alias, target) in context.aliases().aliases() {
                writeln!(out, "{alias} => {target}")?;
            }
            Ok(out.trim_end().to_string())
        }
        Command::Facades => {
            let mut out = String::new();
            for (type_name, accessor) in list_facades() {
                writeln!(out, "{type_name} ({accessor})")?;
            }
            Ok(out.trim_end().to_string())
        }
        Command::ResolveAlias { alias } => match context.aliases().resolve(alias) {
            Some(target) => Ok(target),
            None => bail!("Unknown alias '{alias}'"),
        },
        Command::Call {
            facade,
            method,
            args,
        } => {
            let proxy = context.proxy_for(facade);
            let args: Vec<Value> = args.iter().map(|raw| parse_argument(raw)).collect();
            debug!(accessor = %proxy.accessor(), method = %method, "Calling facade from CLI");
            let result = proxy
                .forward(method, &args)
                .with_context(|| format!("{facade}::{method} failed"))?;
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

/// Parse a command line argument as JSON, keeping it as a string otherwise
pub fn parse_argument(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
