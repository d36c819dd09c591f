use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use holekit::host::{error_json, read_context, to_json};
use holekit::{init_logging, Config, PerimeterHoleTool, BUILD_DATE, VERSION};

/// Evenly spaced holes along the outlines of selected shapes
#[derive(Parser, Debug)]
#[command(name = "holekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (.toml or .json); defaults to the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Place holes and print the cut records
    Run {
        /// Project context JSON; read from stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print the parameter form for the context's bit and unit
    Properties {
        /// Project context JSON; read from stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging()?;
    let cli = Cli::parse();
    debug!(version = VERSION, build_date = BUILD_DATE, "Starting holekit");

    let config = Config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    let pretty = config.output.pretty;
    let tool = PerimeterHoleTool::new(config.geometry_options());

    let (input, result) = match &cli.command {
        Commands::Run { input } => {
            let context = read_context(input.as_deref())?;
            let result = tool
                .execute(&context)
                .map(|records| to_json(&records, pretty));
            (input, result)
        }
        Commands::Properties { input } => {
            let context = read_context(input.as_deref())?;
            let result = tool
                .properties(&context)
                .map(|fields| to_json(&fields, pretty));
            (input, result)
        }
    };

    match result {
        Ok(json) => {
            println!("{}", json?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(input = ?input, error = %e, "Tool run failed");
            println!("{}", error_json(&e.to_string(), pretty)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
