//! # router CLI
//!
//! Command-line front end for the `router` library: reads a grid/net
//! description, routes every net, and writes the routed geometry back out.

use clap::Parser;
use log::info;
use router::{driver, parse, write, CostModel};
use std::path::PathBuf;
use std::process::ExitCode;

/// Two-layer grid maze router.
#[derive(Parser)]
#[command(name = "router")]
#[command(about = "Routes nets over a two-layer grid using Lee's algorithm")]
struct Cli {
    /// Input file describing the grid, obstacles, and nets
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Output file the routed nets are written to
    #[arg(default_value = "output.txt")]
    output: PathBuf,

    /// Cost of a unit step along a layer's preferred axis
    #[arg(long, default_value_t = CostModel::default().step_cost)]
    step_cost: u32,

    /// Additional cost added to a step taken against a layer's preferred axis
    #[arg(long, default_value_t = CostModel::default().wrong_dir_cost)]
    wrong_dir_cost: u32,

    /// Cost of a layer transition at a fixed (x, y)
    #[arg(long, default_value_t = CostModel::default().via_cost)]
    via_cost: u32,

    /// Write a rendering of the occupancy grid and routed nets to PATH
    #[cfg(feature = "visualize")]
    #[arg(long, value_name = "PATH")]
    visualize: Option<PathBuf>,

    /// Raise the log level to debug
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> router::Result<()> {
    let problem = parse::parse_file(&cli.input)?;
    let cost = CostModel::new(cli.step_cost, cli.wrong_dir_cost, cli.via_cost);

    let result = driver::route(&problem, &cost);
    info!(
        "{}: {} routed, {} failed",
        cli.input.display(),
        result.routed_count(),
        result.failed_count()
    );

    write::write_file(&cli.output, &result)?;

    #[cfg(feature = "visualize")]
    if let Some(path) = &cli.visualize {
        router::visualize::write_png(path, &problem, &result)?;
    }

    Ok(())
}
