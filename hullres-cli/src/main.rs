//! `hullres` command line front end.
//!
//! Collects hull fields the way the original input form did, runs the
//! `hullres-core` pipeline, and prints the resistance curve or an error.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hullres")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ship hull resistance versus speed", long_about = None)]
struct Cli {
    /// Log filter (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the resistance curve of a hull
    Curve(commands::curve::CurveArgs),
    /// List wetted surface area methods
    Methods,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .format_target(false)
        .init();

    match cli.command {
        Commands::Curve(args) => commands::curve::execute(args),
        Commands::Methods => commands::methods::execute(),
    }
}
