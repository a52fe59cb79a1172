mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fraktur", about = "Escape-time fractal renderer")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a view of a fractal to an image file
    Render(commands::render::RenderArgs),
    /// Print the orbit of a single plane point
    Orbit(commands::orbit::OrbitArgs),
    /// List the available fractals
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Orbit(args) => commands::orbit::run(args),
        Commands::List => commands::list::run(),
    }
}
