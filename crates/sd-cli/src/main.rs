//! CLI frontend for spider divination.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spider",
    about = "Spider divination: cast leaves into the bowl and read them",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast one or more tableaux and print the readings
    Cast {
        /// RNG seed for a reproducible cast
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Lottery mode: 6 leaves, no repeats across casts until the deck runs out
        #[arg(short, long)]
        lottery: bool,

        /// Number of successive casts sharing one draw history
        #[arg(short, long, default_value = "1")]
        draws: u32,

        /// Print the tableaux as JSON
        #[arg(long)]
        json: bool,

        /// JSON file overriding the bowl layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Read a single leaf placed at a given position and angle
    Interpret {
        /// Card center x
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Card center y
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Rotation in degrees
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        angle: f64,

        /// JSON file overriding the bowl layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Print the validated bowl layout as JSON
    Layout {
        /// JSON file overriding the bowl layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Start an interactive reading
    Play {
        /// RNG seed for reproducible casts
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Start in lottery mode
        #[arg(short, long)]
        lottery: bool,

        /// JSON file overriding the bowl layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Cast {
            seed,
            lottery,
            draws,
            json,
            layout,
        } => commands::cast::run(layout.as_deref(), seed, lottery, draws, json),
        Commands::Interpret {
            x,
            y,
            angle,
            layout,
        } => commands::interpret::run(layout.as_deref(), x, y, angle),
        Commands::Layout { layout } => commands::layout::run(layout.as_deref()),
        Commands::Play {
            seed,
            lottery,
            layout,
        } => commands::play::run(layout.as_deref(), seed, lottery),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
