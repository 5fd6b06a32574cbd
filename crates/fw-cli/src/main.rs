//! CLI host for the Fernweh adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fw",
    about = "Fernweh — a turn-based text-adventure engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world interactively on stdin
    Play {
        /// World file (JSON); defaults to the built-in sample world
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Snapshot file: restored on start if present, written after
        /// every turn
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Starting health
        #[arg(long, default_value = "100")]
        health: i32,

        /// Starting hunger
        #[arg(long, default_value = "0")]
        hunger: i32,

        /// Day limit before the session is lost
        #[arg(long, default_value = "365")]
        max_days: u32,

        /// RNG seed for combat damage
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Validate a world file and list its scenes
    Check {
        /// World file (JSON)
        world: PathBuf,
    },

    /// Write the built-in sample world as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            world,
            save,
            health,
            hunger,
            max_days,
            seed,
        } => {
            let config = fw_engine::Config::default()
                .with_starting_health(health)
                .with_starting_hunger(hunger)
                .with_max_days(max_days)
                .with_seed(seed);
            commands::play::run(world.as_deref(), save.as_deref(), config)
        }
        Commands::Check { world } => commands::check::run(&world),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
