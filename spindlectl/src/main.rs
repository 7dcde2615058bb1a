//! `spindlectl`: inspect carousel layouts, settings and snap behaviour.
#![allow(missing_docs)]

mod commands;
mod host;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "spindlectl",
    version,
    about = "Spindle carousel layout and settings tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print item size, content geometry and the initial offset as JSON
    Layout {
        #[arg(long)]
        width: f32,
        #[arg(long)]
        height: f32,
        #[arg(long)]
        items: usize,
        /// Settings file (TOML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Load settings, run guard rails and report warnings
    Check {
        /// Settings file (TOML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Env file loaded before SPINDLE_* variables are read
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
    /// Drag to a fractional index, release, and print every host command as
    /// a JSON line
    Simulate {
        #[arg(long)]
        width: f32,
        #[arg(long)]
        height: f32,
        #[arg(long)]
        items: usize,
        /// Fractional item index under the viewport center at release
        #[arg(long, allow_negative_numbers = true)]
        release_at: f32,
        /// Settings file (TOML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Layout {
            width,
            height,
            items,
            config,
        } => commands::run_layout(width, height, items, config)?,
        Command::Check { config, env_file } => {
            commands::run_check(config, env_file)?
        }
        Command::Simulate {
            width,
            height,
            items,
            release_at,
            config,
        } => commands::run_simulate(width, height, items, release_at, config)?,
    }

    Ok(())
}
