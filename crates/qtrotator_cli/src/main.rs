//! qtrotator CLI
//!
//! Simulate or run a content rotator from a rotator.toml configuration.

mod config;
mod run;
mod scene;
mod simulate;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::RotatorConfig;
use qtrotator::Capabilities;
use scene::DragScript;
use simulate::SimulateArgs;

#[derive(Parser)]
#[command(name = "qtrotator")]
#[command(author, version, about = "Content rotator simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Settings shared by `simulate` and `run`; flags override the config file
#[derive(Args)]
struct SceneArgs {
    /// Path to rotator.toml (or a directory containing one)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of panels
    #[arg(long)]
    panels: Option<usize>,

    /// Total time in milliseconds
    #[arg(long)]
    duration: Option<u64>,

    /// Rotation interval in milliseconds
    #[arg(long)]
    interval: Option<u64>,

    /// Panel transition easing curve
    #[arg(long)]
    easing: Option<String>,

    /// Behave as if the host cannot animate transitions
    #[arg(long)]
    no_transitions: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a rotator on a virtual clock and print each frame
    Simulate {
        #[command(flatten)]
        scene: SceneArgs,

        /// Clock step in milliseconds
        #[arg(long)]
        step: Option<u64>,

        /// Scripted drag as FROM:TO@MS (repeatable)
        #[arg(long = "drag", value_name = "FROM:TO@MS")]
        drags: Vec<DragScript>,

        /// Print frames as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Run a rotator on the wall clock
    Run {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Write a default rotator.toml
    Init {
        /// Target path
        #[arg(default_value = "rotator.toml")]
        path: PathBuf,
    },
}

impl SceneArgs {
    fn resolve(&self) -> Result<RotatorConfig> {
        let mut config = match &self.config {
            Some(path) => RotatorConfig::load(path)?,
            None => RotatorConfig::default(),
        };
        if let Some(panels) = self.panels {
            config.demo.panels = panels;
        }
        if let Some(duration) = self.duration {
            config.demo.duration_ms = duration;
        }
        if let Some(interval) = self.interval {
            config.rotator.interval = interval;
        }
        if let Some(easing) = &self.easing {
            config.rotator.easing = easing.clone();
        }
        if self.no_transitions {
            config.capabilities = Capabilities::without_transitions();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Simulate {
            scene,
            step,
            drags,
            json,
        } => {
            let config = scene.resolve()?;
            simulate::simulate(SimulateArgs {
                options: config.rotator,
                capabilities: config.capabilities,
                panels: config.demo.panels,
                duration_ms: config.demo.duration_ms,
                step_ms: step.unwrap_or(config.demo.step_ms),
                drags,
                json,
            })
        }
        Commands::Run { scene } => {
            let config = scene.resolve()?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("Failed to start runtime")?;
            runtime.block_on(run::run(
                config.rotator,
                config.capabilities,
                config.demo.panels,
                config.demo.duration_ms,
            ))
        }
        Commands::Init { path } => init(&path),
    }
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    fs::write(path, RotatorConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
