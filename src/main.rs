//! # pho-release CLI Entry Point
//!
//! - `pho-release build` cross-compiles every linux target into `dist/`
//! - `pho-release version` prints the version found in `core/meta.go`
//!
//! Both exit non-zero on the first failure. Errors go to stderr; stdout of
//! `version` only ever carries the version itself.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io;
use std::time::Instant;

use pho_release::build::{self, BuildOptions};
use pho_release::config::ReleaseConfig;
use pho_release::ui;
use pho_release::version;

#[derive(Parser)]
#[command(name = "pho-release")]
#[command(about = "Release tooling for pho", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build dist/pho-<arch> for every supported linux architecture
    Build {
        /// Show what would be executed without running
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the application version from core/meta.go
    Version {
        /// Print the release tag form (v<version>)
        #[arg(long)]
        tag: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = ReleaseConfig::from_env();

    let result = match cli.command {
        Commands::Build { dry_run } => run_build(&config, dry_run),
        Commands::Version { tag } => run_version(&config, tag),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "x".red(), e);
        std::process::exit(1);
    }
}

fn run_build(config: &ReleaseConfig, dry_run: bool) -> Result<()> {
    let start = Instant::now();
    let options = BuildOptions { dry_run };

    let reports = build::build_release(config, &options).context("Release build aborted")?;

    if !dry_run {
        ui::print_build_summary(&reports, start.elapsed());
    }
    Ok(())
}

fn run_version(config: &ReleaseConfig, tag: bool) -> Result<()> {
    let version = version::read_version(&config.metadata_file)?;

    version::write_version(&mut io::stdout().lock(), &version, tag)
        .context("Failed to write version to stdout")?;
    Ok(())
}
