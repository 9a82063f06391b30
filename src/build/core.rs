use super::error::BuildError;
use super::utils::build_invocation;
use crate::config::ReleaseConfig;
use crate::toolchain::{DryRunRunner, ProcessRunner, SystemRunner, Target};
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Print the compiler invocations instead of running them
    pub dry_run: bool,
}

/// One successfully built target.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub target: Target,
    pub artifact: PathBuf,
    pub elapsed: Duration,
}

// --- COMMAND: Build every target ---
pub fn build_release(
    config: &ReleaseConfig,
    options: &BuildOptions,
) -> Result<Vec<BuildReport>, BuildError> {
    if options.dry_run {
        println!("{} Dry run: no compiler will be started", "ℹ".blue());
        return build_targets(config, &DryRunRunner);
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| BuildError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    build_targets(config, &SystemRunner)
}

// --- CORE: Sequential, fail-fast build loop ---
pub fn build_targets(
    config: &ReleaseConfig,
    runner: &dyn ProcessRunner,
) -> Result<Vec<BuildReport>, BuildError> {
    let mut reports = Vec::with_capacity(config.targets.len());

    for target in &config.targets {
        let artifact = config.artifact_path(target);
        let invocation = build_invocation(config, target, &artifact);

        println!(
            "{} Building \"{}\"...",
            "[info]".cyan(),
            artifact.display()
        );
        let start = Instant::now();

        let outcome = runner
            .run(&invocation)
            .map_err(|source| BuildError::CompilerUnavailable {
                program: invocation.program.clone(),
                source,
            })?;

        if !outcome.success() {
            return Err(BuildError::Failed {
                target: target.clone(),
                artifact,
                outcome,
            });
        }

        let elapsed = start.elapsed();
        println!(
            "{} Built \"{}\" successfully in {:.2?}",
            "[done]".green(),
            artifact.display(),
            elapsed
        );

        reports.push(BuildReport {
            target: target.clone(),
            artifact,
            elapsed,
        });
    }

    Ok(reports)
}
