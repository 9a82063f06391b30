use crate::toolchain::{Outcome, Target};
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Reasons a release build stops.
#[derive(Debug)]
pub enum BuildError {
    /// The output directory could not be created.
    OutputDir { path: PathBuf, source: io::Error },
    /// The compiler could not be started at all.
    CompilerUnavailable { program: OsString, source: io::Error },
    /// The compiler ran and did not succeed.
    Failed {
        target: Target,
        artifact: PathBuf,
        outcome: Outcome,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::OutputDir { path, .. } => {
                write!(f, "Failed to create output directory {}", path.display())
            }
            BuildError::CompilerUnavailable { program, .. } => {
                write!(
                    f,
                    "Compiler '{}' could not be started",
                    program.to_string_lossy()
                )
            }
            BuildError::Failed {
                target,
                artifact,
                outcome,
            } => write!(
                f,
                "Build for {} ({}) failed with {}",
                target,
                artifact.display(),
                outcome
            ),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::OutputDir { source, .. } => Some(source),
            BuildError::CompilerUnavailable { source, .. } => Some(source),
            BuildError::Failed { .. } => None,
        }
    }
}
