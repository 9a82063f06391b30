//! Compiler invocation
//!
//! The Go toolchain is treated as an opaque external program. Everything that
//! starts a process goes through [`ProcessRunner`], so the build loop can be
//! driven by a fake runner in tests.

pub mod types;

pub use types::{Arch, Invocation, Outcome, Target};

use colored::*;
use std::io;
use std::process::Command;

/// Runs one compiler invocation to completion.
pub trait ProcessRunner {
    /// Blocks until the process terminates.
    ///
    /// Returns `Err` only when the program could not be started at all.
    fn run(&self, invocation: &Invocation) -> io::Result<Outcome>;
}

/// Spawns real processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Outcome> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .current_dir(&invocation.cwd)
            .status()?;

        if let Some(code) = status.code() {
            return Ok(Outcome::Exited(code));
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Ok(Outcome::Signaled(signal));
            }
        }

        Err(io::Error::other(format!(
            "'{}' terminated without an exit status",
            invocation.program.to_string_lossy()
        )))
    }
}

/// Prints what would be executed and reports success without running anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl ProcessRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Outcome> {
        println!("   {} {}", "$".dimmed(), invocation.command_line());
        Ok(Outcome::Exited(0))
    }
}
