//! # pho-release - Release tooling for pho
//!
//! Builds stripped, statically linked `pho` binaries for every supported linux
//! architecture and reads the application version out of its Go sources, so
//! release scripts can label the artifacts consistently.
//!
//! ## Quick Start
//!
//! ```bash
//! # Cross-build dist/pho-386, dist/pho-amd64, dist/pho-arm, dist/pho-arm64
//! pho-release build
//!
//! # Print the version from core/meta.go
//! pho-release version
//! ```
//!
//! ## Module Organization
//!
//! - [`build`] - Sequential, fail-fast multi-target build loop
//! - [`config`] - Fixed release layout and root resolution
//! - [`toolchain`] - Compiler invocation and the process-runner seam
//! - [`version`] - `AppVersion` extraction

/// Multi-target release build.
pub mod build;

/// Release layout (`dist/`, target list, metadata file).
pub mod config;

/// Compiler invocation.
pub mod toolchain;

/// Terminal UI utilities (tables, colors).
pub mod ui;

/// Application version lookup.
pub mod version;
