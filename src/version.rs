//! Application version lookup.
//!
//! The canonical version of `pho` lives in a Go source file as a string
//! constant:
//!
//! ```go
//! const AppVersion = "1.4.2"
//! ```
//!
//! The match contract with that file is [`VERSION_PATTERN`]: the `AppVersion`
//! identifier, `=`, and a double-quoted `major.minor.patch` literal made of
//! three non-negative integers. The first match wins. The file is never
//! written to.

use regex::Regex;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `AppVersion = "<major>.<minor>.<patch>"` on one line; spaces or tabs around
/// `=` are optional.
pub const VERSION_PATTERN: &str = r#"\bAppVersion[ \t]*=[ \t]*"(\d+\.\d+\.\d+)""#;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("VERSION_PATTERN is a valid regex"));

/// A version string captured verbatim from the metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppVersion(String);

impl AppVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Release tag form, e.g. `v1.4.2`.
    pub fn tag(&self) -> String {
        format!("v{}", self.0)
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
pub enum VersionError {
    /// The metadata file could not be read.
    Unreadable { path: PathBuf, source: io::Error },
    /// The file was read but holds no version literal.
    NotFound { path: PathBuf },
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionError::Unreadable { path, .. } => {
                write!(f, "Metadata file {} is unreadable", path.display())
            }
            VersionError::NotFound { path } => write!(
                f,
                "Version pattern not found in {} (expected `AppVersion = \"X.Y.Z\"`)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for VersionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VersionError::Unreadable { source, .. } => Some(source),
            VersionError::NotFound { .. } => None,
        }
    }
}

/// Finds the first `AppVersion` literal in `content`.
pub fn extract_version(content: &str) -> Option<AppVersion> {
    VERSION_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| AppVersion(m.as_str().to_string()))
}

/// Reads `path` in full and extracts the version from it.
pub fn read_version(path: &Path) -> Result<AppVersion, VersionError> {
    let content = fs::read_to_string(path).map_err(|source| VersionError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    extract_version(&content).ok_or_else(|| VersionError::NotFound {
        path: path.to_path_buf(),
    })
}

/// Writes the version (or its tag form) and a newline to `out`.
///
/// Write errors such as a closed pipe are returned rather than panicking.
pub fn write_version(out: &mut impl Write, version: &AppVersion, tag: bool) -> io::Result<()> {
    if tag {
        writeln!(out, "{}", version.tag())?;
    } else {
        writeln!(out, "{}", version)?;
    }
    out.flush()
}
