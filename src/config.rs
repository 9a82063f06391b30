use crate::toolchain::{Arch, Target};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The only operating system we ship binaries for.
pub const TARGET_OS: &str = "linux";
/// Output directory, relative to the application root.
pub const OUTPUT_DIR: &str = "dist";
/// Artifact file name prefix: `<prefix>-<arch>`.
pub const ARTIFACT_PREFIX: &str = "pho";
/// File holding the `AppVersion` literal, relative to the application root.
pub const METADATA_FILE: &str = "core/meta.go";
/// Compiler executable, looked up on `PATH`.
pub const COMPILER: &str = "go";

/// Overrides the application root.
pub const ROOT_ENV: &str = "PHO_ROOT";
/// Overrides the compiler executable.
pub const COMPILER_ENV: &str = "PHO_GO";

/// Everything the build loop and the version reader need to know, resolved
/// once at startup.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub root: PathBuf,
    pub targets: Vec<Target>,
    pub output_dir: PathBuf,
    pub artifact_prefix: String,
    pub metadata_file: PathBuf,
    pub compiler: OsString,
    /// Directory the compiler runs in.
    pub work_dir: PathBuf,
}

impl ReleaseConfig {
    /// Default layout rooted at `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            targets: Arch::ALL
                .iter()
                .map(|&arch| Target::new(TARGET_OS, arch))
                .collect(),
            output_dir: root.join(OUTPUT_DIR),
            artifact_prefix: ARTIFACT_PREFIX.to_string(),
            metadata_file: root.join(METADATA_FILE),
            compiler: OsString::from(COMPILER),
            work_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            root,
        }
    }

    /// Resolves the root and compiler from the environment, falling back to
    /// the directory above this crate.
    pub fn from_env() -> Self {
        let root = env::var_os(ROOT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_root);

        let mut config = Self::for_root(root);
        if let Some(compiler) = env::var_os(COMPILER_ENV)
            && !compiler.is_empty()
        {
            config.compiler = compiler;
        }
        config
    }

    /// `<output_dir>/<prefix>-<arch>`
    pub fn artifact_path(&self, target: &Target) -> PathBuf {
        self.output_dir
            .join(format!("{}-{}", self.artifact_prefix, target.arch))
    }
}

fn default_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}
