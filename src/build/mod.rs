mod core;
mod error;
mod utils;

pub use self::core::{BuildOptions, BuildReport, build_release, build_targets};
pub use error::BuildError;
pub use utils::{GOARCH, GOOS, LDFLAGS, build_invocation};
