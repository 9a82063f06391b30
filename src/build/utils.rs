use crate::config::ReleaseConfig;
use crate::toolchain::{Invocation, Target};
use std::ffi::OsString;
use std::path::Path;

/// Environment variable selecting the target operating system.
pub const GOOS: &str = "GOOS";
/// Environment variable selecting the target architecture.
pub const GOARCH: &str = "GOARCH";

/// Linker flags dropping the symbol table (`-s`) and DWARF info (`-w`).
///
/// Passed as two argv entries: the flag name and one space-joined value.
pub const LDFLAGS: [&str; 2] = ["-ldflags", "-s -w"];

/// `go build -ldflags "-s -w" -o <artifact>` with `GOOS`/`GOARCH` set for `target`.
pub fn build_invocation(config: &ReleaseConfig, target: &Target, artifact: &Path) -> Invocation {
    let mut args: Vec<OsString> = vec!["build".into()];
    args.extend(LDFLAGS.iter().map(OsString::from));
    args.push("-o".into());
    args.push(artifact.as_os_str().to_owned());

    Invocation {
        program: config.compiler.clone(),
        args,
        env: vec![
            (GOOS.to_string(), target.os.to_string()),
            (GOARCH.to_string(), target.arch.as_goarch().to_string()),
        ],
        cwd: config.work_dir.clone(),
    }
}
