use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

/// Supported target architectures, spelled the way `GOARCH` expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 32-bit x86 (`386`)
    I386,
    /// 64-bit x86 (`amd64`)
    Amd64,
    /// 32-bit ARM (`arm`)
    Arm,
    /// 64-bit ARM (`arm64`)
    Arm64,
}

impl Arch {
    /// Every supported architecture, in build order.
    pub const ALL: [Arch; 4] = [Arch::I386, Arch::Amd64, Arch::Arm, Arch::Arm64];

    pub fn as_goarch(&self) -> &'static str {
        match self {
            Arch::I386 => "386",
            Arch::Amd64 => "amd64",
            Arch::Arm => "arm",
            Arch::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_goarch())
    }
}

/// One (operating system, architecture) pair we produce a binary for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub os: &'static str,
    pub arch: Arch,
}

impl Target {
    pub fn new(os: &'static str, arch: Arch) -> Self {
        Self { os, arch }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// A single synchronous run of the compiler.
///
/// `env` is an overlay: the runner applies it on top of the inherited
/// process environment. `program` and `args` stay OS strings so paths reach
/// the compiler byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub env: Vec<(String, String)>,
    pub cwd: PathBuf,
}

impl Invocation {
    /// Looks up a variable in the overlay.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value following `flag` in the argument list.
    pub fn arg_after(&self, flag: &str) -> Option<&OsStr> {
        let pos = self.args.iter().position(|a| a == flag)?;
        self.args.get(pos + 1).map(|a| a.as_os_str())
    }

    /// Shell-like rendering for display only; non-UTF-8 bytes are replaced.
    pub fn command_line(&self) -> String {
        let mut parts: Vec<String> = self
            .env
            .iter()
            .map(|(k, v)| format!("{}={}", k, quote(v)))
            .collect();
        parts.push(quote(&self.program.to_string_lossy()));
        parts.extend(self.args.iter().map(|a| quote(&a.to_string_lossy())));
        parts.join(" ")
    }
}

fn quote(s: &str) -> String {
    if s.is_empty() || s.contains(char::is_whitespace) {
        format!("\"{}\"", s)
    } else {
        s.to_string()
    }
}

/// How a compiler process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The process exited with the given status code.
    Exited(i32),
    /// The process was killed by a signal (unix only).
    Signaled(i32),
}

impl Outcome {
    pub fn success(&self) -> bool {
        matches!(self, Outcome::Exited(0))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Exited(code) => write!(f, "exit code {}", code),
            Outcome::Signaled(signal) => write!(f, "terminated by signal {}", signal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goarch_spelling() {
        let names: Vec<&str> = Arch::ALL.iter().map(|a| a.as_goarch()).collect();
        assert_eq!(names, ["386", "amd64", "arm", "arm64"]);
    }

    #[test]
    fn test_command_line_quotes_joined_flags() {
        let inv = Invocation {
            program: "go".into(),
            args: vec!["build".into(), "-ldflags".into(), "-s -w".into()],
            env: vec![("GOOS".into(), "linux".into())],
            cwd: PathBuf::from("."),
        };
        assert_eq!(inv.command_line(), "GOOS=linux go build -ldflags \"-s -w\"");
        assert_eq!(inv.env_var("GOOS"), Some("linux"));
        assert_eq!(inv.env_var("GOARCH"), None);
        assert_eq!(inv.arg_after("-ldflags"), Some(OsStr::new("-s -w")));
        assert_eq!(inv.arg_after("-o"), None);
    }

    #[test]
    fn test_outcome_success() {
        assert!(Outcome::Exited(0).success());
        assert!(!Outcome::Exited(2).success());
        assert!(!Outcome::Signaled(9).success());
    }
}
