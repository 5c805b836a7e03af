use super::*;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Somewhere an [`ErrorTable`] can come from
pub trait TableSource {
    /// Human-readable name, used in diagnostics
    fn describe(&self) -> String;
    fn load(&self) -> Result<ErrorTable, HostErrnoError>;
}

/// An in-memory table is its own source
impl TableSource for ErrorTable {
    fn describe(&self) -> String {
        "<in-memory table>".to_string()
    }
    fn load(&self) -> Result<ErrorTable, HostErrnoError> {
        Ok(self.clone())
    }
}

/// Runs an external program and parses its stdout, `errno -l` by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrnoCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}
impl ErrnoCommand {
    pub fn new<P: Into<OsString>>(program: P) -> Self {
        Self {
            program: program.into(),
            args: vec![],
        }
    }
    pub fn arg<A: Into<OsString>>(&mut self, arg: A) -> &mut Self {
        self.args.push(arg.into());
        self
    }
    pub fn args<A: Into<OsString>, I: IntoIterator<Item = A>>(&mut self, args: I) -> &mut Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
    /// Split a command line on whitespace. `None` if there's no program.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut it = line.split_whitespace();
        let mut cmd = Self::new(it.next()?);
        cmd.args(it);
        Some(cmd)
    }
}
impl Default for ErrnoCommand {
    fn default() -> Self {
        let mut cmd = Self::new("errno");
        cmd.arg("-l");
        cmd
    }
}
impl TableSource for ErrnoCommand {
    fn describe(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
    fn load(&self) -> Result<ErrorTable, HostErrnoError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| HostErrnoError::unavailable(self.describe(), err.to_string()))?;
        if !output.status.success() {
            return Err(HostErrnoError::unavailable(
                self.describe(),
                format!("command {}", output.status),
            ));
        }
        let text = String::from_utf8(output.stdout).map_err(|_| {
            HostErrnoError::unavailable(self.describe(), "output is not valid UTF-8")
        })?;
        parse_table(&text)
    }
}

/// A listing captured earlier, e.g. `errno -l > errno.txt` on the target machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFile(pub PathBuf);
impl TableSource for ListingFile {
    fn describe(&self) -> String {
        self.0.display().to_string()
    }
    fn load(&self) -> Result<ErrorTable, HostErrnoError> {
        let text = std::fs::read_to_string(&self.0)
            .map_err(|err| HostErrnoError::unavailable(self.describe(), err.to_string()))?;
        parse_table(&text)
    }
}
