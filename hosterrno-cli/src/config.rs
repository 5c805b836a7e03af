use super::*;
use hosterrno_table::{ErrnoCommand, ListingFile, TableSource};

pub const ROOT_VAR: &str = "HOSTERRNO_ROOT";
pub const COMMAND_VAR: &str = "HOSTERRNO_COMMAND";
pub const DEFAULT_COMMAND: &str = "errno -l";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// command line to run, split on whitespace
    Command(String),
    Listing(PathBuf),
}

/// Settings for one run: flags win over environment variables, which win over defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub kind: ArtifactKind,
    pub root: PathBuf,
    pub source: SourceConfig,
    pub verbose: bool,
    pub timings: bool,
}
impl Config {
    pub fn resolve(cli: &Cli) -> Self {
        Self::resolve_with(cli, |var| std::env::var_os(var))
    }
    /// Same as [`Config::resolve`], with `env` standing in for the process environment
    pub fn resolve_with<F: Fn(&str) -> Option<OsString>>(cli: &Cli, env: F) -> Self {
        let env = |var: &str| env(var).filter(|v| !v.is_empty());
        let root = cli
            .root
            .clone()
            .or_else(|| env(ROOT_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        let source = match &cli.listing {
            Some(path) => SourceConfig::Listing(path.clone()),
            None => SourceConfig::Command(
                cli.errno_command
                    .clone()
                    .or_else(|| env(COMMAND_VAR).map(|v| v.to_string_lossy().into_owned()))
                    .unwrap_or_else(|| DEFAULT_COMMAND.to_string()),
            ),
        };
        Self {
            kind: cli.kind.into(),
            root,
            source,
            verbose: cli.verbose,
            timings: cli.timings,
        }
    }
    pub fn table_source(&self) -> Result<Box<dyn TableSource>, HostErrnoError> {
        match &self.source {
            SourceConfig::Listing(path) => Ok(Box::new(ListingFile(path.clone()))),
            SourceConfig::Command(line) => match ErrnoCommand::from_command_line(line) {
                Some(cmd) => Ok(Box::new(cmd)),
                None => Err(HostErrnoError::unavailable(
                    line.clone(),
                    "the listing command is empty",
                )),
            },
        }
    }
}
