use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use const_format::formatcp;
use hosterrno_codegen::{generate_with, ArtifactKind, Progress, STRERROR_FUNCTION};
use hosterrno_errors::{error, note, warning, HostErrnoError};
use hosterrno_table::{ErrorTable, TableSource};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
mod config;
mod report;
#[cfg(test)]
mod tests;
pub use config::*;
use report::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileKind {
    /// the header, inc/host/errno.h
    #[value(name = "h")]
    Header,
    /// the implementation, src/host/errno.c
    #[value(name = "c")]
    Source,
}
impl From<FileKind> for ArtifactKind {
    fn from(kind: FileKind) -> Self {
        match kind {
            FileKind::Header => Self::Declarations,
            FileKind::Source => Self::Definitions,
        }
    }
}
impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Header => "h",
            Self::Source => "c",
        })
    }
}

pub static LONG_VERSION: &str = formatcp!(
    "{}\nGit {}\nDebug {}",
    env!("CARGO_PKG_VERSION"),
    if cfg!(has_git) {
        formatcp!(
            "commit {} on branch {}",
            env!("GIT_COMMIT"),
            env!("GIT_BRANCH")
        )
    } else {
        "not found"
    },
    if cfg!(debug_assertions) {
        "enabled"
    } else {
        "disabled"
    }
);
/// Generate the host errno header or implementation from `errno -l`
#[derive(Debug, Clone, Parser)]
#[command(name = "hosterrno", version, long_version = LONG_VERSION)]
pub struct Cli {
    /// which file to generate
    pub kind: FileKind,
    /// directory containing the inc/ and src/ trees [env: HOSTERRNO_ROOT] [default: .]
    #[arg(short = 'C', long)]
    pub root: Option<PathBuf>,
    /// command that lists the host's error codes [env: HOSTERRNO_COMMAND] [default: errno -l]
    #[arg(long, value_name = "CMD")]
    pub errno_command: Option<String>,
    /// read a captured listing instead of running a command
    #[arg(long, value_name = "FILE", conflicts_with = "errno_command")]
    pub listing: Option<PathBuf>,
    /// report where the table came from and where the file went
    #[arg(short, long)]
    pub verbose: bool,
    /// print timings
    #[arg(long)]
    pub timings: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit(pub i32);
impl std::fmt::Display for Exit {
    fn fmt(&self, _f: &mut std::fmt::Formatter) -> std::fmt::Result {
        Ok(())
    }
}
impl std::error::Error for Exit {}

pub fn usage(program: &str) -> String {
    HostErrnoError::Usage {
        program: program.to_string(),
    }
    .to_string()
}

/// Parse `args` (including the program name) and run.
/// Bad arguments print the usage line on stdout and fail with the usage exit code, before anything is read or written.
pub fn run<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = args.into_iter().map(Into::into).collect::<Vec<OsString>>();
    let program = args
        .first()
        .map_or_else(|| "hosterrno".to_string(), |p| p.to_string_lossy().into_owned());
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            let usage = HostErrnoError::Usage { program };
            println!("{usage}");
            let msg = err.to_string();
            let reason = msg.lines().next().unwrap_or_default();
            error!("{}", reason.strip_prefix("error: ").unwrap_or(reason));
            return Err(Exit(usage.exit_code()).into());
        }
    };
    driver(cli)
}

pub fn driver(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(&cli);
    let mut reporter = Reporter::new(config.timings);
    let result = config.table_source().and_then(|source| {
        let mut progress = RunProgress {
            verbose: config.verbose,
            reporter: &mut reporter,
        };
        generate_with(source.as_ref(), &config.root, config.kind, &mut progress)
    });
    match result {
        Ok(path) => {
            if config.verbose {
                note!("wrote {} to {}", config.kind, path.display());
            }
            reporter.finish();
            Ok(())
        }
        Err(err) => {
            reporter.print();
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            Err(Exit(code).into())
        }
    }
}

/// Feeds the timings reporter and prints the verbose and duplicate-symbol notes
struct RunProgress<'a> {
    verbose: bool,
    reporter: &'a mut Reporter,
}
impl Progress for RunProgress<'_> {
    fn loaded(&mut self, source: &dyn TableSource, table: &ErrorTable, took: Duration) {
        self.reporter.load_time = Some(took);
        self.reporter.rows = table.len();
        if self.verbose {
            note!("read {} rows from `{}`", table.len(), source.describe());
        }
        for (symbol, count) in table.duplicate_symbols() {
            warning!(
                "`{symbol}` appears {count} times in the error table; every row is emitted and {STRERROR_FUNCTION} returns the first description"
            );
        }
    }
    fn rendered(&mut self, contents: &str, took: Duration) {
        self.reporter.render_time = Some(took);
        self.reporter.bytes = contents.len();
    }
    fn written(&mut self, _path: &Path, took: Duration) {
        self.reporter.write_time = Some(took);
    }
}

pub mod prelude {
    pub use super::{driver, run, Cli, Exit};
    pub use clap::Parser as _;
}
