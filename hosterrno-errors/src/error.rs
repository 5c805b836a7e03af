use miette::{Diagnostic, SourceSpan};
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

/// What was wrong with a row of the error listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDefect {
    /// the line has no tokens at all
    MissingSymbol,
    /// the line has a symbol but nothing after it
    MissingValue,
    /// the second token isn't a base-10 integer
    InvalidValue,
}
impl Display for RowDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingSymbol => "expected an error symbol",
            Self::MissingValue => "expected a numeric value after the symbol",
            Self::InvalidValue => "value is not a base-10 integer",
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum HostErrnoError {
    #[error("usage: {program} <h | c>")]
    #[diagnostic(
        code(hosterrno::usage),
        help("pass `h` to generate the header or `c` to generate the implementation")
    )]
    Usage { program: String },

    #[error("couldn't read the error table from `{origin}`: {reason}")]
    #[diagnostic(
        code(hosterrno::source_unavailable),
        help("the `errno` utility ships with moreutils; a captured listing can be passed with --listing")
    )]
    SourceUnavailable {
        origin: String,
        reason: Cow<'static, str>,
    },

    #[error("malformed row on line {line_no} of the error table")]
    #[diagnostic(
        code(hosterrno::malformed_row),
        help("rows must have the form `<SYMBOL> <VALUE> [description...]`")
    )]
    MalformedRow {
        line_no: usize,
        defect: RowDefect,
        #[source_code]
        line: String,
        #[label("{defect}")]
        loc: SourceSpan,
    },

    #[error("couldn't write {}: {reason}", .path.display())]
    #[diagnostic(code(hosterrno::destination_unwritable))]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        reason: std::io::Error,
    },
}
impl HostErrnoError {
    pub fn unavailable<O: Into<String>, R: Into<Cow<'static, str>>>(origin: O, reason: R) -> Self {
        Self::SourceUnavailable {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
    /// `span` is a byte range into `line`
    pub fn malformed_row(line_no: usize, line: &str, defect: RowDefect, span: Range<usize>) -> Self {
        Self::MalformedRow {
            line_no,
            defect,
            line: line.to_string(),
            loc: span.into(),
        }
    }
    /// Process exit status for this kind of failure
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 1,
            Self::SourceUnavailable { .. } => 2,
            Self::MalformedRow { .. } => 3,
            Self::DestinationUnwritable { .. } => 4,
        }
    }
}
