//! The host's error-code table: one row per errno symbol, in the order the
//! listing facility printed them.
use hosterrno_errors::{HostErrnoError, RowDefect};
use indexmap::IndexMap;
pub mod source;
pub use source::*;

/// Description returned by lookups that match no row
pub const UNKNOWN_ERROR: &str = "UNKNOWN ERROR";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorTableEntry {
    pub symbol: String,
    pub value: i64,
    pub description: String,
}
impl ErrorTableEntry {
    pub fn new<S: Into<String>, D: Into<String>>(symbol: S, value: i64, description: D) -> Self {
        Self {
            symbol: symbol.into(),
            value,
            description: description.into(),
        }
    }
}

/// Rows in listing order. Never sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTable(Vec<ErrorTableEntry>);
impl ErrorTable {
    pub fn new(entries: Vec<ErrorTableEntry>) -> Self {
        Self(entries)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn entries(&self) -> &[ErrorTableEntry] {
        &self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorTableEntry> {
        self.0.iter()
    }
    /// First row whose value is `value`.
    /// Rows sharing a value resolve to whichever came first in the listing, same as the generated `host_strerror`.
    pub fn lookup(&self, value: i64) -> Option<&ErrorTableEntry> {
        self.0.iter().find(|e| e.value == value)
    }
    /// Description for `value`, or [`UNKNOWN_ERROR`]
    pub fn strerror(&self, value: i64) -> &str {
        self.lookup(value)
            .map_or(UNKNOWN_ERROR, |e| e.description.as_str())
    }
    /// Symbols that appear on more than one row, with their counts, in first-seen order
    pub fn duplicate_symbols(&self) -> Vec<(&str, usize)> {
        let mut counts = IndexMap::<&str, usize>::new();
        for entry in &self.0 {
            *counts.entry(entry.symbol.as_str()).or_default() += 1;
        }
        counts.into_iter().filter(|&(_, n)| n > 1).collect()
    }
}
impl FromIterator<ErrorTableEntry> for ErrorTable {
    fn from_iter<I: IntoIterator<Item = ErrorTableEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl IntoIterator for ErrorTable {
    type Item = ErrorTableEntry;
    type IntoIter = std::vec::IntoIter<ErrorTableEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a ErrorTable {
    type Item = &'a ErrorTableEntry;
    type IntoIter = std::slice::Iter<'a, ErrorTableEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Whitespace-separated tokens of `line` with their byte offsets
fn tokens(line: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    let mut rest = line;
    let mut offset = 0;
    std::iter::from_fn(move || {
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            return None;
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let start = offset;
        offset += end;
        rest = &trimmed[end..];
        Some((start, &trimmed[..end]))
    })
}

/// Parse one line of `errno -l` output: `<SYMBOL> <VALUE> [description...]`.
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_row(line_no: usize, line: &str) -> Result<ErrorTableEntry, HostErrnoError> {
    let mut toks = tokens(line);
    let whole = 0..line.len();
    let Some((_, symbol)) = toks.next() else {
        return Err(HostErrnoError::malformed_row(line_no, line, RowDefect::MissingSymbol, whole));
    };
    let Some((start, num)) = toks.next() else {
        return Err(HostErrnoError::malformed_row(line_no, line, RowDefect::MissingValue, whole));
    };
    let value = num.parse::<i64>().map_err(|_| {
        HostErrnoError::malformed_row(line_no, line, RowDefect::InvalidValue, start..start + num.len())
    })?;
    let description = toks.map(|(_, t)| t).collect::<Vec<_>>().join(" ");
    Ok(ErrorTableEntry {
        symbol: symbol.to_string(),
        value,
        description,
    })
}

/// Parse a whole listing. The first bad row fails the entire table.
pub fn parse_table(text: &str) -> Result<ErrorTable, HostErrnoError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| parse_row(idx + 1, line))
        .collect()
}
