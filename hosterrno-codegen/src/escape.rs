use std::fmt::{self, Display, Formatter, Write};

/// Displays a string as a double-quoted C string literal.
///
/// Backslash, double quote, `\n`, `\r` and `\t` get their usual escapes, a `?` that follows another `?` is
/// written as `\?` so no trigraph can form, and other ASCII control characters become three-digit octal
/// escapes. Everything else, non-ASCII included, passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CLiteral<'a>(pub &'a str);
impl Display for CLiteral<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        let mut prev = None;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '?' if prev == Some('?') => f.write_str("\\?")?,
                c if c.is_ascii_control() => write!(f, "\\{:03o}", c as u32)?,
                c => f.write_char(c)?,
            }
            prev = Some(c);
        }
        f.write_char('"')
    }
}

pub fn c_string_literal(text: &str) -> String {
    CLiteral(text).to_string()
}
