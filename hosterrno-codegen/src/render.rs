use super::*;
use hosterrno_table::{ErrorTableEntry, UNKNOWN_ERROR};

/// Kept outside `CONSTANT_PREFIX` so no table symbol can collide with it
pub const INCLUDE_GUARD: &str = "WAEIO_HOST_ERRNO_H";
pub const CONSTANT_PREFIX: &str = "HOST_";
pub const ERRNO_VARIABLE: &str = "host_errno";
pub const STRERROR_FUNCTION: &str = "host_strerror";

/// Name of the `#define` generated for `entry`
pub fn constant_name(entry: &ErrorTableEntry) -> String {
    format!("{CONSTANT_PREFIX}{}", entry.symbol)
}

/// Emitted above the constants; values are re-printed in decimal rather than copied from the listing
pub const VALUES_NOTE: &str = "/* values in decimal as listed by the host; negative values are parenthesized */";

/// Negative values are parenthesized so the macro expands safely anywhere
struct Value(i64);
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The header: guard, `<stdint.h>`, `extern int32_t host_errno;`, one `#define` per row in table order, and
/// the `host_strerror` prototype. Rows that share a symbol are all emitted.
#[derive(Debug, Clone, Copy)]
pub struct Declarations<'a>(pub &'a ErrorTable);
impl Display for Declarations<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "#ifndef {INCLUDE_GUARD}")?;
        writeln!(f, "#define {INCLUDE_GUARD}")?;
        writeln!(f)?;
        writeln!(f, "#include <stdint.h>")?;
        writeln!(f)?;
        writeln!(f, "extern int32_t {ERRNO_VARIABLE};")?;
        writeln!(f)?;
        if !self.0.is_empty() {
            writeln!(f, "{VALUES_NOTE}")?;
            for entry in self.0 {
                writeln!(f, "#define {} {}", constant_name(entry), Value(entry.value))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "const char* {STRERROR_FUNCTION}(int32_t);")?;
        writeln!(f)?;
        writeln!(f, "#endif /* {INCLUDE_GUARD} */")
    }
}

/// The implementation: `host_errno` storage and a `host_strerror` that tests each constant in table order and
/// returns the first matching description.
#[derive(Debug, Clone, Copy)]
pub struct Definitions<'a>(pub &'a ErrorTable);
impl Display for Definitions<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "#include <{}>", ArtifactKind::Declarations.logical_name())?;
        writeln!(f)?;
        writeln!(f, "int32_t {ERRNO_VARIABLE} = 0;")?;
        writeln!(f)?;
        writeln!(f, "const char* {STRERROR_FUNCTION}(int32_t e) {{")?;
        // a chain of ifs, not a switch: aliased values must stay legal and keep first-match order
        for entry in self.0 {
            writeln!(
                f,
                "  if (e == {}) return {};",
                constant_name(entry),
                CLiteral(&entry.description)
            )?;
        }
        writeln!(f, "  return {};", CLiteral(UNKNOWN_ERROR))?;
        writeln!(f, "}}")
    }
}

pub fn render_declarations(table: &ErrorTable) -> String {
    Declarations(table).to_string()
}
pub fn render_definitions(table: &ErrorTable) -> String {
    Definitions(table).to_string()
}
