//! Colored status lines on stderr.

#[doc(hidden)]
#[macro_export]
macro_rules! tagged {
    ($tag:literal, $color:expr, $($toks:tt)*) => {{
        use std::io::Write;
        use $crate::termcolor::{StandardStream, ColorChoice, ColorSpec, WriteColor};
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some($color)).set_bold(true));
        let _ = write!(stderr, $tag);
        let _ = stderr.reset();
        let _ = write!(stderr, ": ");
        let _ = writeln!(stderr, $($toks)*);
    }}
}
#[macro_export]
macro_rules! error {
    ($($toks:tt)*) => {$crate::tagged!("error", $crate::termcolor::Color::Red, $($toks)*)}
}
#[macro_export]
macro_rules! warning {
    ($($toks:tt)*) => {$crate::tagged!("warning", $crate::termcolor::Color::Yellow, $($toks)*)}
}
#[macro_export]
macro_rules! note {
    ($($toks:tt)*) => {$crate::tagged!("note", $crate::termcolor::Color::Cyan, $($toks)*)}
}
