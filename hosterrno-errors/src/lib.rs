pub use miette::{self, SourceSpan};
pub use termcolor;
pub mod color;
pub mod error;
pub use error::*;
