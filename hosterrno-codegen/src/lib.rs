//! Renders the host errno bindings and writes them under an output root.
//!
//! Two artifacts are produced from the same [`ErrorTable`]:
//! - the declarations (`inc/host/errno.h`): `HOST_*` constants, `host_errno` and the `host_strerror` prototype
//! - the definitions (`src/host/errno.c`): storage for `host_errno` and the body of `host_strerror`
use hosterrno_errors::HostErrnoError;
use hosterrno_table::{ErrorTable, TableSource};
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
pub mod escape;
pub mod render;
pub mod write;
pub use escape::*;
pub use render::*;
pub use write::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Declarations,
    Definitions,
}
impl ArtifactKind {
    pub const ALL: [Self; 2] = [Self::Declarations, Self::Definitions];
    /// Name consumers use to include the file
    pub fn logical_name(self) -> &'static str {
        match self {
            Self::Declarations => "host/errno.h",
            Self::Definitions => "host/errno.c",
        }
    }
    /// Top-level directory under the output root
    pub fn directory(self) -> &'static str {
        match self {
            Self::Declarations => "inc",
            Self::Definitions => "src",
        }
    }
    pub fn relative_path(self) -> PathBuf {
        Path::new(self.directory()).join(self.logical_name())
    }
    pub fn render(self, table: &ErrorTable) -> String {
        match self {
            Self::Declarations => render_declarations(table),
            Self::Definitions => render_definitions(table),
        }
    }
}
impl Display for ArtifactKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Declarations => "declarations",
            Self::Definitions => "definitions",
        })
    }
}

/// Hooks called by [`generate_with`] after each stage completes, with the time that stage took
pub trait Progress {
    fn loaded(&mut self, _source: &dyn TableSource, _table: &ErrorTable, _took: Duration) {}
    fn rendered(&mut self, _contents: &str, _took: Duration) {}
    fn written(&mut self, _path: &Path, _took: Duration) {}
}
impl Progress for () {}

/// Load, render and write one artifact. Nothing is written unless the table loads.
pub fn generate(
    source: &dyn TableSource,
    root: &Path,
    kind: ArtifactKind,
) -> Result<PathBuf, HostErrnoError> {
    generate_with(source, root, kind, &mut ())
}

/// [`generate`], reporting each finished stage to `progress`
pub fn generate_with(
    source: &dyn TableSource,
    root: &Path,
    kind: ArtifactKind,
    progress: &mut dyn Progress,
) -> Result<PathBuf, HostErrnoError> {
    let start = Instant::now();
    let table = source.load()?;
    progress.loaded(source, &table, start.elapsed());
    let start = Instant::now();
    let contents = kind.render(&table);
    progress.rendered(&contents, start.elapsed());
    let start = Instant::now();
    let path = write_artifact(root, kind, &contents)?;
    progress.written(&path, start.elapsed());
    Ok(path)
}
