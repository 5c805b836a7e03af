use super::*;
use std::ffi::OsString;
use std::fs;

/// Sibling path the artifact is staged at before being renamed into place
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to `root/<kind's relative path>`, creating directories as needed.
///
/// The file is staged next to its destination and renamed over it, so the destination either keeps its old
/// contents or gets all of the new ones.
pub fn write_artifact(
    root: &Path,
    kind: ArtifactKind,
    contents: &str,
) -> Result<PathBuf, HostErrnoError> {
    let path = root.join(kind.relative_path());
    let unwritable = |reason: std::io::Error| HostErrnoError::DestinationUnwritable {
        path: path.clone(),
        reason,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(unwritable)?;
    }
    let staged = staging_path(&path);
    if let Err(err) = fs::write(&staged, contents).and_then(|()| fs::rename(&staged, &path)) {
        let _ = fs::remove_file(&staged);
        return Err(unwritable(err));
    }
    Ok(path)
}
