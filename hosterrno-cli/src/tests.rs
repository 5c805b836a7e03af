use super::*;
use std::path::Path;
mod config;
mod generate;

/// Exit status carried by a failed run, if it failed with one
fn exit_code(result: anyhow::Result<()>) -> Option<i32> {
    result.err()?.downcast::<Exit>().ok().map(|Exit(code)| code)
}

/// Fresh, empty directory for one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hosterrno-cli-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn args(dir: &Path, rest: &[&str]) -> Vec<OsString> {
    let mut args = vec![OsString::from("hosterrno")];
    args.extend(rest.iter().map(OsString::from));
    args.push("-C".into());
    args.push(dir.into());
    args
}
