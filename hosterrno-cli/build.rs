use std::process::{Command, Output};
fn git_info() -> Option<(String, String)> {
    let Output { stdout, status, .. } = Command::new("git")
        .args(["rev-parse", "--short", "HEAD", "--abbrev-ref", "HEAD"])
        .output()
        .ok()?;
    if !status.success() {
        return None;
    }
    let info = String::from_utf8(stdout).ok()?;
    let (commit, branch) = info.trim().split_once('\n')?;
    Some((commit.to_string(), branch.to_string()))
}

fn main() {
    println!("cargo:rerun-if-changed=../.git");
    println!("cargo:rustc-check-cfg=cfg(has_git)");
    if let Some((commit, branch)) = git_info() {
        println!("cargo:rustc-env=GIT_BRANCH={branch}");
        println!("cargo:rustc-env=GIT_COMMIT={commit}");
        println!("cargo:rustc-cfg=has_git");
    } else {
        println!("cargo:rustc-env=GIT_BRANCH=<no git>");
        println!("cargo:rustc-env=GIT_COMMIT=<no git>");
    }
}
