use super::*;
use hosterrno_codegen::{render_declarations, render_definitions};
use hosterrno_table::parse_table;

const LISTING: &str = "\
EPERM 1 Operation not permitted
ENOENT 2 No such file or directory
EAGAIN 11 Resource temporarily unavailable
EWOULDBLOCK 11 Resource temporarily unavailable
";

#[test]
fn test_header_from_listing() {
    let root = scratch_dir("header");
    let listing = temp_file::with_contents(LISTING.as_bytes());
    let listing = listing.path().to_str().unwrap();
    run(args(&root, &["h", "--listing", listing])).unwrap();
    let header = std::fs::read_to_string(root.join("inc/host/errno.h")).unwrap();
    assert_eq!(header, render_declarations(&parse_table(LISTING).unwrap()));
    assert!(!root.join("src").exists());
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn test_source_from_listing() {
    let root = scratch_dir("source");
    let listing = temp_file::with_contents(LISTING.as_bytes());
    let listing = listing.path().to_str().unwrap();
    run(args(&root, &["c", "--listing", listing, "--timings", "-v"])).unwrap();
    let source = std::fs::read_to_string(root.join("src/host/errno.c")).unwrap();
    assert_eq!(source, render_definitions(&parse_table(LISTING).unwrap()));
    assert!(!root.join("inc").exists());
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn test_same_table_same_output() {
    let root = scratch_dir("repeat");
    let listing = temp_file::with_contents(LISTING.as_bytes());
    let listing = listing.path().to_str().unwrap();
    let path = root.join("src/host/errno.c");
    run(args(&root, &["c", "--listing", listing])).unwrap();
    let first = std::fs::read(&path).unwrap();
    run(args(&root, &["c", "--listing", listing])).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), first);
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn test_malformed_listing_writes_nothing() {
    let root = scratch_dir("malformed");
    let listing = temp_file::with_contents(b"EPERM 1 Operation not permitted\nEFOO\n");
    let listing = listing.path().to_str().unwrap();
    assert_eq!(exit_code(run(args(&root, &["h", "--listing", listing]))), Some(3));
    assert!(!root.exists());
}

#[test]
fn test_empty_listing() {
    let root = scratch_dir("empty");
    let listing = temp_file::empty();
    let listing = listing.path().to_str().unwrap();
    run(args(&root, &["h", "--listing", listing])).unwrap();
    run(args(&root, &["c", "--listing", listing])).unwrap();
    let header = std::fs::read_to_string(root.join("inc/host/errno.h")).unwrap();
    let source = std::fs::read_to_string(root.join("src/host/errno.c")).unwrap();
    assert!(!header.contains("#define HOST_"));
    assert!(header.contains("const char* host_strerror(int32_t);"));
    assert!(source.contains("const char* host_strerror(int32_t e) {\n  return \"UNKNOWN ERROR\";\n}"));
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn test_missing_listing_command() {
    let root = scratch_dir("missing-command");
    let result = run(args(
        &root,
        &["h", "--errno-command", "hosterrno-no-such-program-anywhere -l"],
    ));
    assert_eq!(exit_code(result), Some(2));
    assert!(!root.exists());
}

#[test]
fn test_unwritable_root() {
    let root = scratch_dir("unwritable");
    std::fs::write(&root, "not a directory").unwrap();
    let listing = temp_file::with_contents(LISTING.as_bytes());
    let listing = listing.path().to_str().unwrap();
    assert_eq!(exit_code(run(args(&root, &["c", "--listing", listing]))), Some(4));
    let _ = std::fs::remove_file(&root);
}

#[cfg(unix)]
#[test]
fn test_listing_command() {
    let root = scratch_dir("command");
    run(args(
        &root,
        &["c", "--errno-command", "echo EPERM 1 Operation not permitted"],
    ))
    .unwrap();
    let source = std::fs::read_to_string(root.join("src/host/errno.c")).unwrap();
    assert!(source.contains("  if (e == HOST_EPERM) return \"Operation not permitted\";\n"));
    let _ = std::fs::remove_dir_all(&root);
}
