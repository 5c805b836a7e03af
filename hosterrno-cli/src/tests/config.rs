use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("hosterrno").chain(args.iter().copied())).unwrap()
}

fn no_env(_: &str) -> Option<OsString> {
    None
}

#[test]
fn test_defaults() {
    let config = Config::resolve_with(&parse(&["h"]), no_env);
    assert_eq!(
        config,
        Config {
            kind: ArtifactKind::Declarations,
            root: PathBuf::from("."),
            source: SourceConfig::Command(DEFAULT_COMMAND.to_string()),
            verbose: false,
            timings: false,
        }
    );
}

#[test]
fn test_environment() {
    let env = |var: &str| match var {
        ROOT_VAR => Some(OsString::from("/tmp/out")),
        COMMAND_VAR => Some(OsString::from("errno --list")),
        _ => None,
    };
    let config = Config::resolve_with(&parse(&["c"]), env);
    assert_eq!(config.root, PathBuf::from("/tmp/out"));
    assert_eq!(config.source, SourceConfig::Command("errno --list".to_string()));

    let empty = |_: &str| Some(OsString::new());
    let config = Config::resolve_with(&parse(&["c"]), empty);
    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(config.source, SourceConfig::Command(DEFAULT_COMMAND.to_string()));
}

#[test]
fn test_flags_beat_environment() {
    let env = |var: &str| match var {
        ROOT_VAR => Some(OsString::from("/tmp/out")),
        COMMAND_VAR => Some(OsString::from("errno --list")),
        _ => None,
    };
    let cli = parse(&["h", "-C", "build", "--errno-command", "cat errno.txt", "-v"]);
    let config = Config::resolve_with(&cli, env);
    assert_eq!(config.root, PathBuf::from("build"));
    assert_eq!(config.source, SourceConfig::Command("cat errno.txt".to_string()));
    assert!(config.verbose);

    let cli = parse(&["h", "--listing", "errno.txt"]);
    let config = Config::resolve_with(&cli, env);
    assert_eq!(config.source, SourceConfig::Listing(PathBuf::from("errno.txt")));
}

#[test]
fn test_table_sources() {
    let mut config = Config::resolve_with(&parse(&["h"]), no_env);
    assert_eq!(config.table_source().unwrap().describe(), "errno -l");

    config.source = SourceConfig::Listing(PathBuf::from("errno.txt"));
    assert_eq!(config.table_source().unwrap().describe(), "errno.txt");

    config.source = SourceConfig::Command("   ".to_string());
    assert!(matches!(
        config.table_source(),
        Err(HostErrnoError::SourceUnavailable { .. })
    ));
}
