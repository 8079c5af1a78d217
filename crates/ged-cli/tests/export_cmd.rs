//! End-to-end export runs driven through the command layer.

use ged_cli::cli::{Cli, Command};
use ged_cli::commands::run_export;

use clap::Parser;

const SNAPSHOT: &str = r#"{
    "meta": { "researcher": "Jeanne Durand" },
    "people": [
        {
            "handle": "p1",
            "id": "I1",
            "gender": "male",
            "name": { "first": "Jean", "surnames": [{ "surname": "Dupont" }] },
            "event_refs": [{ "event": "e1", "role": "primary" }]
        },
        {
            "handle": "p2",
            "id": "I2",
            "gender": "female",
            "name": { "first": "Marie", "surnames": [{ "surname": "Martin" }] },
            "event_refs": [{ "event": "e1", "role": { "custom": "Marraine" } }]
        }
    ],
    "events": [
        {
            "handle": "e1",
            "kind": "baptism",
            "date": { "ymd": { "year": 1901, "month": 1, "day": 3 } }
        }
    ]
}"#;

fn parse_export(extra: &[&str]) -> ged_cli::cli::ExportArgs {
    let mut argv = vec!["ged-export", "export", "tree.json"];
    argv.extend_from_slice(extra);
    let cli = Cli::parse_from(argv);
    match cli.command {
        Command::Export(args) => args,
        _ => panic!("expected export subcommand"),
    }
}

#[test]
fn exports_godparent_link_from_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("tree.json");
    std::fs::write(&snapshot, SNAPSHOT).unwrap();

    let mut args = parse_export(&["--locale", "fr"]);
    args.snapshot = snapshot;
    let run = run_export(&args).unwrap();

    let text = std::fs::read_to_string(&run.output).unwrap();
    assert!(text.contains("1 LANG French\n"));
    assert!(text.contains("0 @SUBM@ SUBM\n1 NAME Jeanne Durand\n"));
    assert!(text.contains("1 BAPM\n2 DATE 3 JAN 1901\n1 ASSO @I2@\n2 TYPE INDI\n2 RELA Godmother\n"));
    assert!(run.summary.diagnostics.is_empty());
    assert_eq!(run.summary.people, 2);
}

#[test]
fn no_witnesses_flag_reaches_the_export() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("tree.json");
    std::fs::write(&snapshot, SNAPSHOT).unwrap();

    let mut args = parse_export(&["--no-witnesses"]);
    args.snapshot = snapshot;
    let run = run_export(&args).unwrap();

    let text = std::fs::read_to_string(&run.output).unwrap();
    assert!(!text.contains("ASSO"));
}

#[test]
fn missing_snapshot_is_an_error() {
    let mut args = parse_export(&[]);
    args.snapshot = "/nonexistent/tree.json".into();
    let error = run_export(&args).unwrap_err();
    assert!(error.to_string().contains("load snapshot"));
}
