//! Subcommand implementations.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use ged_export::{ExportOptions, ExportSummary, export_file};
use ged_model::InMemoryDatabase;
use tracing::{info, info_span};

use crate::cli::{ExportArgs, InspectArgs};
use crate::summary::apply_table_style;

/// Result of one `export` invocation, for summary printing.
#[derive(Debug)]
pub struct ExportRun {
    pub output: PathBuf,
    pub archive: Option<PathBuf>,
    pub summary: ExportSummary,
}

pub fn run_export(args: &ExportArgs) -> Result<ExportRun> {
    let span = info_span!("export", snapshot = %args.snapshot.display());
    let _guard = span.enter();

    let db = InMemoryDatabase::load(&args.snapshot)
        .with_context(|| format!("load snapshot {}", args.snapshot.display()))?;
    let counts = db.counts();
    info!(
        people = counts.people,
        families = counts.families,
        events = counts.events,
        "snapshot loaded"
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.snapshot.with_extension("ged"));
    let options = export_options(args);
    let summary = export_file(&db, &output, &options)
        .with_context(|| format!("write {}", output.display()))?;

    let archive = (options.package_media_as_archive && options.include_media).then(|| {
        let mut path = OsString::from(output.as_os_str());
        path.push(".zip");
        PathBuf::from(path)
    });
    Ok(ExportRun {
        output,
        archive,
        summary,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let db = InMemoryDatabase::load(&args.snapshot)
        .with_context(|| format!("load snapshot {}", args.snapshot.display()))?;
    let counts = db.counts();

    let mut table = Table::new();
    table.set_header(vec!["Entity", "Count"]);
    apply_table_style(&mut table);
    for (label, count) in [
        ("People", counts.people),
        ("Families", counts.families),
        ("Events", counts.events),
        ("Sources", counts.sources),
        ("Citations", counts.citations),
        ("Repositories", counts.repositories),
        ("Notes", counts.notes),
        ("Media", counts.media),
    ] {
        table.add_row(vec![label.to_string(), count.to_string()]);
    }
    println!("{table}");
    Ok(())
}

fn export_options(args: &ExportArgs) -> ExportOptions {
    let mut options = ExportOptions::default()
        .with_witnesses(!args.no_witnesses)
        .with_media(!args.no_media)
        .with_relative_media_paths(args.relative_paths)
        .with_repository_in_source(!args.no_repository)
        .with_obscured_titles(args.obscure_titles)
        .with_quality_annotations(!args.no_quality_notes)
        .with_media_archive(args.archive);
    options.use_portal_name_beautify = args.beautify_names;
    options.locale = args.locale.clone();
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_args(snapshot: PathBuf) -> ExportArgs {
        ExportArgs {
            snapshot,
            output: None,
            no_witnesses: false,
            no_media: false,
            relative_paths: false,
            no_repository: false,
            obscure_titles: false,
            no_quality_notes: false,
            archive: false,
            beautify_names: false,
            locale: None,
        }
    }

    #[test]
    fn flags_invert_into_options() {
        let mut args = export_args(PathBuf::from("tree.json"));
        args.no_witnesses = true;
        args.no_quality_notes = true;
        args.locale = Some("fr".to_string());
        let options = export_options(&args);
        assert!(!options.include_witnesses);
        assert!(!options.annotate_citation_quality);
        assert!(options.include_media);
        assert_eq!(options.locale.as_deref(), Some("fr"));
    }

    #[test]
    fn default_output_swaps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("tree.json");
        std::fs::write(&snapshot, r#"{ "people": [{ "handle": "p1", "id": "I1" }] }"#).unwrap();

        let run = run_export(&export_args(snapshot)).unwrap();
        assert_eq!(run.output, dir.path().join("tree.ged"));
        assert!(run.archive.is_none());
        assert_eq!(run.summary.people, 1);
        let text = std::fs::read_to_string(&run.output).unwrap();
        assert!(text.contains("0 @I1@ INDI"));
        assert!(text.ends_with("0 TRLR\n"));
    }
}
