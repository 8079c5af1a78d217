//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ged-export",
    version,
    about = "Export a genealogy snapshot to GEDCOM 5.5.1",
    long_about = "Export a genealogy database snapshot to GEDCOM 5.5.1.\n\n\
                  Writes witness and godparent ASSO links, privacy markers and\n\
                  cohabitation tags the Geneanet portal understands, with an\n\
                  optional zip archive holding the referenced media files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export a snapshot to a GEDCOM file.
    Export(ExportArgs),

    /// Show record counts for a snapshot without exporting.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the database snapshot (JSON).
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Output GEDCOM file (default: <SNAPSHOT> with a .ged extension).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip ASSO witness and godparent links.
    #[arg(long = "no-witnesses")]
    pub no_witnesses: bool,

    /// Skip OBJE media blocks.
    #[arg(long = "no-media")]
    pub no_media: bool,

    /// Reference media files by basename instead of full path.
    ///
    /// Use together with --archive when the receiving system resolves
    /// files against an uploaded archive rather than this machine.
    #[arg(long = "relative-paths")]
    pub relative_paths: bool,

    /// Skip repository references inside source records.
    #[arg(long = "no-repository")]
    pub no_repository: bool,

    /// Hide the portal brand in source titles and drop publication info.
    #[arg(long = "obscure-titles")]
    pub obscure_titles: bool,

    /// Skip the human-readable quality notes next to QUAY lines.
    #[arg(long = "no-quality-notes")]
    pub no_quality_notes: bool,

    /// Copy referenced media files into a sidecar <output>.zip archive.
    #[arg(long = "archive")]
    pub archive: bool,

    /// Render names without the slash surname delimiters, portal style.
    #[arg(long = "beautify-names")]
    pub beautify_names: bool,

    /// Two-letter locale code for the header LANG line (fr, de, ...).
    #[arg(long = "locale", value_name = "CODE")]
    pub locale: Option<String>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the database snapshot (JSON).
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_flags_parse() {
        let cli = Cli::parse_from([
            "ged-export",
            "export",
            "tree.json",
            "--archive",
            "--relative-paths",
            "--locale",
            "fr",
        ]);
        let Command::Export(args) = cli.command else {
            panic!("expected export subcommand");
        };
        assert!(args.archive);
        assert!(args.relative_paths);
        assert_eq!(args.locale.as_deref(), Some("fr"));
        assert!(!args.no_witnesses);
    }
}
