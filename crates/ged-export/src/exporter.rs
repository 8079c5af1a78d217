//! The export orchestrator.
//!
//! Owns one export run end to end: header, submitter, individuals,
//! families, sources, repositories, notes, trailer, in that fixed
//! order, plus the optional media sidecar archive. All conditional
//! logic lives here; the line writer is injected, not subclassed.

use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike};
use ged_model::{
    Database, Event, EventRole, Family, Handle, MediaRef, Person, RepoRef, month_abbrev,
};
use ged_writer::GedcomWriter;
use tracing::info;

use crate::associates::resolve_associates;
use crate::attrs::{AttributeDisposition, map_attribute};
use crate::citations::{PAGE_LIMIT, citation_event_pair, obscure_title, truncate_page};
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::error::{ExportError, Result};
use crate::header::{GENERATOR_VERSION, SOURCE_ID, language_name};
use crate::media::{MediaArchive, gedcom_form, relativize_media_path, resolve_media_path};
use crate::name::format_name;
use crate::options::ExportOptions;

const MEDIA_FILE_LIMIT: usize = 255;
const SUBMITTER_XREF: &str = "SUBM";

/// Outcome of a completed export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub people: usize,
    pub families: usize,
    pub sources: usize,
    pub repositories: usize,
    pub notes: usize,
    pub media_packed: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Export a database to a GEDCOM file at `path`.
///
/// With media packaging enabled, a sidecar `<path>.zip` archive is
/// written next to the output. On failure the partially written file
/// is left in place; the caller decides whether to discard it.
pub fn export_file<D: Database + ?Sized>(
    db: &D,
    path: &Path,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let archive = if options.package_media_as_archive && options.include_media {
        let mut zip_path = OsString::from(path.as_os_str());
        zip_path.push(".zip");
        Some(MediaArchive::create(PathBuf::from(zip_path))?)
    } else {
        None
    };
    let filename = path.to_string_lossy().into_owned();
    let exporter = GedcomExporter::new(db, file, options.clone(), filename, archive)?;
    let (_, summary) = exporter.run()?;
    info!(
        people = summary.people,
        families = summary.families,
        sources = summary.sources,
        diagnostics = summary.diagnostics.len(),
        "export finished"
    );
    Ok(summary)
}

/// Export into any byte sink; no archive is produced. Returns the sink
/// together with the summary.
pub fn export_to_writer<D: Database + ?Sized, W: Write>(
    db: &D,
    out: W,
    options: &ExportOptions,
    filename: &str,
) -> Result<(W, ExportSummary)> {
    let exporter = GedcomExporter::new(db, out, options.clone(), filename.to_string(), None)?;
    let (writer, summary) = exporter.run()?;
    Ok((writer.into_inner()?, summary))
}

/// Export into an in-memory buffer, for tests and previews.
pub fn export_to_vec<D: Database + ?Sized>(
    db: &D,
    options: &ExportOptions,
) -> Result<(Vec<u8>, ExportSummary)> {
    export_to_writer(db, Vec::new(), options, "export.ged")
}

struct GedcomExporter<'a, D: ?Sized, W: Write> {
    db: &'a D,
    options: ExportOptions,
    writer: GedcomWriter<W>,
    archive: Option<MediaArchive>,
    diagnostics: Diagnostics,
    media_base: Option<PathBuf>,
    filename: String,
    summary: ExportSummary,
}

impl<'a, D: Database + ?Sized, W: Write> GedcomExporter<'a, D, W> {
    fn new(
        db: &'a D,
        out: W,
        options: ExportOptions,
        filename: String,
        archive: Option<MediaArchive>,
    ) -> Result<Self> {
        let media_base = db.media_base()?;
        Ok(Self {
            db,
            options,
            writer: GedcomWriter::new(out),
            archive,
            diagnostics: Diagnostics::new(),
            media_base,
            filename,
            summary: ExportSummary::default(),
        })
    }

    fn run(mut self) -> Result<(GedcomWriter<W>, ExportSummary)> {
        self.header()?;
        self.submitter()?;
        self.individuals()?;
        self.families()?;
        self.sources()?;
        self.repositories()?;
        self.notes()?;
        self.writer.writeln(0, "TRLR", None)?;
        self.writer.flush()?;

        if let Some(archive) = self.archive.take() {
            self.summary.media_packed = archive.packed();
            archive.finish()?;
        }
        self.summary.diagnostics = std::mem::take(&mut self.diagnostics).into_entries();
        Ok((self.writer, self.summary))
    }

    // --- header & submitter -------------------------------------------------

    fn header(&mut self) -> Result<()> {
        let now: NaiveDateTime = self
            .options
            .export_time
            .unwrap_or_else(|| Local::now().naive_local());

        self.writer.writeln(0, "HEAD", None)?;
        self.writer.writeln(1, "SOUR", Some(SOURCE_ID))?;
        self.writer.writeln(2, "VERS", Some(GENERATOR_VERSION))?;
        self.writer.writeln(2, "NAME", Some(SOURCE_ID))?;
        self.writer
            .writeln(1, "DATE", Some(&gedcom_date(now.date())))?;
        self.writer.writeln(
            2,
            "TIME",
            Some(&format!(
                "{:02}:{:02}:{:02}",
                now.hour(),
                now.minute(),
                now.second()
            )),
        )?;
        self.writer
            .writeln(1, "SUBM", Some(&format!("@{SUBMITTER_XREF}@")))?;

        if self.options.relative_media_paths {
            let basename = Path::new(&self.filename)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.filename.clone());
            self.writer.writeln(1, "FILE2", Some(&basename))?;
        } else {
            let filename = self.filename.clone();
            self.writer.writeln(1, "FILE", Some(&filename))?;
        }

        let researcher = self.db.researcher()?.unwrap_or_default();
        self.writer.writeln(
            1,
            "COPR",
            Some(&format!("Copyright (c) {} {researcher}.", now.year())),
        )?;
        self.writer.writeln(1, "GEDC", None)?;
        self.writer.writeln(2, "VERS", Some("5.5.1"))?;
        self.writer.writeln(2, "FORM", Some("LINEAGE-LINKED"))?;
        self.writer.writeln(1, "CHAR", Some("UTF-8"))?;

        if let Some(language) = self
            .options
            .locale
            .as_deref()
            .and_then(language_name)
        {
            self.writer.writeln(1, "LANG", Some(language))?;
        }
        Ok(())
    }

    fn submitter(&mut self) -> Result<()> {
        let name = self
            .db
            .researcher()?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        self.writer.record(SUBMITTER_XREF, "SUBM")?;
        self.writer.writeln(1, "NAME", Some(&name))?;
        Ok(())
    }

    // --- individuals --------------------------------------------------------

    fn individuals(&mut self) -> Result<()> {
        let handles = self.db.person_handles()?;
        let sorted = self.sorted_by_id(handles, "person", |db, handle| {
            Ok(db.person(handle)?.map(|person| person.id))
        })?;
        for (_, handle) in sorted {
            if let Some(person) = self.db.person(&handle)? {
                self.person(&person)?;
                self.summary.people += 1;
            }
        }
        Ok(())
    }

    fn person(&mut self, person: &Person) -> Result<()> {
        self.writer.record(&person.id, "INDI")?;
        self.person_name(person, &person.name, true)?;
        for name in &person.alternate_names {
            self.person_name(person, name, false)?;
        }
        self.writer
            .writeln(1, "SEX", Some(person.gender.sex_code()))?;

        for event_ref in &person.event_refs {
            if event_ref.role != EventRole::Primary {
                continue;
            }
            let Some(event) = self.db.event(&event_ref.event)? else {
                self.diagnostics.record(
                    DiagnosticKind::DanglingHandle,
                    format!("event {} on person {} not found", event_ref.event, person.id),
                );
                continue;
            };
            self.person_event(person, &event)?;
        }

        self.attributes(person.private, &person.attributes)?;

        for family in &person.child_of {
            self.family_pointer(family, "FAMC")?;
        }
        for family in &person.spouse_in {
            self.family_pointer(family, "FAMS")?;
        }

        self.photos(&person.media, 1)?;
        self.citation_references(&person.citations, 1)?;
        self.note_references(&person.notes, 1)?;
        self.change(person.change_time, 1)?;
        Ok(())
    }

    fn person_name(&mut self, person: &Person, name: &ged_model::Name, primary: bool) -> Result<()> {
        // the nickname attribute fallback only applies to the primary name
        let attributes: &[ged_model::Attribute] = if primary { &person.attributes } else { &[] };
        let fields = format_name(
            name,
            attributes,
            self.options.use_portal_name_beautify,
            &mut self.diagnostics,
        );
        self.writer.writeln(1, "NAME", Some(&fields.display))?;
        if let Some(type_value) = &fields.type_value {
            self.writer.writeln(2, "TYPE", Some(type_value))?;
        }
        for (tag, value) in [
            ("GIVN", &fields.given),
            ("SPFX", &fields.surname_prefix),
            ("SURN", &fields.surname),
            ("NSFX", &fields.suffix),
            ("NPFX", &fields.title),
            ("NICK", &fields.nickname),
        ] {
            if !value.is_empty() {
                self.writer.writeln(2, tag, Some(value))?;
            }
        }
        self.citation_references(&name.citations, 2)?;
        self.note_references(&name.notes, 2)?;
        Ok(())
    }

    fn person_event(&mut self, person: &Person, event: &Event) -> Result<()> {
        self.event_body(event)?;
        if self.options.include_witnesses {
            self.associates(event, Some(&person.handle))?;
        }
        Ok(())
    }

    fn event_body(&mut self, event: &Event) -> Result<()> {
        let description = (!event.description.is_empty()).then_some(event.description.as_str());
        match event.kind.gedcom_tag() {
            Some(tag) => self.writer.writeln(1, tag, description)?,
            None => {
                self.writer.writeln(1, "EVEN", description)?;
                self.writer.writeln(2, "TYPE", Some(event.kind.as_str()))?;
            }
        }
        if let Some(date) = &event.date {
            self.writer.write_date(2, date)?;
        }
        if !event.place.is_empty() {
            self.writer.writeln(2, "PLAC", Some(&event.place))?;
        }
        self.citation_references(&event.citations, 2)?;
        self.note_references(&event.notes, 2)?;
        self.photos(&event.media, 2)?;
        Ok(())
    }

    fn associates(&mut self, event: &Event, primary: Option<&Handle>) -> Result<()> {
        let associates = resolve_associates(self.db, event, primary, &mut self.diagnostics)?;
        for associate in associates {
            let level = associate.relationship.level();
            self.writer
                .writeln(level, "ASSO", Some(&format!("@{}@", associate.person_id)))?;
            self.writer.writeln(level + 1, "TYPE", Some("INDI"))?;
            self.writer
                .writeln(level + 1, "RELA", Some(associate.relationship.label()))?;
            self.note_references(&associate.notes, level + 1)?;
        }
        Ok(())
    }

    fn attributes(&mut self, private: bool, attributes: &[ged_model::Attribute]) -> Result<()> {
        if private {
            self.writer.writeln(1, "_PRIV", None)?;
        }
        for attribute in attributes {
            let disposition = map_attribute(attribute);
            match &disposition {
                AttributeDisposition::Identifier { tag, value } => {
                    self.writer.writeln(1, tag, Some(value))?;
                }
                AttributeDisposition::Restriction => {
                    self.writer.writeln(1, "RESN", None)?;
                }
                AttributeDisposition::Standard { tag, value } => {
                    self.writer.writeln(1, tag, Some(value))?;
                }
                AttributeDisposition::Fact { value, type_key } => {
                    self.writer.writeln(1, "FACT", Some(value))?;
                    self.writer.writeln(2, "TYPE", Some(type_key))?;
                }
                AttributeDisposition::Skip => continue,
            }
            if disposition.carries_references() {
                self.note_references(&attribute.notes, 2)?;
                self.citation_references(&attribute.citations, 2)?;
            }
        }
        Ok(())
    }

    fn family_pointer(&mut self, family: &Handle, tag: &str) -> Result<()> {
        let Some(family) = self.db.family(family)? else {
            self.diagnostics.record(
                DiagnosticKind::DanglingHandle,
                format!("family {family} referenced by {tag} link not found"),
            );
            return Ok(());
        };
        self.writer
            .writeln(1, tag, Some(&format!("@{}@", family.id)))?;
        Ok(())
    }

    // --- families -----------------------------------------------------------

    fn families(&mut self) -> Result<()> {
        let handles = self.db.family_handles()?;
        let sorted = self.sorted_by_id(handles, "family", |db, handle| {
            Ok(db.family(handle)?.map(|family| family.id))
        })?;
        for (_, handle) in sorted {
            if let Some(family) = self.db.family(&handle)? {
                self.family(&family)?;
                self.summary.families += 1;
            }
        }
        Ok(())
    }

    fn family(&mut self, family: &Family) -> Result<()> {
        self.writer.record(&family.id, "FAM")?;
        if let Some(father) = &family.father {
            self.person_pointer(father, "HUSB")?;
        }
        if let Some(mother) = &family.mother {
            self.person_pointer(mother, "WIFE")?;
        }
        for child in &family.children {
            self.person_pointer(child, "CHIL")?;
        }

        for event_ref in &family.event_refs {
            if event_ref.role != EventRole::Primary {
                continue;
            }
            let Some(event) = self.db.event(&event_ref.event)? else {
                self.diagnostics.record(
                    DiagnosticKind::DanglingHandle,
                    format!("event {} on family {} not found", event_ref.event, family.id),
                );
                continue;
            };
            self.event_body(&event)?;
            if self.options.include_witnesses {
                self.associates(&event, None)?;
            }
        }
        if family.relation.is_cohabitation() {
            self.writer.writeln(1, "_UST", Some("COHABITATION"))?;
        }

        self.attributes(false, &family.attributes)?;
        self.photos(&family.media, 1)?;
        self.citation_references(&family.citations, 1)?;
        self.note_references(&family.notes, 1)?;
        self.change(family.change_time, 1)?;
        Ok(())
    }

    fn person_pointer(&mut self, person: &Handle, tag: &str) -> Result<()> {
        let Some(person) = self.db.person(person)? else {
            self.diagnostics.record(
                DiagnosticKind::DanglingHandle,
                format!("person {person} referenced by {tag} link not found"),
            );
            return Ok(());
        };
        self.writer
            .writeln(1, tag, Some(&format!("@{}@", person.id)))?;
        Ok(())
    }

    // --- sources ------------------------------------------------------------

    fn sources(&mut self) -> Result<()> {
        let handles = self.db.source_handles()?;
        let sorted = self.sorted_by_id(handles, "source", |db, handle| {
            Ok(db.source(handle)?.map(|source| source.id))
        })?;
        for (_, handle) in sorted {
            let Some(source) = self.db.source(&handle)? else {
                continue;
            };
            self.writer.record(&source.id, "SOUR")?;
            if !source.title.is_empty() {
                let title = if self.options.obscure_portal_brand_in_titles {
                    obscure_title(&source.title)
                } else {
                    source.title.clone()
                };
                self.writer.writeln(1, "TITL", Some(&title))?;
            }
            if !source.author.is_empty() {
                self.writer.writeln(1, "AUTH", Some(&source.author))?;
            }
            if !source.publication_info.is_empty() && !self.options.obscure_portal_brand_in_titles {
                self.writer
                    .writeln(1, "PUBL", Some(&source.publication_info))?;
            }
            if !source.abbreviation.is_empty() {
                self.writer.writeln(1, "ABBR", Some(&source.abbreviation))?;
            }
            self.photos(&source.media, 1)?;
            if self.options.include_repository_in_source {
                // single-value simplification: only the first reference
                if let Some(repo_ref) = source.repo_refs.first() {
                    self.repository_reference(repo_ref, 1)?;
                }
            }
            self.note_references(&source.notes, 1)?;
            self.change(source.change_time, 1)?;
            self.summary.sources += 1;
        }
        Ok(())
    }

    fn repository_reference(&mut self, repo_ref: &RepoRef, level: u8) -> Result<()> {
        let Some(repository) = self.db.repository(&repo_ref.repository)? else {
            self.diagnostics.record(
                DiagnosticKind::DanglingHandle,
                format!("repository {} not found", repo_ref.repository),
            );
            return Ok(());
        };
        self.writer
            .writeln(level, "REPO", Some(&format!("@{}@", repository.id)))?;
        if !repo_ref.call_number.is_empty() {
            self.writer
                .writeln(level + 1, "CALN", Some(&repo_ref.call_number))?;
            if !repo_ref.media_type.is_empty() {
                self.writer
                    .writeln(level + 2, "MEDI", Some(&repo_ref.media_type))?;
            }
        }
        self.note_references(&repo_ref.notes, level + 1)?;
        Ok(())
    }

    // --- repositories & notes -----------------------------------------------

    fn repositories(&mut self) -> Result<()> {
        let handles = self.db.repository_handles()?;
        let sorted = self.sorted_by_id(handles, "repository", |db, handle| {
            Ok(db.repository(handle)?.map(|repository| repository.id))
        })?;
        for (_, handle) in sorted {
            let Some(repository) = self.db.repository(&handle)? else {
                continue;
            };
            self.writer.record(&repository.id, "REPO")?;
            if !repository.name.is_empty() {
                self.writer.writeln(1, "NAME", Some(&repository.name))?;
            }
            if !repository.address.is_empty() {
                self.writer
                    .writeln(1, "ADDR", Some(&repository.address.join("\n")))?;
            }
            self.note_references(&repository.notes, 1)?;
            self.change(repository.change_time, 1)?;
            self.summary.repositories += 1;
        }
        Ok(())
    }

    fn notes(&mut self) -> Result<()> {
        let handles = self.db.note_handles()?;
        let sorted = self.sorted_by_id(handles, "note", |db, handle| {
            Ok(db.note(handle)?.map(|note| note.id))
        })?;
        for (_, handle) in sorted {
            let Some(note) = self.db.note(&handle)? else {
                continue;
            };
            self.writer
                .record_value(&note.id, "NOTE", Some(&note.text))?;
            self.summary.notes += 1;
        }
        Ok(())
    }

    // --- shared fragments ---------------------------------------------------

    fn note_references(&mut self, notes: &[Handle], level: u8) -> Result<()> {
        for handle in notes {
            let Some(note) = self.db.note(handle)? else {
                self.diagnostics.record(
                    DiagnosticKind::DanglingHandle,
                    format!("note {handle} not found"),
                );
                continue;
            };
            self.writer
                .writeln(level, "NOTE", Some(&format!("@{}@", note.id)))?;
        }
        Ok(())
    }

    fn citation_references(&mut self, citations: &[Handle], level: u8) -> Result<()> {
        for handle in citations {
            self.citation(handle, level)?;
        }
        Ok(())
    }

    fn citation(&mut self, handle: &Handle, level: u8) -> Result<()> {
        let Some(citation) = self.db.citation(handle)? else {
            self.diagnostics.record(
                DiagnosticKind::DanglingHandle,
                format!("citation {handle} not found"),
            );
            return Ok(());
        };
        let Some(source) = self.db.source(&citation.source)? else {
            self.diagnostics.record(
                DiagnosticKind::DanglingHandle,
                format!("source {} of citation {handle} not found", citation.source),
            );
            return Ok(());
        };

        self.writer
            .writeln(level, "SOUR", Some(&format!("@{}@", source.id)))?;
        if !citation.page.is_empty() {
            self.writer.writeln_limited(
                level + 1,
                "PAGE",
                Some(truncate_page(&citation.page)),
                PAGE_LIMIT,
            )?;
        }
        if let Some(confidence) = citation.confidence {
            if self.options.annotate_citation_quality {
                self.writer.writeln(
                    level + 1,
                    "NOTE",
                    Some(&format!("Quality: {}", confidence.as_str())),
                )?;
            }
            self.writer
                .writeln(level + 1, "QUAY", Some(confidence.quay_code()))?;
        }

        let mut source_text = None;
        let mut other_notes = Vec::new();
        for note_handle in &citation.notes {
            let Some(note) = self.db.note(note_handle)? else {
                self.diagnostics.record(
                    DiagnosticKind::DanglingHandle,
                    format!("note {note_handle} on citation {handle} not found"),
                );
                continue;
            };
            if source_text.is_none() && note.kind == ged_model::NoteKind::SourceText {
                source_text = Some(note.text);
            } else {
                other_notes.push(note_handle.clone());
            }
        }
        if source_text.is_some() || citation.date.is_some() {
            self.writer.writeln(level + 1, "DATA", None)?;
            if let Some(date) = &citation.date {
                self.writer.write_date(level + 2, date)?;
            }
            if let Some(text) = &source_text {
                self.writer.writeln(level + 2, "TEXT", Some(text))?;
            }
        }
        self.photos(&citation.media, level + 1)?;
        self.note_references(&other_notes, level + 1)?;
        // the event/role qualifier closes the citation structure
        if let Some((event, role)) = citation_event_pair(&citation.attributes) {
            self.writer.writeln(level + 1, "EVEN", Some(&event))?;
            if let Some(role) = role {
                self.writer.writeln(level + 2, "ROLE", Some(&role))?;
            }
        }
        Ok(())
    }

    fn photos(&mut self, media_refs: &[MediaRef], level: u8) -> Result<()> {
        if !self.options.include_media {
            return Ok(());
        }
        for media_ref in media_refs {
            let Some(media) = self.db.media(&media_ref.media)? else {
                self.diagnostics.record(
                    DiagnosticKind::DanglingHandle,
                    format!("media {} not found", media_ref.media),
                );
                continue;
            };
            let resolved = resolve_media_path(&media.path, self.media_base.as_deref());
            if !resolved.is_file() {
                self.diagnostics.record(
                    DiagnosticKind::MissingMediaFile,
                    format!("{} does not exist, skipping", resolved.display()),
                );
                continue;
            }
            let relative = relativize_media_path(&resolved, self.media_base.as_deref());

            self.writer.writeln(level, "OBJE", None)?;
            let form = gedcom_form(&media.mime);
            if !form.is_empty() {
                self.writer.writeln(level + 1, "FORM", Some(form))?;
            }
            self.writer
                .writeln(level + 1, "TITL", Some(&media.description))?;
            let file_value = if self.options.relative_media_paths {
                relative.to_string_lossy()
            } else {
                resolved.to_string_lossy()
            };
            self.writer
                .writeln_limited(level + 1, "FILE", Some(&file_value), MEDIA_FILE_LIMIT)?;
            self.note_references(&media.notes, level + 1)?;
            if let Some(archive) = &mut self.archive {
                archive.add_file(&resolved, &relative.to_string_lossy())?;
            }
        }
        Ok(())
    }

    fn change(&mut self, change_time: i64, level: u8) -> Result<()> {
        if change_time <= 0 {
            return Ok(());
        }
        let Some(timestamp) = DateTime::from_timestamp(change_time, 0) else {
            return Ok(());
        };
        let timestamp = timestamp.naive_utc();
        self.writer.writeln(level, "CHAN", None)?;
        self.writer
            .writeln(level + 1, "DATE", Some(&gedcom_date(timestamp.date())))?;
        self.writer.writeln(
            level + 2,
            "TIME",
            Some(&format!(
                "{:02}:{:02}:{:02}",
                timestamp.hour(),
                timestamp.minute(),
                timestamp.second()
            )),
        )?;
        Ok(())
    }

    /// Pair handles with record ids and sort lexicographically by id.
    /// Dangling handles are dropped with a diagnostic.
    fn sorted_by_id<F>(
        &mut self,
        handles: Vec<Handle>,
        kind: &str,
        id_of: F,
    ) -> Result<Vec<(String, Handle)>>
    where
        F: Fn(&D, &Handle) -> ged_model::Result<Option<String>>,
    {
        let mut list = Vec::new();
        for handle in handles {
            match id_of(self.db, &handle)? {
                Some(id) => list.push((id, handle)),
                None => self.diagnostics.record(
                    DiagnosticKind::DanglingHandle,
                    format!("{kind} {handle} not found"),
                ),
            }
        }
        list.sort();
        Ok(list)
    }
}

/// Date in GEDCOM form: `3 JAN 1901`.
fn gedcom_date(date: chrono::NaiveDate) -> String {
    let month = month_abbrev(date.month() as u8).unwrap_or("JAN");
    format!("{} {} {}", date.day(), month, date.year())
}
