//! GEDCOM line emission.
//!
//! Writes `<level> <tag> [<value>]` lines, splitting over-length values
//! into `CONC` continuations and embedded newlines into `CONT` lines.

use std::io::{BufWriter, Write};

use ged_model::DateValue;

use crate::error::Result;

/// Default per-line value limit in characters.
pub const DEFAULT_LIMIT: usize = 255;

/// Line-oriented GEDCOM writer over any byte sink.
pub struct GedcomWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> GedcomWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            out: BufWriter::new(inner),
        }
    }

    /// Write one tagged line with the default value limit.
    pub fn writeln(&mut self, level: u8, tag: &str, value: Option<&str>) -> Result<()> {
        self.writeln_limited(level, tag, value, DEFAULT_LIMIT)
    }

    /// Write one tagged line, splitting the value at `limit` characters.
    ///
    /// Values holding newlines continue on `CONT` lines; over-length
    /// segments continue on `CONC` lines, one level deeper. Chunk
    /// boundaries avoid adjoining spaces where possible, since readers
    /// trim continuation values.
    pub fn writeln_limited(
        &mut self,
        level: u8,
        tag: &str,
        value: Option<&str>,
        limit: usize,
    ) -> Result<()> {
        let text = match value {
            None => {
                writeln!(self.out, "{level} {tag}")?;
                return Ok(());
            }
            Some(text) => text,
        };
        if text.is_empty() {
            writeln!(self.out, "{level} {tag}")?;
            return Ok(());
        }

        for (segment_index, segment) in text.split('\n').enumerate() {
            for (chunk_index, chunk) in split_for_conc(segment, limit).iter().enumerate() {
                let (line_level, line_tag) = match (segment_index, chunk_index) {
                    (0, 0) => (level, tag),
                    (_, 0) => (level + 1, "CONT"),
                    _ => (level + 1, "CONC"),
                };
                if chunk.is_empty() {
                    writeln!(self.out, "{line_level} {line_tag}")?;
                } else {
                    writeln!(self.out, "{line_level} {line_tag} {chunk}")?;
                }
            }
        }
        Ok(())
    }

    /// Write a level-0 record opener: `0 @xref@ TAG`.
    pub fn record(&mut self, xref: &str, tag: &str) -> Result<()> {
        writeln!(self.out, "0 @{xref}@ {tag}")?;
        Ok(())
    }

    /// Write a level-0 record opener carrying a value, as note records
    /// do. The value is split into `CONT`/`CONC` lines at level 1.
    pub fn record_value(&mut self, xref: &str, tag: &str, value: Option<&str>) -> Result<()> {
        let opener = format!("@{xref}@ {tag}");
        self.writeln(0, &opener, value)
    }

    /// Write a `DATE` line for a structured date value.
    pub fn write_date(&mut self, level: u8, date: &DateValue) -> Result<()> {
        self.writeln(level, "DATE", Some(&date.render()))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        Ok(self.out.into_inner().map_err(|e| e.into_error())?)
    }
}

/// Split one newline-free segment into chunks of at most `limit`
/// characters, preferring break points not adjacent to a space.
fn split_for_conc(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.chars().count() > limit {
        let mut break_at = rest
            .char_indices()
            .nth(limit)
            .map_or(rest.len(), |(index, _)| index);

        while break_at > 1 {
            let before = rest[..break_at].chars().next_back();
            let after = rest[break_at..].chars().next();
            if before != Some(' ') && after != Some(' ') {
                break;
            }
            break_at = rest[..break_at]
                .char_indices()
                .next_back()
                .map_or(0, |(index, _)| index);
        }
        if break_at == 0 {
            // Nothing but spaces before the limit; split hard.
            break_at = rest
                .char_indices()
                .nth(limit)
                .map_or(rest.len(), |(index, _)| index);
        }

        chunks.push(&rest[..break_at]);
        rest = &rest[break_at..];
    }
    chunks.push(rest);
    chunks
}
