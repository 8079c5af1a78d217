//! Export configuration.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Immutable configuration for one export run.
///
/// All flags are independent. Defaults match the portal upload use
/// case: witnesses, media and repository references on, obscuration
/// and archive packaging off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Emit `ASSO` witness/godparent links derived from event
    /// back-references.
    pub include_witnesses: bool,
    /// Emit `OBJE` media blocks.
    pub include_media: bool,
    /// Write media file references as basenames instead of full paths.
    pub relative_media_paths: bool,
    /// Write the first repository reference of each source.
    pub include_repository_in_source: bool,
    /// Replace the portal brand name in source titles and drop
    /// publication info.
    pub obscure_portal_brand_in_titles: bool,
    /// Precede `QUAY` lines with a human-readable quality note.
    pub annotate_citation_quality: bool,
    /// Copy referenced media files into a sidecar zip archive.
    pub package_media_as_archive: bool,
    /// Render `NAME` values without the slash surname delimiters, the
    /// way the portal displays them.
    pub use_portal_name_beautify: bool,
    /// Two-letter locale code driving the header `LANG` line.
    pub locale: Option<String>,
    /// Pinned header timestamp; `None` uses the wall clock.
    #[serde(skip)]
    pub export_time: Option<NaiveDateTime>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_witnesses: true,
            include_media: true,
            relative_media_paths: false,
            include_repository_in_source: true,
            obscure_portal_brand_in_titles: false,
            annotate_citation_quality: true,
            package_media_as_archive: false,
            use_portal_name_beautify: false,
            locale: None,
            export_time: None,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_witnesses(mut self, enable: bool) -> Self {
        self.include_witnesses = enable;
        self
    }

    #[must_use]
    pub fn with_media(mut self, enable: bool) -> Self {
        self.include_media = enable;
        self
    }

    #[must_use]
    pub fn with_relative_media_paths(mut self, enable: bool) -> Self {
        self.relative_media_paths = enable;
        self
    }

    #[must_use]
    pub fn with_repository_in_source(mut self, enable: bool) -> Self {
        self.include_repository_in_source = enable;
        self
    }

    #[must_use]
    pub fn with_obscured_titles(mut self, enable: bool) -> Self {
        self.obscure_portal_brand_in_titles = enable;
        self
    }

    #[must_use]
    pub fn with_quality_annotations(mut self, enable: bool) -> Self {
        self.annotate_citation_quality = enable;
        self
    }

    #[must_use]
    pub fn with_media_archive(mut self, enable: bool) -> Self {
        self.package_media_as_archive = enable;
        self
    }

    #[must_use]
    pub fn with_portal_name_beautify(mut self, enable: bool) -> Self {
        self.use_portal_name_beautify = enable;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_export_time(mut self, time: NaiveDateTime) -> Self {
        self.export_time = Some(time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_portal_upload_profile() {
        let options = ExportOptions::default();
        assert!(options.include_witnesses);
        assert!(options.include_media);
        assert!(!options.relative_media_paths);
        assert!(options.include_repository_in_source);
        assert!(!options.obscure_portal_brand_in_titles);
        assert!(options.annotate_citation_quality);
        assert!(!options.package_media_as_archive);
        assert!(!options.use_portal_name_beautify);
    }
}
