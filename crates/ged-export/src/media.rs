//! Media form mapping, path resolution and the sidecar archive.

use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{ExportError, Result};

/// GEDCOM `FORM` value for a MIME type. Unmapped types pass through
/// verbatim.
pub fn gedcom_form(mime: &str) -> &str {
    match mime {
        "image/bmp" => "bmp",
        "image/gif" => "gif",
        "image/jpeg" => "jpeg",
        "image/x-pcx" => "pcx",
        "image/tiff" => "tiff",
        "audio/x-wav" => "wav",
        other => other,
    }
}

/// Resolve a media path against the database media base directory.
/// Absolute paths are kept as-is.
pub fn resolve_media_path(path: &str, base: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match base {
        Some(base) => base.join(path),
        None => path.to_path_buf(),
    }
}

/// Express a resolved path relative to the media base directory,
/// keeping any subdirectories. Paths outside the base pass through
/// unchanged.
pub fn relativize_media_path(path: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) => path
            .strip_prefix(base)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf),
        None => path.to_path_buf(),
    }
}

/// Sidecar zip archive collecting referenced media files.
///
/// Entries are stored under their path relative to the media base, so
/// same-named files in different subdirectories do not collide; a file
/// referenced from several records is packed once.
pub struct MediaArchive {
    path: PathBuf,
    writer: ZipWriter<File>,
    names: BTreeSet<String>,
    packed: usize,
}

impl MediaArchive {
    pub fn create(path: PathBuf) -> Result<Self> {
        let file = File::create(&path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            writer: ZipWriter::new(file),
            names: BTreeSet::new(),
            packed: 0,
        })
    }

    /// Copy one file into the archive under `name`. Returns `false`
    /// when that entry was already packed.
    pub fn add_file(&mut self, file_path: &Path, name: &str) -> Result<bool> {
        let name = name.trim_start_matches('/').to_string();
        if name.is_empty() || !self.names.insert(name.clone()) {
            return Ok(false);
        }

        let mut input = File::open(file_path).map_err(|source| ExportError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;
        self.writer
            .start_file(name.as_str(), SimpleFileOptions::default())
            .map_err(|source| ExportError::Archive {
                path: self.path.clone(),
                source,
            })?;
        io::copy(&mut input, &mut self.writer).map_err(|source| ExportError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.packed += 1;
        Ok(true)
    }

    pub fn packed(&self) -> usize {
        self.packed
    }

    pub fn finish(self) -> Result<()> {
        let path = self.path;
        self.writer
            .finish()
            .map_err(|source| ExportError::Archive { path, source })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn maps_known_mime_types() {
        assert_eq!(gedcom_form("image/jpeg"), "jpeg");
        assert_eq!(gedcom_form("audio/x-wav"), "wav");
    }

    #[test]
    fn unknown_mime_passes_through() {
        assert_eq!(gedcom_form("application/pdf"), "application/pdf");
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let resolved = resolve_media_path("img/a.jpg", Some(Path::new("/data")));
        assert_eq!(resolved, PathBuf::from("/data/img/a.jpg"));
    }

    #[test]
    fn absolute_paths_ignore_base() {
        let resolved = resolve_media_path("/tmp/a.jpg", Some(Path::new("/data")));
        assert_eq!(resolved, PathBuf::from("/tmp/a.jpg"));
    }

    #[test]
    fn archive_packs_each_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let media = dir.path().join("portrait.jpg");
        std::fs::write(&media, b"not really a jpeg").unwrap();
        let archive_path = dir.path().join("out.ged.zip");

        let mut archive = MediaArchive::create(archive_path.clone()).unwrap();
        assert!(archive.add_file(&media, "portrait.jpg").unwrap());
        assert!(!archive.add_file(&media, "portrait.jpg").unwrap());
        assert_eq!(archive.packed(), 1);
        archive.finish().unwrap();

        let file = File::open(&archive_path).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        assert_eq!(zip.len(), 1);
        let mut entry = zip.by_name("portrait.jpg").unwrap();
        let mut contents = String::new();
        entry.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "not really a jpeg");
    }

    #[test]
    fn same_basename_in_different_directories_keeps_both() {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["a", "b"] {
            std::fs::create_dir(dir.path().join(sub)).unwrap();
            std::fs::write(dir.path().join(sub).join("portrait.jpg"), sub).unwrap();
        }
        let archive_path = dir.path().join("out.ged.zip");

        let mut archive = MediaArchive::create(archive_path.clone()).unwrap();
        assert!(
            archive
                .add_file(&dir.path().join("a/portrait.jpg"), "a/portrait.jpg")
                .unwrap()
        );
        assert!(
            archive
                .add_file(&dir.path().join("b/portrait.jpg"), "b/portrait.jpg")
                .unwrap()
        );
        assert_eq!(archive.packed(), 2);
        archive.finish().unwrap();

        let file = File::open(&archive_path).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        assert_eq!(zip.len(), 2);
        assert!(zip.by_name("a/portrait.jpg").is_ok());
        assert!(zip.by_name("b/portrait.jpg").is_ok());
    }

    #[test]
    fn relativize_strips_the_base_and_keeps_subdirectories() {
        let relative = relativize_media_path(Path::new("/data/img/a.jpg"), Some(Path::new("/data")));
        assert_eq!(relative, PathBuf::from("img/a.jpg"));
        let outside = relativize_media_path(Path::new("/elsewhere/a.jpg"), Some(Path::new("/data")));
        assert_eq!(outside, PathBuf::from("/elsewhere/a.jpg"));
    }
}
