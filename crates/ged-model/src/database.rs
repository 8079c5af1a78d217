//! The read-only database contract and the in-memory snapshot store.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::error::{DbError, Result};
use crate::ids::Handle;
use crate::records::{Citation, Event, Family, Media, Note, Person, Repository, Source};

/// Read-only lookup surface of the genealogical store.
///
/// Lookups return `Ok(None)` for dangling handles; only genuine store
/// failures produce `Err`. Handle enumeration order is not guaranteed
/// stable across stores; callers sort by record id when determinism
/// matters. Reverse-reference enumeration order, however, is surfaced
/// as-is because the consuming portal depends on it.
pub trait Database {
    fn person(&self, handle: &Handle) -> Result<Option<Person>>;
    fn family(&self, handle: &Handle) -> Result<Option<Family>>;
    fn event(&self, handle: &Handle) -> Result<Option<Event>>;
    fn source(&self, handle: &Handle) -> Result<Option<Source>>;
    fn citation(&self, handle: &Handle) -> Result<Option<Citation>>;
    fn repository(&self, handle: &Handle) -> Result<Option<Repository>>;
    fn note(&self, handle: &Handle) -> Result<Option<Note>>;
    fn media(&self, handle: &Handle) -> Result<Option<Media>>;

    fn person_handles(&self) -> Result<Vec<Handle>>;
    fn family_handles(&self) -> Result<Vec<Handle>>;
    fn source_handles(&self) -> Result<Vec<Handle>>;
    fn repository_handles(&self) -> Result<Vec<Handle>>;
    fn note_handles(&self) -> Result<Vec<Handle>>;

    /// Handles of entities of `kind` that hold a reference to `target`.
    fn find_backlinks(&self, target: &Handle, kind: EntityKind) -> Result<Vec<Handle>>;

    /// Configured researcher name, if any.
    fn researcher(&self) -> Result<Option<String>>;

    /// Base directory for resolving relative media paths.
    fn media_base(&self) -> Result<Option<PathBuf>>;
}

/// Snapshot metadata (researcher, media base directory).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotMeta {
    #[serde(default)]
    pub researcher: Option<String>,
    #[serde(default)]
    pub media_base: Option<PathBuf>,
}

/// Serialized form of a whole database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub meta: SnapshotMeta,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub families: Vec<Family>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub media: Vec<Media>,
}

/// In-memory database backed by a deserialized [`Snapshot`].
///
/// Handle enumeration and backlink enumeration follow snapshot order,
/// which makes repeated exports of the same snapshot byte-stable.
pub struct InMemoryDatabase {
    meta: SnapshotMeta,
    people: Vec<Person>,
    families: Vec<Family>,
    events: Vec<Event>,
    sources: Vec<Source>,
    citations: Vec<Citation>,
    repositories: Vec<Repository>,
    notes: Vec<Note>,
    media: Vec<Media>,
    person_index: HashMap<Handle, usize>,
    family_index: HashMap<Handle, usize>,
    event_index: HashMap<Handle, usize>,
    source_index: HashMap<Handle, usize>,
    citation_index: HashMap<Handle, usize>,
    repository_index: HashMap<Handle, usize>,
    note_index: HashMap<Handle, usize>,
    media_index: HashMap<Handle, usize>,
    /// target handle -> referencing (kind, handle) pairs, in snapshot order.
    backlinks: HashMap<Handle, Vec<(EntityKind, Handle)>>,
}

impl InMemoryDatabase {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut backlinks: HashMap<Handle, Vec<(EntityKind, Handle)>> = HashMap::new();
        for person in &snapshot.people {
            for event_ref in &person.event_refs {
                backlinks
                    .entry(event_ref.event.clone())
                    .or_default()
                    .push((EntityKind::Person, person.handle.clone()));
            }
        }
        for family in &snapshot.families {
            for event_ref in &family.event_refs {
                backlinks
                    .entry(event_ref.event.clone())
                    .or_default()
                    .push((EntityKind::Family, family.handle.clone()));
            }
        }

        Self {
            person_index: index_by_handle(snapshot.people.iter().map(|p| &p.handle)),
            family_index: index_by_handle(snapshot.families.iter().map(|f| &f.handle)),
            event_index: index_by_handle(snapshot.events.iter().map(|e| &e.handle)),
            source_index: index_by_handle(snapshot.sources.iter().map(|s| &s.handle)),
            citation_index: index_by_handle(snapshot.citations.iter().map(|c| &c.handle)),
            repository_index: index_by_handle(snapshot.repositories.iter().map(|r| &r.handle)),
            note_index: index_by_handle(snapshot.notes.iter().map(|n| &n.handle)),
            media_index: index_by_handle(snapshot.media.iter().map(|m| &m.handle)),
            backlinks,
            meta: snapshot.meta,
            people: snapshot.people,
            families: snapshot.families,
            events: snapshot.events,
            sources: snapshot.sources,
            citations: snapshot.citations,
            repositories: snapshot.repositories,
            notes: snapshot.notes,
            media: snapshot.media,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(json).map_err(|e| DbError::Snapshot(e.to_string()))?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| DbError::Snapshot(format!("{}: {e}", path.display())))?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DbError::Snapshot(format!("{}: {e}", path.display())))?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn counts(&self) -> SnapshotCounts {
        SnapshotCounts {
            people: self.people.len(),
            families: self.families.len(),
            events: self.events.len(),
            sources: self.sources.len(),
            citations: self.citations.len(),
            repositories: self.repositories.len(),
            notes: self.notes.len(),
            media: self.media.len(),
        }
    }
}

/// Record counts per entity kind, for run summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotCounts {
    pub people: usize,
    pub families: usize,
    pub events: usize,
    pub sources: usize,
    pub citations: usize,
    pub repositories: usize,
    pub notes: usize,
    pub media: usize,
}

fn index_by_handle<'a>(handles: impl Iterator<Item = &'a Handle>) -> HashMap<Handle, usize> {
    handles
        .enumerate()
        .map(|(index, handle)| (handle.clone(), index))
        .collect()
}

impl Database for InMemoryDatabase {
    fn person(&self, handle: &Handle) -> Result<Option<Person>> {
        Ok(self
            .person_index
            .get(handle)
            .map(|&i| self.people[i].clone()))
    }

    fn family(&self, handle: &Handle) -> Result<Option<Family>> {
        Ok(self
            .family_index
            .get(handle)
            .map(|&i| self.families[i].clone()))
    }

    fn event(&self, handle: &Handle) -> Result<Option<Event>> {
        Ok(self
            .event_index
            .get(handle)
            .map(|&i| self.events[i].clone()))
    }

    fn source(&self, handle: &Handle) -> Result<Option<Source>> {
        Ok(self
            .source_index
            .get(handle)
            .map(|&i| self.sources[i].clone()))
    }

    fn citation(&self, handle: &Handle) -> Result<Option<Citation>> {
        Ok(self
            .citation_index
            .get(handle)
            .map(|&i| self.citations[i].clone()))
    }

    fn repository(&self, handle: &Handle) -> Result<Option<Repository>> {
        Ok(self
            .repository_index
            .get(handle)
            .map(|&i| self.repositories[i].clone()))
    }

    fn note(&self, handle: &Handle) -> Result<Option<Note>> {
        Ok(self.note_index.get(handle).map(|&i| self.notes[i].clone()))
    }

    fn media(&self, handle: &Handle) -> Result<Option<Media>> {
        Ok(self.media_index.get(handle).map(|&i| self.media[i].clone()))
    }

    fn person_handles(&self) -> Result<Vec<Handle>> {
        Ok(self.people.iter().map(|p| p.handle.clone()).collect())
    }

    fn family_handles(&self) -> Result<Vec<Handle>> {
        Ok(self.families.iter().map(|f| f.handle.clone()).collect())
    }

    fn source_handles(&self) -> Result<Vec<Handle>> {
        Ok(self.sources.iter().map(|s| s.handle.clone()).collect())
    }

    fn repository_handles(&self) -> Result<Vec<Handle>> {
        Ok(self.repositories.iter().map(|r| r.handle.clone()).collect())
    }

    fn note_handles(&self) -> Result<Vec<Handle>> {
        Ok(self.notes.iter().map(|n| n.handle.clone()).collect())
    }

    fn find_backlinks(&self, target: &Handle, kind: EntityKind) -> Result<Vec<Handle>> {
        Ok(self
            .backlinks
            .get(target)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(entry_kind, _)| *entry_kind == kind)
                    .map(|(_, handle)| handle.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn researcher(&self) -> Result<Option<String>> {
        Ok(self.meta.researcher.clone())
    }

    fn media_base(&self) -> Result<Option<PathBuf>> {
        Ok(self.meta.media_base.clone())
    }
}
