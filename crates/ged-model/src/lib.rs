//! Genealogical data model shared by the GEDCOM export pipeline.
//!
//! Entities are read-only snapshot views; the exporter never mutates
//! the database. The [`Database`] trait abstracts the store so the
//! export core can be tested against [`InMemoryDatabase`] fixtures.

pub mod database;
pub mod date;
pub mod enums;
pub mod error;
pub mod ids;
pub mod records;

pub use database::{Database, InMemoryDatabase, Snapshot, SnapshotCounts, SnapshotMeta};
pub use date::{DateValue, month_abbrev};
pub use enums::{
    AttributeKind, Confidence, EntityKind, EventKind, EventRole, FamilyRelation, Gender, NameKind,
    NoteKind,
};
pub use error::{DbError, Result};
pub use ids::Handle;
pub use records::{
    Attribute, Citation, Event, EventRef, Family, Media, MediaRef, Name, Note, Person, RepoRef,
    Repository, Source, Surname,
};
