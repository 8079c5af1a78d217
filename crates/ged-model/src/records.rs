//! Entity records as read-only snapshot views.
//!
//! Every struct here is a plain data carrier deserialized from the
//! database snapshot. All list fields default to empty so sparse
//! snapshots stay readable.

use serde::{Deserialize, Serialize};

use crate::date::DateValue;
use crate::enums::{
    AttributeKind, Confidence, EventKind, EventRole, FamilyRelation, Gender, NameKind, NoteKind,
};
use crate::ids::Handle;

/// One surname part: optional nobiliary prefix, the surname itself,
/// and an optional connector joining it to the next part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surname {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub connector: String,
}

impl Surname {
    pub fn simple(surname: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            ..Self::default()
        }
    }
}

/// A personal name, primary or alternate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub surnames: Vec<Surname>,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub kind: NameKind,
    #[serde(default)]
    pub notes: Vec<Handle>,
    #[serde(default)]
    pub citations: Vec<Handle>,
}

/// A typed attribute on a person or family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub kind: AttributeKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub notes: Vec<Handle>,
    #[serde(default)]
    pub citations: Vec<Handle>,
}

impl Attribute {
    pub fn new(kind: AttributeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            notes: Vec::new(),
            citations: Vec::new(),
        }
    }
}

/// A person's or family's link to an event, carrying the role played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRef {
    pub event: Handle,
    pub role: EventRole,
    #[serde(default)]
    pub notes: Vec<Handle>,
}

impl EventRef {
    pub fn new(event: impl Into<Handle>, role: EventRole) -> Self {
        Self {
            event: event.into(),
            role,
            notes: Vec::new(),
        }
    }
}

/// Reference from a record to a media object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub media: Handle,
    #[serde(default)]
    pub notes: Vec<Handle>,
}

/// An individual.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    pub handle: Handle,
    /// Externally visible record id (`I1`), the GEDCOM xref.
    pub id: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub alternate_names: Vec<Name>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub event_refs: Vec<EventRef>,
    /// Families this person belongs to as a child (`FAMC`).
    #[serde(default)]
    pub child_of: Vec<Handle>,
    /// Families this person belongs to as a spouse/parent (`FAMS`).
    #[serde(default)]
    pub spouse_in: Vec<Handle>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub notes: Vec<Handle>,
    #[serde(default)]
    pub citations: Vec<Handle>,
    #[serde(default)]
    pub private: bool,
    /// Unix timestamp of the last modification (`CHAN`).
    #[serde(default)]
    pub change_time: i64,
}

/// A family unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Family {
    pub handle: Handle,
    pub id: String,
    #[serde(default)]
    pub father: Option<Handle>,
    #[serde(default)]
    pub mother: Option<Handle>,
    #[serde(default)]
    pub children: Vec<Handle>,
    #[serde(default)]
    pub relation: FamilyRelation,
    #[serde(default)]
    pub event_refs: Vec<EventRef>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub notes: Vec<Handle>,
    #[serde(default)]
    pub citations: Vec<Handle>,
    #[serde(default)]
    pub change_time: i64,
}

/// An event, shared by every person or family referencing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub handle: Handle,
    pub kind: EventKind,
    #[serde(default)]
    pub date: Option<DateValue>,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub citations: Vec<Handle>,
    #[serde(default)]
    pub notes: Vec<Handle>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

impl Event {
    pub fn new(handle: impl Into<Handle>, kind: EventKind) -> Self {
        Self {
            handle: handle.into(),
            kind,
            date: None,
            place: String::new(),
            description: String::new(),
            citations: Vec::new(),
            notes: Vec::new(),
            media: Vec::new(),
        }
    }
}

/// Reference from a source to a repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoRef {
    pub repository: Handle,
    #[serde(default)]
    pub call_number: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub notes: Vec<Handle>,
}

/// A source record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    pub handle: Handle,
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publication_info: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub repo_refs: Vec<RepoRef>,
    #[serde(default)]
    pub notes: Vec<Handle>,
    #[serde(default)]
    pub change_time: i64,
}

/// A citation of a source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Citation {
    pub handle: Handle,
    pub source: Handle,
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub date: Option<DateValue>,
    #[serde(default)]
    pub notes: Vec<Handle>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A repository record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    pub handle: Handle,
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Vec<String>,
    #[serde(default)]
    pub notes: Vec<Handle>,
    #[serde(default)]
    pub change_time: i64,
}

/// A note record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Note {
    pub handle: Handle,
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub kind: NoteKind,
}

/// A media object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Media {
    pub handle: Handle,
    pub id: String,
    /// Absolute path, or relative to the database media base.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Vec<Handle>,
}
