//! Witness/associate resolution.
//!
//! For an event, finds every other person whose event-reference list
//! points back at it and classifies the relationship for `ASSO`
//! output. Emission order follows raw back-reference enumeration
//! order, a portal compatibility requirement.

use ged_model::{Database, DbError, Event, EventRole, Gender, Handle};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Classified relationship of an associate to the event subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Witness,
    Godfather,
    Godmother,
    /// Godparent of unknown gender.
    GodparentUnknown,
}

impl Relationship {
    /// `RELA` value.
    pub fn label(self) -> &'static str {
        match self {
            Relationship::Witness => "Witness",
            Relationship::Godfather => "Godfather",
            Relationship::Godmother => "Godmother",
            Relationship::GodparentUnknown => "Unknown",
        }
    }

    /// Nesting level of the `ASSO` line. Witnesses hang under the
    /// event; godparents are direct children of the person record.
    pub fn level(self) -> u8 {
        match self {
            Relationship::Witness => 2,
            Relationship::Godfather
            | Relationship::Godmother
            | Relationship::GodparentUnknown => 1,
        }
    }

    fn godparent(gender: Gender) -> Self {
        match gender {
            Gender::Male => Relationship::Godfather,
            Gender::Female => Relationship::Godmother,
            Gender::Unknown => Relationship::GodparentUnknown,
        }
    }
}

/// One resolved associate, ready for `ASSO` emission.
#[derive(Debug, Clone)]
pub struct Associate {
    /// Record id of the associated person (`I2`).
    pub person_id: String,
    pub relationship: Relationship,
    /// Notes attached to the associate's event reference.
    pub notes: Vec<Handle>,
}

/// Resolve the associates of `event`, excluding `primary` (the subject
/// never witnesses their own event).
///
/// Missing persons and stale back-references are skipped and recorded
/// as diagnostics; only a store failure is an error.
pub fn resolve_associates<D: Database + ?Sized>(
    db: &D,
    event: &Event,
    primary: Option<&Handle>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Associate>, DbError> {
    let mut associates = Vec::new();

    for handle in db.find_backlinks(&event.handle, ged_model::EntityKind::Person)? {
        if primary == Some(&handle) {
            continue;
        }
        let Some(person) = db.person(&handle)? else {
            diagnostics.record(
                DiagnosticKind::DanglingHandle,
                format!("person {handle} backlinked from event {} not found", event.handle),
            );
            continue;
        };

        let mut matched = false;
        for event_ref in &person.event_refs {
            if event_ref.event != event.handle {
                continue;
            }
            matched = true;
            let relationship = match &event_ref.role {
                EventRole::Primary => continue,
                EventRole::Custom(_) if event.kind.is_baptismal() => {
                    Relationship::godparent(person.gender)
                }
                _ => Relationship::Witness,
            };
            associates.push(Associate {
                person_id: person.id.clone(),
                relationship,
                notes: event_ref.notes.clone(),
            });
        }
        if !matched {
            diagnostics.record(
                DiagnosticKind::StaleBacklink,
                format!(
                    "person {handle} backlinked from event {} has no matching event reference",
                    event.handle
                ),
            );
        }
    }

    Ok(associates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::{
        EventKind, EventRef, InMemoryDatabase, Person, Snapshot,
    };

    fn person(handle: &str, id: &str, gender: Gender, refs: Vec<EventRef>) -> Person {
        Person {
            handle: Handle::new(handle),
            id: id.to_string(),
            gender,
            event_refs: refs,
            ..Person::default()
        }
    }

    fn fixture(event_kind: EventKind, associate_role: EventRole) -> (InMemoryDatabase, Event) {
        let event = Event::new("e1", event_kind);
        let snapshot = Snapshot {
            people: vec![
                person(
                    "p1",
                    "I1",
                    Gender::Male,
                    vec![EventRef::new("e1", EventRole::Primary)],
                ),
                person(
                    "p2",
                    "I2",
                    Gender::Female,
                    vec![EventRef::new("e1", associate_role)],
                ),
            ],
            events: vec![event.clone()],
            ..Snapshot::default()
        };
        (InMemoryDatabase::from_snapshot(snapshot), event)
    }

    #[test]
    fn witness_role_resolves_at_level_two() {
        let (db, event) = fixture(EventKind::Marriage, EventRole::Witness);
        let mut diagnostics = Diagnostics::new();
        let associates =
            resolve_associates(&db, &event, Some(&Handle::new("p1")), &mut diagnostics).unwrap();
        assert_eq!(associates.len(), 1);
        assert_eq!(associates[0].person_id, "I2");
        assert_eq!(associates[0].relationship, Relationship::Witness);
        assert_eq!(associates[0].relationship.level(), 2);
    }

    #[test]
    fn baptism_custom_role_becomes_godparent_by_gender() {
        let (db, event) = fixture(
            EventKind::Baptism,
            EventRole::Custom("Marraine".to_string()),
        );
        let mut diagnostics = Diagnostics::new();
        let associates =
            resolve_associates(&db, &event, Some(&Handle::new("p1")), &mut diagnostics).unwrap();
        assert_eq!(associates[0].relationship, Relationship::Godmother);
        assert_eq!(associates[0].relationship.label(), "Godmother");
        assert_eq!(associates[0].relationship.level(), 1);
    }

    #[test]
    fn custom_role_outside_baptism_is_a_witness() {
        let (db, event) = fixture(
            EventKind::Census,
            EventRole::Custom("Présent".to_string()),
        );
        let mut diagnostics = Diagnostics::new();
        let associates =
            resolve_associates(&db, &event, Some(&Handle::new("p1")), &mut diagnostics).unwrap();
        assert_eq!(associates[0].relationship, Relationship::Witness);
    }

    #[test]
    fn primary_subject_is_excluded() {
        let (db, event) = fixture(EventKind::Marriage, EventRole::Witness);
        let mut diagnostics = Diagnostics::new();
        let associates =
            resolve_associates(&db, &event, Some(&Handle::new("p1")), &mut diagnostics).unwrap();
        assert!(associates.iter().all(|a| a.person_id != "I1"));
    }

    #[test]
    fn godparent_of_unknown_gender_is_labelled_unknown() {
        let event = Event::new("e1", EventKind::Christening);
        let snapshot = Snapshot {
            people: vec![person(
                "p2",
                "I2",
                Gender::Unknown,
                vec![EventRef::new("e1", EventRole::Custom("Parrain".to_string()))],
            )],
            events: vec![event.clone()],
            ..Snapshot::default()
        };
        let db = InMemoryDatabase::from_snapshot(snapshot);
        let mut diagnostics = Diagnostics::new();
        let associates = resolve_associates(&db, &event, None, &mut diagnostics).unwrap();
        assert_eq!(associates[0].relationship.label(), "Unknown");
        assert_eq!(associates[0].relationship.level(), 1);
    }

    /// Wrapper whose backlink index claims every person references
    /// every event, regardless of their actual reference lists.
    struct StaleIndexDb(InMemoryDatabase);

    impl Database for StaleIndexDb {
        fn person(&self, h: &Handle) -> ged_model::Result<Option<Person>> {
            self.0.person(h)
        }
        fn family(&self, h: &Handle) -> ged_model::Result<Option<ged_model::Family>> {
            self.0.family(h)
        }
        fn event(&self, h: &Handle) -> ged_model::Result<Option<Event>> {
            self.0.event(h)
        }
        fn source(&self, h: &Handle) -> ged_model::Result<Option<ged_model::Source>> {
            self.0.source(h)
        }
        fn citation(&self, h: &Handle) -> ged_model::Result<Option<ged_model::Citation>> {
            self.0.citation(h)
        }
        fn repository(&self, h: &Handle) -> ged_model::Result<Option<ged_model::Repository>> {
            self.0.repository(h)
        }
        fn note(&self, h: &Handle) -> ged_model::Result<Option<ged_model::Note>> {
            self.0.note(h)
        }
        fn media(&self, h: &Handle) -> ged_model::Result<Option<ged_model::Media>> {
            self.0.media(h)
        }
        fn person_handles(&self) -> ged_model::Result<Vec<Handle>> {
            self.0.person_handles()
        }
        fn family_handles(&self) -> ged_model::Result<Vec<Handle>> {
            self.0.family_handles()
        }
        fn source_handles(&self) -> ged_model::Result<Vec<Handle>> {
            self.0.source_handles()
        }
        fn repository_handles(&self) -> ged_model::Result<Vec<Handle>> {
            self.0.repository_handles()
        }
        fn note_handles(&self) -> ged_model::Result<Vec<Handle>> {
            self.0.note_handles()
        }
        fn find_backlinks(
            &self,
            _target: &Handle,
            _kind: ged_model::EntityKind,
        ) -> ged_model::Result<Vec<Handle>> {
            self.0.person_handles()
        }
        fn researcher(&self) -> ged_model::Result<Option<String>> {
            self.0.researcher()
        }
        fn media_base(&self) -> ged_model::Result<Option<std::path::PathBuf>> {
            self.0.media_base()
        }
    }

    #[test]
    fn stale_backlink_is_recorded_not_fatal() {
        let snapshot = Snapshot {
            people: vec![person(
                "p2",
                "I2",
                Gender::Female,
                vec![EventRef::new("e1", EventRole::Witness)],
            )],
            ..Snapshot::default()
        };
        let db = StaleIndexDb(InMemoryDatabase::from_snapshot(snapshot));
        // p2 never references e9, but the (stale) index says it does
        let unrelated = Event::new("e9", EventKind::Marriage);
        let mut diagnostics = Diagnostics::new();
        let associates = resolve_associates(&db, &unrelated, None, &mut diagnostics).unwrap();
        assert!(associates.is_empty());
        assert_eq!(diagnostics.count_of(DiagnosticKind::StaleBacklink), 1);
    }
}
