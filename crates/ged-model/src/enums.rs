//! Type-safe enumerations for the genealogical model.
//!
//! The source database stores most of these as loosely-typed integers or
//! strings; here every concept is an explicit enum so that the export
//! mapping tables are exhaustive matches checked at compile time instead
//! of runtime dictionary lookups with silent fallthrough.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    /// GEDCOM `SEX` value.
    pub fn sex_code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "U",
        }
    }
}

/// Role a person plays in an event they reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventRole {
    /// The subject of the event itself.
    Primary,
    Witness,
    Celebrant,
    Informant,
    Clergy,
    Aide,
    /// Locally-defined role, carried as free text.
    Custom(String),
}

impl EventRole {
    /// True for every role that produces an `ASSO` link (anything but
    /// the primary subject).
    pub fn is_witness_like(&self) -> bool {
        !matches!(self, EventRole::Primary)
    }
}

/// Kind of an event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Birth,
    Death,
    Marriage,
    Baptism,
    Christening,
    Burial,
    Cremation,
    Census,
    Residence,
    Divorce,
    Engagement,
    Custom(String),
}

impl EventKind {
    /// The standard GEDCOM tag for this event, or `None` for custom
    /// events (written as `EVEN` with a `TYPE` subline).
    pub fn gedcom_tag(&self) -> Option<&'static str> {
        match self {
            EventKind::Birth => Some("BIRT"),
            EventKind::Death => Some("DEAT"),
            EventKind::Marriage => Some("MARR"),
            EventKind::Baptism => Some("BAPM"),
            EventKind::Christening => Some("CHR"),
            EventKind::Burial => Some("BURI"),
            EventKind::Cremation => Some("CREM"),
            EventKind::Census => Some("CENS"),
            EventKind::Residence => Some("RESI"),
            EventKind::Divorce => Some("DIV"),
            EventKind::Engagement => Some("ENGA"),
            EventKind::Custom(_) => None,
        }
    }

    /// Baptism and christening share the godparent associate rules.
    pub fn is_baptismal(&self) -> bool {
        matches!(self, EventKind::Baptism | EventKind::Christening)
    }

    /// Display text, used as the `TYPE` value for custom events.
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Birth => "Birth",
            EventKind::Death => "Death",
            EventKind::Marriage => "Marriage",
            EventKind::Baptism => "Baptism",
            EventKind::Christening => "Christening",
            EventKind::Burial => "Burial",
            EventKind::Cremation => "Cremation",
            EventKind::Census => "Census",
            EventKind::Residence => "Residence",
            EventKind::Divorce => "Divorce",
            EventKind::Engagement => "Engagement",
            EventKind::Custom(text) => text,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a personal name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    #[default]
    Birth,
    Married,
    Aka,
    Custom(String),
}

impl NameKind {
    /// The `TYPE` subfield for a `NAME` structure. Birth names carry no
    /// `TYPE` line; custom kinds fall back to their own text.
    pub fn type_value(&self) -> Option<&str> {
        match self {
            NameKind::Birth => None,
            NameKind::Married => Some("married"),
            NameKind::Aka => Some("aka"),
            NameKind::Custom(text) => Some(text),
        }
    }
}

/// Relationship type of a family record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRelation {
    Married,
    CivilUnion,
    Unmarried,
    #[default]
    Unknown,
    Custom(String),
}

impl FamilyRelation {
    /// Unmarried and unknown couples get the portal's `_UST
    /// COHABITATION` marker.
    pub fn is_cohabitation(&self) -> bool {
        matches!(self, FamilyRelation::Unmarried | FamilyRelation::Unknown)
    }
}

/// Citation confidence on the 5-point ordinal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    VeryLow,
    Low,
    Normal,
    High,
    VeryHigh,
}

impl Confidence {
    /// Build from the database's raw numeric level, clamping anything
    /// above the scale to `VeryHigh`.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Confidence::VeryLow,
            1 => Confidence::Low,
            2 => Confidence::Normal,
            3 => Confidence::High,
            _ => Confidence::VeryHigh,
        }
    }

    /// GEDCOM `QUAY` quality digit. The 5-point scale folds onto the
    /// 4 defined digits: very-low and low certainty share `0`. Unset
    /// confidence is modeled as `Option<Confidence>::None` on the
    /// citation and suppresses the `QUAY` line there.
    pub fn quay_code(self) -> &'static str {
        match self {
            Confidence::VeryLow | Confidence::Low => "0",
            Confidence::Normal => "1",
            Confidence::High => "2",
            Confidence::VeryHigh => "3",
        }
    }

    /// Human-readable label for quality annotation notes.
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::VeryLow => "Very low",
            Confidence::Low => "Low",
            Confidence::Normal => "Normal",
            Confidence::High => "High",
            Confidence::VeryHigh => "Very high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a personal attribute.
///
/// Built-in kinds map one-to-one onto standard GEDCOM personal
/// attribute tags; everything else arrives as `Custom` with the raw
/// type key from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Caste,
    Description,
    Education,
    NationalId,
    Nationality,
    NumChildren,
    NumMarriages,
    Occupation,
    Property,
    Religion,
    SocialSecurityNumber,
    /// Handled by the name formatter, never emitted as an attribute.
    Nickname,
    Custom(String),
}

impl AttributeKind {
    /// The standard GEDCOM personal attribute tag, if one exists.
    pub fn gedcom_tag(&self) -> Option<&'static str> {
        match self {
            AttributeKind::Caste => Some("CAST"),
            AttributeKind::Description => Some("DSCR"),
            AttributeKind::Education => Some("EDUC"),
            AttributeKind::NationalId => Some("IDNO"),
            AttributeKind::Nationality => Some("NATI"),
            AttributeKind::NumChildren => Some("NCHI"),
            AttributeKind::NumMarriages => Some("NMR"),
            AttributeKind::Occupation => Some("OCCU"),
            AttributeKind::Property => Some("PROP"),
            AttributeKind::Religion => Some("RELI"),
            AttributeKind::SocialSecurityNumber => Some("SSN"),
            AttributeKind::Nickname | AttributeKind::Custom(_) => None,
        }
    }

    /// The textual type key, used for identifier matching and as the
    /// `TYPE` of generic `FACT` attributes.
    pub fn key(&self) -> &str {
        match self {
            AttributeKind::Caste => "Caste",
            AttributeKind::Description => "Description",
            AttributeKind::Education => "Education",
            AttributeKind::NationalId => "National Identification",
            AttributeKind::Nationality => "Nationality",
            AttributeKind::NumChildren => "Number of Children",
            AttributeKind::NumMarriages => "Number of Marriages",
            AttributeKind::Occupation => "Occupation",
            AttributeKind::Property => "Property",
            AttributeKind::Religion => "Religion",
            AttributeKind::SocialSecurityNumber => "Social Security Number",
            AttributeKind::Nickname => "Nickname",
            AttributeKind::Custom(text) => text,
        }
    }
}

/// Kind of a note record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    #[default]
    General,
    /// Verbatim source text; becomes the `TEXT` field of a citation.
    SourceText,
    Custom(String),
}

/// Entity namespaces for reverse-reference queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Family,
    Event,
    Source,
    Citation,
    Repository,
    Note,
    Media,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_clamps_above_scale() {
        assert_eq!(Confidence::from_level(4), Confidence::VeryHigh);
        assert_eq!(Confidence::from_level(9), Confidence::VeryHigh);
        assert_eq!(
            Confidence::from_level(9).quay_code(),
            Confidence::VeryHigh.quay_code()
        );
    }

    #[test]
    fn quay_codes_fold_onto_four_digits() {
        assert_eq!(Confidence::VeryLow.quay_code(), "0");
        assert_eq!(Confidence::Low.quay_code(), "0");
        assert_eq!(Confidence::Normal.quay_code(), "1");
        assert_eq!(Confidence::High.quay_code(), "2");
        assert_eq!(Confidence::VeryHigh.quay_code(), "3");
    }

    #[test]
    fn event_kind_tags() {
        assert_eq!(EventKind::Birth.gedcom_tag(), Some("BIRT"));
        assert_eq!(EventKind::Custom("Retirement".into()).gedcom_tag(), None);
        assert!(EventKind::Baptism.is_baptismal());
        assert!(EventKind::Christening.is_baptismal());
        assert!(!EventKind::Birth.is_baptismal());
    }

    #[test]
    fn name_kind_type_values() {
        assert_eq!(NameKind::Birth.type_value(), None);
        assert_eq!(NameKind::Married.type_value(), Some("married"));
        assert_eq!(NameKind::Aka.type_value(), Some("aka"));
        assert_eq!(
            NameKind::Custom("religious".into()).type_value(),
            Some("religious")
        );
    }

    #[test]
    fn witness_like_roles() {
        assert!(!EventRole::Primary.is_witness_like());
        assert!(EventRole::Witness.is_witness_like());
        assert!(EventRole::Custom("Godfather".into()).is_witness_like());
    }
}
