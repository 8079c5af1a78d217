//! Attribute-to-tag mapping.
//!
//! Each attribute maps to exactly one disposition through an ordered
//! rule chain. Rule order is load-bearing: identifier passthrough and
//! the bare `RESN` rule win over the standard tag table, which wins
//! over the generic `FACT` fallback.

use ged_model::{Attribute, AttributeKind};

/// Custom type keys passed through as their own tag.
const IDENTIFIER_KEYS: [&str; 5] = ["AFN", "RFN", "REFN", "_UID", "_FSFTID"];

/// Type key left behind by record merges in the source database;
/// attributes carrying it are dropped.
pub const MERGE_MARKER: &str = "ID Gramps fusionné";

/// How one attribute is written, if at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeDisposition {
    /// `1 <key> <value>` identifier passthrough (`AFN`, `_UID`, ...).
    Identifier { tag: String, value: String },
    /// Bare `1 RESN`, value ignored.
    Restriction,
    /// `1 <tag> <value>` with a standard personal attribute tag.
    Standard {
        tag: &'static str,
        value: String,
    },
    /// `1 FACT <value>` / `2 TYPE <key>` generic fallback.
    Fact { value: String, type_key: String },
    /// Not emitted (nickname, merge marker, empty custom value).
    Skip,
}

impl AttributeDisposition {
    /// Whether note and citation references follow the attribute.
    pub fn carries_references(&self) -> bool {
        matches!(
            self,
            AttributeDisposition::Identifier { .. }
                | AttributeDisposition::Standard { .. }
                | AttributeDisposition::Fact { .. }
        )
    }
}

/// Apply the ordered mapping rules to one attribute.
pub fn map_attribute(attribute: &Attribute) -> AttributeDisposition {
    if attribute.kind == AttributeKind::Nickname {
        // consumed by the name formatter
        return AttributeDisposition::Skip;
    }

    let key = attribute.kind.key();
    let value = attribute.value.trim().replace('\r', " ");

    if IDENTIFIER_KEYS.contains(&key) {
        return AttributeDisposition::Identifier {
            tag: key.to_string(),
            value,
        };
    }
    if key == "RESN" {
        return AttributeDisposition::Restriction;
    }
    if let Some(tag) = attribute.kind.gedcom_tag() {
        return AttributeDisposition::Standard { tag, value };
    }
    if !value.is_empty() && key != MERGE_MARKER {
        return AttributeDisposition::Fact {
            value,
            type_key: key.to_string(),
        };
    }
    AttributeDisposition::Skip
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(key: &str, value: &str) -> Attribute {
        Attribute::new(AttributeKind::Custom(key.to_string()), value)
    }

    #[test]
    fn identifier_keys_pass_through() {
        for key in IDENTIFIER_KEYS {
            let disposition = map_attribute(&custom(key, " X-42 "));
            assert_eq!(
                disposition,
                AttributeDisposition::Identifier {
                    tag: key.to_string(),
                    value: "X-42".to_string(),
                }
            );
        }
    }

    #[test]
    fn carriage_returns_become_spaces() {
        let disposition = map_attribute(&custom("_UID", "a\rb"));
        assert_eq!(
            disposition,
            AttributeDisposition::Identifier {
                tag: "_UID".to_string(),
                value: "a b".to_string(),
            }
        );
    }

    #[test]
    fn resn_is_always_bare() {
        // even with a non-empty value, RESN never reaches the FACT branch
        let disposition = map_attribute(&custom("RESN", "locked"));
        assert_eq!(disposition, AttributeDisposition::Restriction);
    }

    #[test]
    fn known_kinds_use_standard_tags() {
        let attribute = Attribute::new(AttributeKind::Occupation, "Meunier");
        assert_eq!(
            map_attribute(&attribute),
            AttributeDisposition::Standard {
                tag: "OCCU",
                value: "Meunier".to_string(),
            }
        );
    }

    #[test]
    fn unknown_kinds_fall_back_to_fact() {
        let disposition = map_attribute(&custom("Eye color", "blue"));
        assert_eq!(
            disposition,
            AttributeDisposition::Fact {
                value: "blue".to_string(),
                type_key: "Eye color".to_string(),
            }
        );
    }

    #[test]
    fn merge_marker_is_dropped() {
        let disposition = map_attribute(&custom(MERGE_MARKER, "I0042"));
        assert_eq!(disposition, AttributeDisposition::Skip);
    }

    #[test]
    fn empty_custom_value_is_skipped() {
        assert_eq!(
            map_attribute(&custom("Eye color", "   ")),
            AttributeDisposition::Skip
        );
    }

    #[test]
    fn nickname_never_emitted_here() {
        let attribute = Attribute::new(AttributeKind::Nickname, "Jeannot");
        assert_eq!(map_attribute(&attribute), AttributeDisposition::Skip);
    }

    #[test]
    fn references_follow_emitted_cases_only() {
        assert!(map_attribute(&custom("AFN", "1")).carries_references());
        assert!(
            map_attribute(&Attribute::new(AttributeKind::Religion, "x")).carries_references()
        );
        assert!(map_attribute(&custom("Eye color", "blue")).carries_references());
        assert!(!map_attribute(&custom("RESN", "")).carries_references());
    }
}
