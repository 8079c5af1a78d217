//! Name formatting.
//!
//! Renders a [`Name`] into the GEDCOM `NAME` display value plus its
//! decomposed piece subfields. Two display modes exist: the standard
//! slash-delimited form, and the portal's beautified form without
//! slashes.

use ged_model::{Attribute, AttributeKind, Name};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// A name rendered for output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFields {
    /// The `NAME` line value.
    pub display: String,
    /// `GIVN`
    pub given: String,
    /// `SURN`
    pub surname: String,
    /// `SPFX`
    pub surname_prefix: String,
    /// `NSFX`
    pub suffix: String,
    /// `NPFX`
    pub title: String,
    /// `NICK`
    pub nickname: String,
    /// `TYPE` subfield, when the name kind carries one.
    pub type_value: Option<String>,
}

/// Slash is the GEDCOM surname delimiter and must not appear in free
/// text; it is substituted, not escaped.
fn sanitize(text: &str) -> String {
    text.replace('/', "?")
}

/// One surname part as displayed: prefix, surname, then the connector.
fn part_display(prefix: &str, surname: &str, connector: &str) -> String {
    let mut out = String::new();
    for piece in [prefix, surname, connector] {
        if piece.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}

/// Render a name for export.
///
/// `attributes` is the owning person's attribute list, consulted for a
/// nickname fallback when the name record itself has none. Only the
/// first nickname attribute counts; extras are reported, not merged.
pub fn format_name(
    name: &Name,
    attributes: &[Attribute],
    beautify: bool,
    diagnostics: &mut Diagnostics,
) -> NameFields {
    let mut surname_parts = Vec::new();
    let mut surn_parts = Vec::new();
    let mut prefixes = Vec::new();
    for part in &name.surnames {
        let prefix = sanitize(&part.prefix);
        let surname = sanitize(&part.surname);
        let connector = sanitize(&part.connector);
        let display = part_display(&prefix, &surname, &connector);
        if !display.is_empty() {
            surname_parts.push(display);
        }
        if !surname.is_empty() {
            surn_parts.push(part_display("", &surname, &connector));
        }
        if !prefix.is_empty() {
            prefixes.push(prefix);
        }
    }
    let full_surname = surname_parts.join(", ");

    let mut pieces = Vec::new();
    if !name.first.is_empty() {
        pieces.push(name.first.clone());
    }
    if beautify {
        if !full_surname.is_empty() {
            pieces.push(full_surname.clone());
        }
    } else {
        pieces.push(format!("/{full_surname}/"));
    }
    if !name.suffix.is_empty() {
        pieces.push(name.suffix.clone());
    }

    let nickname = if name.nick.is_empty() {
        nickname_from_attributes(attributes, diagnostics)
    } else {
        name.nick.clone()
    };

    NameFields {
        display: pieces.join(" "),
        given: name.first.clone(),
        surname: surn_parts.join(", "),
        surname_prefix: prefixes.join(", "),
        suffix: name.suffix.clone(),
        title: name.title.clone(),
        nickname,
        type_value: name.kind.type_value().map(str::to_string),
    }
}

fn nickname_from_attributes(attributes: &[Attribute], diagnostics: &mut Diagnostics) -> String {
    let mut nicknames = attributes
        .iter()
        .filter(|attr| attr.kind == AttributeKind::Nickname);
    let first = nicknames.next().map(|attr| attr.value.clone());
    if nicknames.next().is_some() {
        diagnostics.record(
            DiagnosticKind::AmbiguousNickname,
            "multiple nickname attributes, using the first",
        );
    }
    first.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::{NameKind, Surname};

    fn simple_name(first: &str, surname: &str) -> Name {
        Name {
            first: first.to_string(),
            surnames: vec![Surname::simple(surname)],
            ..Name::default()
        }
    }

    fn format(name: &Name, beautify: bool) -> NameFields {
        let mut diagnostics = Diagnostics::new();
        format_name(name, &[], beautify, &mut diagnostics)
    }

    #[test]
    fn standard_mode_wraps_surname_in_slashes() {
        let fields = format(&simple_name("Jean", "Dupont"), false);
        assert_eq!(fields.display, "Jean /Dupont/");
        assert_eq!(fields.given, "Jean");
        assert_eq!(fields.surname, "Dupont");
    }

    #[test]
    fn beautify_mode_omits_slashes() {
        let fields = format(&simple_name("Jean", "Dupont"), true);
        assert_eq!(fields.display, "Jean Dupont");
    }

    #[test]
    fn suffix_is_appended() {
        let mut name = simple_name("Jean", "Dupont");
        name.suffix = "Jr.".to_string();
        assert_eq!(format(&name, false).display, "Jean /Dupont/ Jr.");
        assert_eq!(format(&name, true).display, "Jean Dupont Jr.");
    }

    #[test]
    fn literal_slash_in_surname_is_substituted() {
        let fields = format(&simple_name("Anne", "Du/pont"), false);
        assert_eq!(fields.display, "Anne /Du?pont/");
        assert_eq!(fields.surname, "Du?pont");
        let inner = fields
            .display
            .trim_start_matches("Anne /")
            .trim_end_matches('/');
        assert!(!inner.contains('/'));
    }

    #[test]
    fn multiple_surnames_join_with_comma_and_connector() {
        let name = Name {
            first: "Maria".to_string(),
            surnames: vec![
                Surname {
                    prefix: "de".to_string(),
                    surname: "Silva".to_string(),
                    connector: "y".to_string(),
                },
                Surname::simple("Gomez"),
            ],
            ..Name::default()
        };
        let fields = format(&name, false);
        assert_eq!(fields.display, "Maria /de Silva y, Gomez/");
        assert_eq!(fields.surname, "Silva y, Gomez");
        assert_eq!(fields.surname_prefix, "de");
    }

    #[test]
    fn empty_surname_keeps_delimiters_in_standard_mode() {
        let name = Name {
            first: "Jean".to_string(),
            ..Name::default()
        };
        assert_eq!(format(&name, false).display, "Jean //");
        assert_eq!(format(&name, true).display, "Jean");
    }

    #[test]
    fn name_kind_maps_to_type_value() {
        let mut name = simple_name("Jeanne", "Martin");
        name.kind = NameKind::Married;
        assert_eq!(format(&name, false).type_value.as_deref(), Some("married"));
        name.kind = NameKind::Birth;
        assert_eq!(format(&name, false).type_value, None);
    }

    #[test]
    fn nickname_falls_back_to_first_attribute() {
        let name = simple_name("Jean", "Dupont");
        let attrs = vec![
            Attribute::new(AttributeKind::Nickname, "Jeannot"),
            Attribute::new(AttributeKind::Nickname, "JD"),
        ];
        let mut diagnostics = Diagnostics::new();
        let fields = format_name(&name, &attrs, false, &mut diagnostics);
        assert_eq!(fields.nickname, "Jeannot");
        assert_eq!(diagnostics.count_of(DiagnosticKind::AmbiguousNickname), 1);
    }

    #[test]
    fn nickname_on_name_wins_over_attributes() {
        let mut name = simple_name("Jean", "Dupont");
        name.nick = "Jano".to_string();
        let attrs = vec![Attribute::new(AttributeKind::Nickname, "Jeannot")];
        let mut diagnostics = Diagnostics::new();
        let fields = format_name(&name, &attrs, false, &mut diagnostics);
        assert_eq!(fields.nickname, "Jano");
        assert!(diagnostics.is_empty());
    }
}
