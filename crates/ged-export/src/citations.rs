//! Source and citation field preparation.
//!
//! Pure helpers behind the source/citation sections of the exporter:
//! title obscuration, page truncation and the `EVEN`/`EVEN:ROLE`
//! citation attribute special case. The line emission itself lives in
//! the exporter.

use ged_model::Attribute;

/// Maximum `PAGE` length; page references must never be broken across
/// continuation lines.
pub const PAGE_LIMIT: usize = 248;

/// De-identified replacement for the portal brand name.
const OBSCURED_BRAND: &str = "g3n3an3t";

/// Replace both spellings of the portal brand in a source title.
pub fn obscure_title(title: &str) -> String {
    title
        .replace("généanet", OBSCURED_BRAND)
        .replace("geneanet", OBSCURED_BRAND)
}

/// Hard-truncate a page reference to [`PAGE_LIMIT`] characters.
pub fn truncate_page(page: &str) -> &str {
    match page.char_indices().nth(PAGE_LIMIT) {
        Some((index, _)) => &page[..index],
        None => page,
    }
}

/// Extract the `EVEN` / `EVEN:ROLE` citation attribute pair.
///
/// At most one `EVEN` value is taken (first match); the role is only
/// attached when an `EVEN` was found, itself first-match-wins.
pub fn citation_event_pair(attributes: &[Attribute]) -> Option<(String, Option<String>)> {
    let event = attributes
        .iter()
        .find(|attr| attr.kind.key() == "EVEN")
        .map(|attr| attr.value.clone())?;
    let role = attributes
        .iter()
        .find(|attr| attr.kind.key() == "EVEN:ROLE")
        .map(|attr| attr.value.clone());
    Some((event, role))
}
