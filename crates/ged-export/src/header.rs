//! Header field helpers.

/// Source system identifier written in the header `SOUR` block.
pub const SOURCE_ID: &str = "GedExport";

/// Generator version, taken from the crate itself.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name for a two-letter locale code, for the header `LANG`
/// line. Unmapped codes simply omit the line.
pub fn language_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "ca" => "Catalan",
        "cs" => "Czech",
        "da" => "Danish",
        "de" => "German",
        "en" => "English",
        "es" => "Spanish",
        "fi" => "Finnish",
        "fr" => "French",
        "hu" => "Hungarian",
        "it" => "Italian",
        "nl" => "Dutch",
        "no" => "Norwegian",
        "pl" => "Polish",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "sk" => "Slovak",
        "sl" => "Slovene",
        "sv" => "Swedish",
        _ => return None,
    };
    Some(name)
}
