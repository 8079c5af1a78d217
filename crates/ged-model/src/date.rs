//! Structured date values and their GEDCOM rendering.

use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// GEDCOM month abbreviation for a 1-based month number.
pub fn month_abbrev(month: u8) -> Option<&'static str> {
    MONTHS.get(usize::from(month).checked_sub(1)?).copied()
}

/// A date as stored on events, citations and change records.
///
/// Partial dates are common in genealogical data; day and month are
/// optional and the rendering degrades gracefully (`1901`, `JAN 1901`,
/// `3 JAN 1901`). Free-text dates pass through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateValue {
    Ymd {
        year: i32,
        #[serde(default)]
        month: Option<u8>,
        #[serde(default)]
        day: Option<u8>,
    },
    Text(String),
}

impl DateValue {
    pub fn ymd(year: i32, month: u8, day: u8) -> Self {
        DateValue::Ymd {
            year,
            month: Some(month),
            day: Some(day),
        }
    }

    pub fn year(year: i32) -> Self {
        DateValue::Ymd {
            year,
            month: None,
            day: None,
        }
    }

    /// Render in GEDCOM `DATE` form.
    pub fn render(&self) -> String {
        match self {
            DateValue::Text(text) => text.clone(),
            DateValue::Ymd { year, month, day } => {
                let month_name = month.and_then(|m| month_abbrev(m));
                match (day, month_name) {
                    (Some(day), Some(month)) => format!("{day} {month} {year}"),
                    (_, Some(month)) => format!("{month} {year}"),
                    _ => year.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_full_date() {
        assert_eq!(DateValue::ymd(1901, 1, 3).render(), "3 JAN 1901");
    }

    #[test]
    fn renders_partial_dates() {
        assert_eq!(
            DateValue::Ymd {
                year: 1901,
                month: Some(12),
                day: None
            }
            .render(),
            "DEC 1901"
        );
        assert_eq!(DateValue::year(1901).render(), "1901");
    }

    #[test]
    fn invalid_month_falls_back_to_year() {
        let date = DateValue::Ymd {
            year: 1901,
            month: Some(13),
            day: Some(3),
        };
        assert_eq!(date.render(), "1901");
    }

    #[test]
    fn text_date_passes_through() {
        assert_eq!(
            DateValue::Text("ABT 1850".to_string()).render(),
            "ABT 1850"
        );
    }
}
