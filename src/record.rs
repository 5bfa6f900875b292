use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::extract::{extract_dishes, extract_numbers, extract_staple, extract_weekday};
use crate::segment::segment;
use crate::vocabulary::Vocabulary;

/// One day of the monthly menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u32,
    pub weekday: String,
    pub staple: String,
    pub dishes: Vec<String>,
    pub calories: Option<u32>,
    pub protein: Option<f64>,
    pub salt: Option<f64>,
}

/// A month and course worth of day records, as stored in the menu collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    pub id: String,
    pub month: String,
    pub month_label: String,
    pub course: String,
    pub title: String,
    #[serde(rename = "pdf")]
    pub source_link: String,
    pub items: Vec<DayRecord>,
}

impl MenuDocument {
    /// Builds the envelope for `month` (`YYYY-MM`) and `course`. The id is the
    /// month joined with the lowercased course.
    pub fn new(
        month: &str,
        course: &str,
        title: &str,
        source_link: &str,
        items: Vec<DayRecord>,
    ) -> Result<Self> {
        Ok(Self {
            id: document_id(month, course),
            month: month.to_string(),
            month_label: month_label(month)?,
            course: course.to_string(),
            title: title.to_string(),
            source_link: source_link.to_string(),
            items,
        })
    }
}

pub fn document_id(month: &str, course: &str) -> String {
    format!("{month}-{}", course.to_lowercase())
}

/// "2025-02" (or "2025-2") -> "2025年2月".
pub fn month_label(month: &str) -> Result<String> {
    let parsed = parse_month(month).ok_or_else(|| Error::InvalidMonth(month.to_string()))?;
    Ok(format!("{}年{}月", parsed.year(), parsed.month()))
}

fn parse_month(month: &str) -> Option<NaiveDate> {
    let (year, mon) = month.split_once('-')?;
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || !(1..=2).contains(&mon.len()) || !digits(year) || !digits(mon) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, mon.parse().ok()?, 1)
}

/// Segments the rendered lines and extracts one record per day, ordered by
/// day number.
pub fn build_records<S: AsRef<str>>(lines: &[S], vocab: &Vocabulary) -> Vec<DayRecord> {
    segment(lines)
        .into_iter()
        .map(|(day, block)| {
            let text = block.join("\n");
            let nutrition = extract_numbers(&text);
            let record = DayRecord {
                day,
                weekday: extract_weekday(&text, vocab).to_string(),
                staple: extract_staple(&text, vocab).to_string(),
                dishes: extract_dishes(&text, vocab),
                calories: nutrition.calories,
                protein: nutrition.protein,
                salt: nutrition.salt,
            };
            debug!(
                "day {day}: weekday={:?} staple={:?} dishes={:?}",
                record.weekday, record.staple, record.dishes
            );
            if record.staple.is_empty() && record.dishes.is_empty() {
                warn!("day {day}: no staple or dishes found, needs manual entry");
            }
            record
        })
        .collect()
}
