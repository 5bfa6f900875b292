//! Field extractors. Each one reads the joined text of a single day block and
//! never fails: a field that cannot be found comes back empty or `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::{normalize_spaces, normalize_width};
use crate::vocabulary::Vocabulary;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());
static LEADING_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9０-９]+").unwrap());
static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9０-９]+(?:\.[0-9０-９]+)?").unwrap());
static DISH_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ぁ-んァ-ヶー一-龠（）・]{4,}").unwrap());

const MAX_DISHES: usize = 4;
const CALORIE_RANGE: std::ops::RangeInclusive<u64> = 400..=900;

/// Protein, calories and salt pulled from one block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nutrition {
    pub protein: Option<f64>,
    pub calories: Option<u32>,
    pub salt: Option<f64>,
}

pub fn extract_weekday(block: &str, vocab: &Vocabulary) -> &'static str {
    vocab
        .weekdays
        .iter()
        .find(|w| block.contains(*w))
        .copied()
        .unwrap_or("")
}

/// Protein is the first decimal figure and salt the last; a lone decimal is
/// reported as both. Calories is the first integer inside 400..=900.
pub fn extract_numbers(block: &str) -> Nutrition {
    let normalized = normalize_width(block);
    let mut decimals: Vec<f64> = Vec::new();
    let mut integers: Vec<u64> = Vec::new();
    for token in NUMBER_RE.find_iter(&normalized).map(|m| m.as_str()) {
        if token.contains('.') {
            decimals.extend(token.parse::<f64>().ok());
        } else {
            // Overflowing runs can never be a calorie figure.
            integers.extend(token.parse::<u64>().ok());
        }
    }

    let calories = integers
        .into_iter()
        .find(|n| CALORIE_RANGE.contains(n))
        .and_then(|n| u32::try_from(n).ok());

    Nutrition {
        protein: decimals.first().copied(),
        calories,
        salt: decimals.last().copied(),
    }
}

pub fn extract_staple(block: &str, vocab: &Vocabulary) -> &'static str {
    let text = normalize_spaces(block);
    vocab
        .staples_longest_first()
        .into_iter()
        .find(|staple| text.contains(staple))
        .unwrap_or("")
}

/// Collects up to four dish names from the block, skipping label rows,
/// boilerplate, staple names and bare sub-ingredients.
pub fn extract_dishes(block: &str, vocab: &Vocabulary) -> Vec<String> {
    let mut dishes: Vec<String> = Vec::new();

    for raw in block.lines() {
        let line = normalize_spaces(raw);
        if line.is_empty()
            || vocab.label_words.iter().any(|w| line.contains(w))
            || vocab.is_noise(&line)
        {
            continue;
        }

        let line = LEADING_DIGITS_RE.replace(&line, "");
        let line = QUANTITY_RE.replace_all(line.trim(), "");

        for candidate in DISH_RUN_RE.find_iter(line.trim()).map(|m| m.as_str()) {
            if vocab.is_noise(candidate)
                || vocab.staples.iter().any(|s| s.contains(candidate))
                || vocab
                    .ingredient_fragments
                    .iter()
                    .any(|f| candidate.contains(f))
            {
                continue;
            }
            if !dishes.iter().any(|d| d == candidate) {
                dishes.push(candidate.to_string());
            }
        }
    }

    dishes.truncate(MAX_DISHES);
    dishes
}
