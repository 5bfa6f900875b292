//! Width and whitespace canonicalisation applied before any digit- or
//! spacing-sensitive match.

/// Maps full-width digits, period and comma to ASCII. Everything else is
/// passed through untouched.
pub fn normalize_width(text: &str) -> String {
    text.chars().map(half_width_char).collect()
}

fn half_width_char(c: char) -> char {
    match c {
        '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
        '．' => '.',
        '，' => ',',
        _ => c,
    }
}

/// Collapses every whitespace run (line breaks included) to one space and trims
/// both ends.
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
