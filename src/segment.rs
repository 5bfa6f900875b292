use std::collections::BTreeMap;

use tracing::debug;

use crate::normalize::normalize_width;

/// Lines kept above each marker line as look-behind context.
const PRE_CONTEXT: usize = 2;

/// Returns the day number when `line` opens a day row: optional leading
/// whitespace, then one or two digits not followed by another digit or a
/// period.
pub fn day_marker(line: &str) -> Option<u32> {
    let normalized = normalize_width(line);
    let rest = normalized.trim_start();
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 2 {
        return None;
    }
    if rest[digits..].starts_with('.') {
        return None;
    }
    rest[..digits].parse().ok()
}

/// Splits the rendered lines into one block per day.
///
/// Each block starts up to two lines above its marker and stops two lines
/// above the next marker, so label rows printed over a day's figures stay
/// with that day. The last block runs to the end of the document. A repeated
/// day number replaces the earlier block.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> BTreeMap<u32, Vec<String>> {
    let starts: Vec<(usize, u32)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| day_marker(line.as_ref()).map(|day| (idx, day)))
        .collect();
    debug!("found {} day markers in {} lines", starts.len(), lines.len());

    let mut blocks = BTreeMap::new();
    for (i, &(start, day)) in starts.iter().enumerate() {
        let begin = start.saturating_sub(PRE_CONTEXT);
        let end = match starts.get(i + 1) {
            Some(&(next, _)) => start.max(next.saturating_sub(PRE_CONTEXT)),
            None => lines.len(),
        };
        let block = lines[begin..end]
            .iter()
            .map(|line| line.as_ref().trim_end().to_string())
            .collect();
        if blocks.insert(day, block).is_some() {
            debug!("day {day} seen again at line {start}, replacing earlier block");
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("1 月", Some(1))]
    #[case("   12 金 ごはん", Some(12))]
    #[case("１５　水", Some(15))]
    #[case("7", Some(7))]
    #[case("3.2 たんぱく質", None)]
    #[case("１２．５", None)]
    #[case("123 コード", None)]
    #[case("ごはん 5", None)]
    #[case("", None)]
    fn recognises_day_markers(#[case] line: &str, #[case] expected: Option<u32>) {
        assert_eq!(day_marker(line), expected);
    }

    #[test]
    fn blocks_take_two_lines_of_look_behind() {
        let lines = [
            "header",
            "label a",
            "label b",
            "2 月 ごはん  ",
            "dish",
            "label c",
            "label d",
            "3 火 コッペパン",
            "tail",
        ];
        let blocks = segment(&lines);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[&2], vec!["label a", "label b", "2 月 ごはん", "dish"]);
        assert_eq!(
            blocks[&3],
            vec!["label c", "label d", "3 火 コッペパン", "tail"]
        );
    }

    #[test]
    fn first_block_clamps_at_document_start() {
        let lines = ["1 月", "ごはん"];
        assert_eq!(segment(&lines)[&1], vec!["1 月", "ごはん"]);
    }

    #[test]
    fn adjacent_markers_keep_only_look_behind_for_the_earlier_day() {
        let lines = ["a", "b", "4 木", "5 金", "x"];
        let blocks = segment(&lines);
        assert_eq!(blocks[&4], vec!["a", "b"]);
        assert_eq!(blocks[&5], vec!["b", "4 木", "5 金", "x"]);
    }

    #[test]
    fn repeated_day_overwrites_earlier_block() {
        let lines = ["6 月 first", "x", "y", "z", "6 月 second"];
        let blocks = segment(&lines);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[&6], vec!["y", "z", "6 月 second"]);
    }

    #[test]
    fn no_markers_yield_no_blocks() {
        let lines = ["ごはん", "3.5", ""];
        assert!(segment(&lines).is_empty());
        assert!(segment::<&str>(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn keys_are_exactly_the_marked_days(lines in proptest::collection::vec("[0-9１２ .a]{0,6}", 0..30)) {
            let blocks = segment(&lines);
            let mut expected: Vec<u32> = lines.iter().filter_map(|l| day_marker(l)).collect();
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(blocks.keys().copied().collect::<Vec<_>>(), expected);
        }
    }
}
