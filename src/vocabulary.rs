/// Fixed word lists the extractors match against.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    /// Monday to Friday, checked in this order.
    pub weekdays: &'static [&'static str],
    pub staples: &'static [&'static str],
    /// Lines containing any of these are layout labels, not dishes.
    pub label_words: &'static [&'static str],
    /// Boilerplate lines and fragments unrelated to the dish itself.
    pub noise_phrases: &'static [&'static str],
    /// Sub-ingredients that never stand alone as a dish.
    pub ingredient_fragments: &'static [&'static str],
}

impl Vocabulary {
    pub const STANDARD: Vocabulary = Vocabulary {
        weekdays: &["月", "火", "水", "木", "金"],
        staples: &[
            "ごはん",
            "コッペパン",
            "ミルクコッペパン",
            "あじつけコッペパン",
            "こがたコッペパン",
        ],
        label_words: &["エネルギー", "たんぱく質", "塩分", "給食センター", "こんだて"],
        noise_phrases: &[
            "ぎゅうにゅう",
            "骨に注意して食べましょう。",
            "きざみのりをかけて",
            "たべましょう。",
        ],
        ingredient_fragments: &["ぎゅうにゅう", "にんじん", "たまねぎ", "キャベツ"],
    };

    /// Staple names, longest first so a specific name wins over one it contains.
    pub fn staples_longest_first(&self) -> Vec<&'static str> {
        let mut staples = self.staples.to_vec();
        staples.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        staples
    }

    pub fn is_noise(&self, text: &str) -> bool {
        self.noise_phrases.contains(&text)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staples_sort_longest_first_and_keep_ties_stable() {
        assert_eq!(
            Vocabulary::STANDARD.staples_longest_first(),
            vec![
                "あじつけコッペパン",
                "ミルクコッペパン",
                "こがたコッペパン",
                "コッペパン",
                "ごはん",
            ]
        );
    }
}
