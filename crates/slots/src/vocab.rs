//! Fixed keyword vocabularies for slot extraction.
//!
//! These tables are the entire "language model" of the system: flat,
//! immutable keyword lists checked with case-insensitive word-boundary
//! matching. Order matters: the extractor takes the first hit per
//! table, so specific phrases come before generic ones and the table
//! order pins which genre wins when a request mentions several
//! (e.g. "a sci-fi action movie" extracts Sci-Fi).

use catalog::{Genre, Language, Mood};

/// Genre keywords and synonyms, checked in order; first hit wins.
pub const GENRE_KEYWORDS: &[(&str, Genre)] = &[
    ("science fiction", Genre::SciFi),
    ("science-fiction", Genre::SciFi),
    ("sci-fi", Genre::SciFi),
    ("scifi", Genre::SciFi),
    ("superhero", Genre::Action),
    ("action", Genre::Action),
    ("rom-com", Genre::Romance),
    ("romance", Genre::Romance),
    ("musical", Genre::Musical),
    ("thriller", Genre::Thriller),
    ("comedy", Genre::Comedy),
    ("drama", Genre::Drama),
];

/// Mood categories with the words that signal them.
///
/// Note "romantic" maps to the emotional mood while "romance" (the noun)
/// is a genre keyword; the word-boundary matcher keeps them apart.
pub const MOOD_KEYWORDS: &[(Mood, &[&str])] = &[
    (Mood::Fun, &["fun", "light", "lighthearted", "funny", "laugh", "comedic"]),
    (Mood::Serious, &["serious", "dark", "grim", "heavy", "gritty", "intense", "thoughtful"]),
    (Mood::Emotional, &["emotional", "touching", "tearjerker", "sad", "romantic", "moving"]),
    (Mood::MindBending, &["mind-bending", "twisty", "puzzling", "complex", "cerebral"]),
    (Mood::Blockbuster, &["blockbuster", "epic", "spectacle", "big-budget"]),
];

/// Language keywords
pub const LANGUAGE_KEYWORDS: &[(&str, Language)] = &[
    ("english", Language::English),
    ("korean", Language::Korean),
    ("french", Language::French),
];

/// Words that signal a short-runtime preference
pub const RUNTIME_SHORT_KEYWORDS: &[&str] = &["short", "quick", "brief"];

/// Words that signal a long-runtime preference
pub const RUNTIME_LONG_KEYWORDS: &[&str] = &["long", "lengthy", "three hours"];

/// Words that signal a classic-era preference
pub const ERA_CLASSIC_KEYWORDS: &[&str] = &["classic", "old-school", "golden age"];

/// Words that signal a recent-era preference
pub const ERA_RECENT_KEYWORDS: &[&str] = &["recent", "modern", "latest"];

/// Case-insensitive word-boundary containment check.
///
/// `keyword` may be a multi-word phrase; hyphens inside a keyword are
/// matched literally. A match requires the characters immediately before
/// and after the matched span to be non-alphanumeric (or the string
/// edge), so "action" does not fire inside "interaction".
///
/// Expects `text` to be lowercase already; keywords are stored lowercase.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = text[start..].find(keyword) {
        let begin = start + pos;
        let end = begin + keyword.len();

        let before_ok = begin == 0
            || !text[..begin]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric());
        let after_ok = end == text.len()
            || !text[end..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric());

        if before_ok && after_ok {
            return true;
        }
        // Advance past the first char of this hit, staying on a char boundary
        start = begin
            + text[begin..]
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_keyword_match() {
        assert!(contains_keyword("a fun action movie", "action"));
        assert!(contains_keyword("action", "action"));
    }

    #[test]
    fn test_no_match_inside_word() {
        assert!(!contains_keyword("a strange interaction", "action"));
        assert!(!contains_keyword("romantic", "romance"));
    }

    #[test]
    fn test_hyphenated_keyword() {
        assert!(contains_keyword("something mind-bending please", "mind-bending"));
        assert!(contains_keyword("a sci-fi classic", "sci-fi"));
    }

    #[test]
    fn test_multi_word_phrase() {
        assert!(contains_keyword("i love science fiction films", "science fiction"));
        assert!(!contains_keyword("science of fiction", "science fiction"));
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert!(contains_keyword("korean, please", "korean"));
        assert!(contains_keyword("(comedy)", "comedy"));
    }

    #[test]
    fn test_rejected_hit_keeps_scanning() {
        // The embedded hit inside "interaction" is rejected, the
        // standalone one later still matches
        assert!(contains_keyword("interaction with action", "action"));
    }

    #[test]
    fn test_non_ascii_text_is_handled() {
        assert!(contains_keyword("un thriller, s'il vous plaît", "thriller"));
        assert!(!contains_keyword("привет мир", "comedy"));
    }

    #[test]
    fn test_genre_table_prefers_specific_phrases() {
        // "science fiction" must appear before any keyword it contains
        let sci_fi_pos = GENRE_KEYWORDS
            .iter()
            .position(|(k, _)| *k == "science fiction")
            .unwrap();
        let action_pos = GENRE_KEYWORDS
            .iter()
            .position(|(k, _)| *k == "action")
            .unwrap();
        assert!(sci_fi_pos < action_pos);
    }
}
