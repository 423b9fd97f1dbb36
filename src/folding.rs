// WHY: Accent folding and separator collapsing produce the canonical ASCII
// search-key form shared by every matching path

use regex_automata::meta::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

static NON_WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn non_word_pattern() -> &'static Regex {
    NON_WORD_PATTERN.get_or_init(|| Regex::new(r"\W+").expect("non-word pattern must compile"))
}

/// Fold accented text down to plain ASCII.
///
/// Applies compatibility decomposition (NFKD) so diacritics split off their
/// base letters, then drops every non-ASCII character. Combining marks vanish
/// with the diacritic; characters with no decomposition (CJK, emoji) are
/// dropped entirely rather than transliterated. Output is always valid ASCII.
pub fn fold_accents(text: &str, lowercase: bool) -> String {
    let folded: String = text.nfkd().filter(char::is_ascii).collect();
    if lowercase {
        folded.to_ascii_lowercase()
    } else {
        folded
    }
}

/// Replace every maximal run of non-word characters with a single space.
///
/// Word characters are letters, digits, and underscore. Leading and trailing
/// runs still become one space each; callers wanting trimmed output trim
/// themselves.
pub fn collapse_non_word(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut tail = 0;
    for m in non_word_pattern().find_iter(text) {
        result.push_str(&text[tail..m.start()]);
        result.push(' ');
        tail = m.end();
    }
    result.push_str(&text[tail..]);
    result
}

/// Normalize free-form text into the canonical search-key form.
///
/// Apostrophes are removed outright (a distinct pre-pass, so "d'água"
/// contracts to "dagua" with no space), then accents are folded with
/// lowercasing, then non-word runs collapse to single spaces.
pub fn normalize_text(text: &str) -> String {
    let without_apostrophes = text.replace('\'', "");
    collapse_non_word(&fold_accents(&without_apostrophes, true))
}
