// WHY: Suffix-table singularization approximates Brazilian-Portuguese plural
// folding without a morphological analyzer

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::folding::fold_accents;

/// Plural suffix rewrite rules, keyed by lowercase accent-folded suffix.
///
/// The table is observable contract: entries are applied longest-candidate
/// first, and deliberately include rough approximations (e.g. "is" -> "l").
/// Do not "improve" entries without revising the matching contract.
const PLURAL_SUFFIXES: &[(&str, &str)] = &[
    ("neis", "nel"),
    ("veis", "vel"),
    ("teis", "tel"),
    ("aes", "ao"),
    ("aos", "ao"),
    ("oes", "ao"),
    ("res", "r"),
    ("ses", "s"),
    ("men", "man"),
    ("bis", "bil"),
    ("eis", "il"),
    ("cis", "cil"),
    ("dis", "dil"),
    ("fis", "fil"),
    ("mis", "meis"),
    ("nis", "nil"),
    ("tis", "til"),
    ("as", "a"),
    ("es", "e"),
    ("is", "l"),
    ("os", "o"),
    ("us", "u"),
    ("ds", "d"),
    ("gs", "g"),
    ("ns", "m"),
    ("ms", "m"),
    ("ks", "k"),
    ("ts", "t"),
    ("vs", "v"),
    ("ys", "y"),
    ("rs", "r"),
];

static PLURAL_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn plural_table() -> &'static HashMap<&'static str, &'static str> {
    PLURAL_TABLE.get_or_init(|| PLURAL_SUFFIXES.iter().copied().collect())
}

/// Rewrite a plural word form to its approximate singular.
///
/// The word is accent-folded and lowercased first, so the table sees the same
/// canonical form the rest of the pipeline produces. Candidate suffix lengths
/// run from `min(4, len - 1)` down to 1, longest first, and the first hit
/// wins; a word with no matching suffix comes back unchanged. At least one
/// leading character always survives, and inputs of length 1 or 0 produce no
/// candidates at all.
///
/// Not idempotent: re-singularizing an already singular word may strip
/// further. Accepted heuristic behavior.
pub fn singularize(word: &str) -> String {
    let word = fold_accents(word, true);
    // Folded output is pure ASCII, so byte indexing is character indexing
    let len = word.len();
    let longest = if len <= 4 { len.saturating_sub(1) } else { 4 };
    for cut in (1..=longest).rev() {
        let (stem, suffix) = word.split_at(len - cut);
        if let Some(replacement) = plural_table().get(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_plural() {
        assert_eq!(singularize("casas"), "casa");
        assert_eq!(singularize("produtos"), "produto");
    }

    #[test]
    fn test_longest_suffix_wins() {
        // "veis" matches before "eis" or "is" could
        assert_eq!(singularize("automoveis"), "automovel");
        assert_eq!(singularize("pasteis"), "pastel");
    }

    #[test]
    fn test_fall_through_to_shorter_suffix() {
        // "tens"/"ens" are not keys; "ns" -> "m" applies
        assert_eq!(singularize("itens"), "item");
        // "beis" is not a key; "eis" -> "il" applies
        assert_eq!(singularize("contabeis"), "contabil");
    }

    #[test]
    fn test_accents_folded_before_lookup() {
        assert_eq!(singularize("intenções"), "intencao");
        assert_eq!(singularize("pastéis"), "pastel");
        assert_eq!(singularize("contábeis"), "contabil");
    }

    #[test]
    fn test_short_word_caps_candidate_length() {
        // len 4 starts candidates at 3, so the whole word is never a suffix
        assert_eq!(singularize("asas"), "asa");
        // len 2: only the 1-char candidate is tried, and no 1-char keys exist
        assert_eq!(singularize("as"), "as");
    }

    #[test]
    fn test_degenerate_inputs_unchanged() {
        assert_eq!(singularize(""), "");
        assert_eq!(singularize("a"), "a");
        assert_eq!(singularize("s"), "s");
    }

    #[test]
    fn test_no_matching_suffix_unchanged() {
        assert_eq!(singularize("azul"), "azul");
        assert_eq!(singularize("mar"), "mar");
    }

    #[test]
    fn test_rough_entries_apply_as_written() {
        // "is" -> "l" is linguistically rough but part of the contract
        assert_eq!(singularize("lapis"), "lapl");
    }

    #[test]
    fn test_uppercase_input_folded_first() {
        assert_eq!(singularize("CASAS"), "casa");
    }
}
