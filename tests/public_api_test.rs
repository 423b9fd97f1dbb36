// Every root re-export must be reachable and behave per its contract
// WHY: external users consume the crate through these re-exports

use textkey::{
    collapse_non_word, decode_entities, fold_accents, normalize_html, normalize_text, singularize,
    strip_tags,
};

#[test]
fn test_decode_entities_reexport() {
    assert_eq!(decode_entities("&amp;"), "&");
    assert_eq!(decode_entities("&#65;&#x41;"), "AA");
    assert_eq!(decode_entities("&zzz;"), "&zzz;");
}

#[test]
fn test_strip_tags_reexport() {
    assert_eq!(strip_tags("<a href=\"x\">Waddinxveen</a>"), "Waddinxveen");
}

#[test]
fn test_normalize_html_reexport() {
    assert_eq!(normalize_html("<b>79</b>&#160;"), "79\u{00A0}");
}

#[test]
fn test_fold_accents_reexport() {
    assert_eq!(fold_accents("Rômulo", true), "romulo");
    assert_eq!(fold_accents("Rômulo", false), "Romulo");
}

#[test]
fn test_collapse_non_word_reexport() {
    assert_eq!(collapse_non_word("a&b  c"), "a b c");
}

#[test]
fn test_normalize_text_reexport() {
    assert_eq!(normalize_text("d'água"), "dagua");
    assert_eq!(normalize_text("Black&Decker"), "black decker");
}

#[test]
fn test_singularize_reexport() {
    assert_eq!(singularize("casas"), "casa");
    assert_eq!(singularize("a"), "a");
}

#[test]
fn test_functions_are_thread_safe() {
    // Tables and patterns are read-only after first use; concurrent calls
    // must agree
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                assert_eq!(normalize_text("Peças R&ocirc;mulo"), "pecas r ocirc mulo");
                assert_eq!(singularize("itens"), "item");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}
