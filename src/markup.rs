// WHY: HTML5 fragment parsing recovers from malformed markup, so tag
// stripping never fails on real-world snippets

use scraper::Html;
use tracing::debug;

use crate::entities::decode_entities;

/// Extract the character data of a markup snippet, discarding tags.
///
/// Parses as an HTML5 fragment (unclosed tags and mismatched nesting are
/// recovered, never an error) and concatenates text nodes in document order.
/// The parser converts character references inside text nodes to literal
/// characters itself.
pub fn strip_tags(markup: &str) -> String {
    Html::parse_fragment(markup).root_element().text().collect()
}

/// Decode character references, then strip tags.
///
/// References are decoded up front so that entity-encoded text outside any
/// tag is already literal by the time the fragment parser sees it.
pub fn normalize_html(markup: &str) -> String {
    let decoded = decode_entities(markup);
    let text = strip_tags(&decoded);
    debug!(
        markup_len = markup.len(),
        text_len = text.len(),
        "stripped markup"
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_anchor() {
        assert_eq!(strip_tags("<a href=\"x\">Waddinxveen</a>"), "Waddinxveen");
    }

    #[test]
    fn test_strip_nested_tags_in_order() {
        assert_eq!(
            strip_tags("<p>Jogo <b>de</b> Furar</p><p>16 Peças</p>"),
            "Jogo de Furar16 Peças"
        );
    }

    #[test]
    fn test_strip_discards_attributes() {
        assert_eq!(
            strip_tags("<img src=\"x.png\" alt=\"hidden\"><span>shown</span>"),
            "shown"
        );
    }

    #[test]
    fn test_strip_tolerates_malformed_markup() {
        assert_eq!(strip_tags("<b>bold <i>both</b> still"), "bold both still");
        assert_eq!(strip_tags("<div>unclosed"), "unclosed");
    }

    #[test]
    fn test_strip_plain_text_passthrough() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
    }

    #[test]
    fn test_strip_parser_decodes_references_in_text() {
        assert_eq!(strip_tags("fish &amp; chips"), "fish & chips");
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_normalize_html_anchor_with_numeric_reference() {
        let markup =
            "<a href=\"../../articles/w/a/d/Waddinxveen.html\" title=\"Waddinxveen\">Waddinxveen</a> | 79&#160;";
        assert_eq!(normalize_html(markup), "Waddinxveen | 79\u{00A0}");
    }

    #[test]
    fn test_normalize_html_decodes_before_stripping() {
        assert_eq!(normalize_html("R&ocirc;mulo - Black&amp;Decker"), "Rômulo - Black&Decker");
    }
}
