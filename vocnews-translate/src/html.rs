//! Text-node decomposition for translating markup without disturbing tags.
//!
//! A fragment is split into its text nodes, the non-blank ones are translated
//! elsewhere, and the results are swapped back into the same tree positions
//! before re-serializing. Both passes visit nodes in document order, so the
//! Nth collected text always lines up with the Nth replacement.

use scraper::{Html, Node};

/// Collects the non-blank text nodes of `fragment` in document order,
/// trimmed of surrounding whitespace.
pub(crate) fn text_nodes(fragment: &str) -> Vec<String> {
    let parsed = Html::parse_fragment(fragment);
    let mut texts = Vec::new();
    for node in parsed.root_element().descendants() {
        if let Some(text) = node.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                texts.push(trimmed.to_string());
            }
        }
    }
    texts
}

/// Re-renders `fragment` with its Nth non-blank text node swapped for
/// `replacements[N]`. Whitespace-only nodes keep their original content so
/// the spacing between elements survives.
pub(crate) fn replace_text_nodes(fragment: &str, replacements: &[String]) -> String {
    let mut parsed = Html::parse_fragment(fragment);

    let targets: Vec<_> = parsed
        .root_element()
        .descendants()
        .filter(|node| {
            node.value()
                .as_text()
                .is_some_and(|text| !text.trim().is_empty())
        })
        .map(|node| node.id())
        .collect();

    for (id, replacement) in targets.into_iter().zip(replacements) {
        if let Some(mut node) = parsed.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                text.text = replacement.as_str().into();
            }
        }
    }

    parsed.root_element().inner_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_only_non_blank_text() {
        let texts = text_nodes("<h3>Bonjour</h3>\n  <p><b>le</b> monde</p>");
        assert_eq!(texts, vec!["Bonjour", "le", "monde"]);
    }

    #[test]
    fn empty_fragment_has_no_text() {
        assert!(text_nodes("").is_empty());
        assert!(text_nodes("<div>\n   </div>").is_empty());
    }

    #[test]
    fn replaces_nodes_in_document_order() {
        let reassembled = replace_text_nodes(
            "<h3>Un</h3><p><b>Deux</b></p><p>Trois</p>",
            &["One".to_string(), "Two".to_string(), "Three".to_string()],
        );
        assert_eq!(reassembled, "<h3>One</h3><p><b>Two</b></p><p>Three</p>");
    }

    #[test]
    fn whitespace_only_nodes_are_preserved() {
        let reassembled = replace_text_nodes("<p>a</p>\n<p>b</p>", &["x".to_string(), "y".to_string()]);
        assert_eq!(reassembled, "<p>x</p>\n<p>y</p>");
    }

    #[test]
    fn replacement_text_is_escaped_on_render() {
        let reassembled = replace_text_nodes("<p>montant</p>", &["5 < 6 & 7".to_string()]);
        assert_eq!(reassembled, "<p>5 &lt; 6 &amp; 7</p>");
    }

    #[test]
    fn markup_survives_substitution() {
        let reassembled = replace_text_nodes(
            r#"<p><a href="https://exemple.ca/a">lien</a></p>"#,
            &["link".to_string()],
        );
        assert_eq!(reassembled, r#"<p><a href="https://exemple.ca/a">link</a></p>"#);
    }
}
