//! Stage one of the article cleanup: strip hostile and chrome markup
//!
//! Removes script/style/comment nodes, executable attributes, and the page
//! chrome that never belongs to the article (masthead, social-share widgets,
//! asides, footers). All remaining text content passes through unchanged.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::ArticleError;
use crate::render::{close_tag, is_void, open_tag, push_text};

/// Masthead header removed wholesale, identified by its id.
const MAIN_HEADER_ID: &str = "mainHeader";
/// Social sharing widgets removed wholesale, identified by class.
const SOCIAL_SHARE_CLASS: &str = "socialShare";

/// Elements whose entire subtree is dropped.
const STRIPPED_TAGS: &[&str] = &["script", "style", "noscript", "aside", "footer"];

/// Clean a raw article page, keeping the full document structure.
pub fn sanitize(html: &str) -> Result<String, ArticleError> {
    if html.trim().is_empty() {
        return Err(ArticleError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    let mut out = String::with_capacity(html.len());
    render_clean(document.root_element(), &mut out);

    debug!(input = html.len(), output = out.len(), "sanitized document");
    Ok(out)
}

fn is_chrome(element: &ElementRef) -> bool {
    let value = element.value();

    if STRIPPED_TAGS.contains(&value.name()) {
        return true;
    }
    if value.name() == "header" && value.id() == Some(MAIN_HEADER_ID) {
        return true;
    }
    value.classes().any(|class| class == SOCIAL_SHARE_CLASS)
}

fn keeps_attribute(name: &str, value: &str) -> bool {
    if name == "style" || name.starts_with("on") {
        return false;
    }
    if (name == "href" || name == "src")
        && value
            .trim_start()
            .to_ascii_lowercase()
            .starts_with("javascript:")
    {
        return false;
    }
    true
}

fn render_clean(element: ElementRef, out: &mut String) {
    let tag = element.value().name();
    let attrs = element
        .value()
        .attrs()
        .filter(|(name, value)| keeps_attribute(name, value));

    open_tag(out, tag, attrs);
    if is_void(tag) {
        return;
    }

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            push_text(out, text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !is_chrome(&child_element) {
                render_clean(child_element, out);
            }
        }
        // comments, doctypes and processing instructions are not re-emitted
    }

    close_tag(out, tag);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_styles_and_comments() {
        let page = r#"<html><head><style>p { color: red; }</style></head>
            <body><p>Lead paragraph.</p>
            <script>alert("x");</script>
            <!-- tracking comment -->
            <p>Second paragraph.</p></body></html>"#;

        let cleaned = sanitize(page).unwrap();

        assert!(cleaned.contains("Lead paragraph."));
        assert!(cleaned.contains("Second paragraph."));
        assert!(!cleaned.contains("script"));
        assert!(!cleaned.contains("alert"));
        assert!(!cleaned.contains("color: red"));
        assert!(!cleaned.contains("tracking comment"));
    }

    #[test]
    fn removes_page_chrome_subtrees() {
        let page = r#"<body>
            <header id="mainHeader"><nav>site nav</nav></header>
            <header class="article-head"><p>kept header</p></header>
            <div class="socialShare"><a href="https://x.example">share</a></div>
            <aside>related stories</aside>
            <article><p>the story itself</p></article>
            <footer>legal</footer>
            <noscript>enable js</noscript>
        </body>"#;

        let cleaned = sanitize(page).unwrap();

        assert!(cleaned.contains("the story itself"));
        assert!(cleaned.contains("kept header"));
        assert!(!cleaned.contains("site nav"));
        assert!(!cleaned.contains("share"));
        assert!(!cleaned.contains("related stories"));
        assert!(!cleaned.contains("legal"));
        assert!(!cleaned.contains("enable js"));
    }

    #[test]
    fn scrubs_executable_attributes() {
        let page = r#"<body><a href="javascript:evil()" onclick="evil()" style="color:red" class="k">link</a>
            <img src="https://img.example/a.jpg" onerror="evil()"></body>"#;

        let cleaned = sanitize(page).unwrap();

        assert!(cleaned.contains(r#"<a class="k">link</a>"#));
        assert!(cleaned.contains(r#"src="https://img.example/a.jpg""#));
        assert!(!cleaned.contains("onclick"));
        assert!(!cleaned.contains("onerror"));
        assert!(!cleaned.contains("javascript:"));
        assert!(!cleaned.contains("style="));
    }

    #[test]
    fn keeps_document_structure() {
        let cleaned = sanitize("<p>Texte de l'article.</p>").unwrap();

        assert!(cleaned.starts_with("<html>"));
        assert!(cleaned.contains("<body><p>Texte de l'article.</p></body>"));
    }

    #[test]
    fn blank_input_is_an_error() {
        assert!(matches!(sanitize("  \n "), Err(ArticleError::EmptyDocument)));
    }
}
