//! Stage two of the article cleanup: project onto the publishing vocabulary
//!
//! The publishing target accepts only a small whitelist of tags, so the
//! cleaned document is re-parsed and every structural-but-semantically-empty
//! wrapper is unwrapped, heading levels are downgraded to the target's
//! hierarchy, and generic inline spans become bold emphasis. The output is
//! the inner markup of the body only.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ArticleError;
use crate::render::{close_tag, is_void, open_tag, push_text};

/// Decorative containers removed together with their contents.
const DROPPED_CLASSES: &[&str] = &["badgeCollection", "author"];

/// Wrappers whose tag is discarded while their children are kept.
const UNWRAPPED_TAGS: &[&str] = &[
    "div", "section", "article", "header", "small", "source", "time",
];

/// Substitutions into the target's restricted tag set.
fn rename(tag: &str) -> &str {
    match tag {
        "h1" => "h3",
        "h2" => "h4",
        "span" => "b",
        other => other,
    }
}

/// Reduce a sanitized document to body-inner markup the publishing target
/// accepts.
pub fn reshape(html: &str) -> Result<String, ArticleError> {
    if html.trim().is_empty() {
        return Err(ArticleError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    let body_selector = Selector::parse("body").expect("static selector");
    let body = document
        .select(&body_selector)
        .next()
        .ok_or(ArticleError::MissingBody)?;

    let mut out = String::with_capacity(html.len());
    render_children(body, &mut out, false);

    debug!(input = html.len(), output = out.len(), "reshaped document");
    Ok(out)
}

fn is_dropped(element: &ElementRef, in_header: bool) -> bool {
    let value = element.value();

    if value
        .classes()
        .any(|class| DROPPED_CLASSES.contains(&class))
    {
        return true;
    }
    // A heading inside a masthead header repeats the page title, which the
    // publishing target already renders on its own.
    in_header && value.name() == "h1"
}

fn render_element(element: ElementRef, out: &mut String, in_header: bool) {
    let tag = element.value().name();
    let in_header = in_header || tag == "header";

    if UNWRAPPED_TAGS.contains(&tag) {
        render_children(element, out, in_header);
        return;
    }

    let renamed = rename(tag);
    open_tag(out, renamed, element.value().attrs());
    if is_void(renamed) {
        return;
    }
    render_children(element, out, in_header);
    close_tag(out, renamed);
}

fn render_children(element: ElementRef, out: &mut String, in_header: bool) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            push_text(out, text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !is_dropped(&child_element, in_header) {
                render_element(child_element, out, in_header);
            }
        }
    }
}
