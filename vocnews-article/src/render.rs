//! Shared HTML re-serialization helpers for the cleanup stages

/// Tags serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Write an opening tag with the given attributes, values quoted and escaped.
pub(crate) fn open_tag<'a>(
    out: &mut String,
    tag: &str,
    attrs: impl Iterator<Item = (&'a str, &'a str)>,
) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');
}

pub(crate) fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

pub(crate) fn push_text(out: &mut String, text: &str) {
    out.push_str(&html_escape::encode_text(text));
}
