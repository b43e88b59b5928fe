//! Caption assembly for photo notifications.
//!
//! A caption carries the translated title linked to the mirror page, the
//! translated summary, and a `Mirror | Original` footer. Captions are sent
//! with HTML parse mode, so text is escaped here and the whole string is
//! capped at [`CAPTION_LIMIT`] characters.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Maximum caption length accepted by the messaging channel.
pub const CAPTION_LIMIT: usize = 1024;

/// Builds the notification caption, shrinking the summary when the full
/// caption would exceed [`CAPTION_LIMIT`].
///
/// The title and both links always survive the cut; only when they alone
/// overrun the limit does the caption get truncated outright.
pub fn build_caption(title: &str, summary: &str, mirror_url: &str, original_url: &str) -> String {
    let full = compose(title, summary, mirror_url, original_url);
    if full.chars().count() <= CAPTION_LIMIT {
        return full;
    }

    let overhead = compose(title, "", mirror_url, original_url).chars().count();
    let mut room = CAPTION_LIMIT.saturating_sub(overhead + 1);
    loop {
        let shortened: String = summary.chars().take(room).collect();
        let caption = compose(title, &format!("{shortened}…"), mirror_url, original_url);
        let length = caption.chars().count();
        if length <= CAPTION_LIMIT {
            return caption;
        }
        if room == 0 {
            return caption.chars().take(CAPTION_LIMIT).collect();
        }
        // Escaping can expand the summary past the estimate; shrink by the
        // overage and try again.
        room = room.saturating_sub(length - CAPTION_LIMIT);
    }
}

fn compose(title: &str, summary: &str, mirror_url: &str, original_url: &str) -> String {
    let title = encode_text(title);
    let summary = encode_text(summary);
    let mirror_href = encode_double_quoted_attribute(mirror_url);
    let original_href = encode_double_quoted_attribute(original_url);

    format!(
        "<a href=\"{mirror_href}\">{title}</a>\n\n{summary}\n\n\
         <a href=\"{mirror_href}\">Mirror</a> | <a href=\"{original_href}\">Original</a>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIRROR: &str = "https://telegra.ph/exemple-01-01";
    const ORIGINAL: &str = "https://exemple.ca/article";

    #[test]
    fn caption_links_title_to_the_mirror_page() {
        let caption = build_caption("Le titre", "Le chapeau.", MIRROR, ORIGINAL);
        assert_eq!(
            caption,
            "<a href=\"https://telegra.ph/exemple-01-01\">Le titre</a>\n\n\
             Le chapeau.\n\n\
             <a href=\"https://telegra.ph/exemple-01-01\">Mirror</a> | \
             <a href=\"https://exemple.ca/article\">Original</a>"
        );
    }

    #[test]
    fn markup_characters_are_escaped() {
        let caption = build_caption("Gains & pertes", "1 < 2", MIRROR, ORIGINAL);
        assert!(caption.contains("Gains &amp; pertes"));
        assert!(caption.contains("1 &lt; 2"));
    }

    #[test]
    fn long_summary_is_trimmed_to_the_limit() {
        let summary = "a".repeat(3000);
        let caption = build_caption("Titre", &summary, MIRROR, ORIGINAL);
        assert_eq!(caption.chars().count(), CAPTION_LIMIT);
        assert!(caption.contains('…'));
        assert!(caption.contains(">Titre</a>"));
        assert!(caption.contains(">Mirror</a>"));
        assert!(caption.contains(">Original</a>"));
    }

    #[test]
    fn trimming_counts_characters_not_bytes() {
        let summary = "é".repeat(3000);
        let caption = build_caption("Titre", &summary, MIRROR, ORIGINAL);
        assert_eq!(caption.chars().count(), CAPTION_LIMIT);
    }

    #[test]
    fn escaped_summary_still_fits_the_limit() {
        let summary = "&".repeat(3000);
        let caption = build_caption("Titre", &summary, MIRROR, ORIGINAL);
        assert!(caption.chars().count() <= CAPTION_LIMIT);
        assert!(caption.contains(">Original</a>"));
    }

    #[test]
    fn short_captions_are_left_alone() {
        let caption = build_caption("T", "S", MIRROR, ORIGINAL);
        assert!(caption.chars().count() < CAPTION_LIMIT);
        assert!(!caption.contains('…'));
    }
}
