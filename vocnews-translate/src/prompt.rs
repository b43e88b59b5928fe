//! System instruction templates for the translation backend.
//!
//! A language of `None`, `""`, or the literal `"auto"` means "unspecified":
//! an unspecified source is omitted from the instruction so the model infers
//! it, and an unspecified target falls back to English.

const FALLBACK_TARGET: &str = "English";

/// Builds the built-in translator instruction for the given language pair.
pub fn default_system_prompt(source_lang: Option<&str>, target_lang: Option<&str>) -> String {
    let target = named_language(target_lang).unwrap_or(FALLBACK_TARGET);
    match named_language(source_lang) {
        Some(source) => format!(
            "You are a professional translator. \
             please translate the following in {source} into {target}, \
             do not give any text other than the translated content, \
             and trim the spaces at the end:"
        ),
        None => format!(
            "You are a professional translator. \
             please translate the following into {target}, \
             do not give any text other than the translated content, \
             and trim the spaces at the end:"
        ),
    }
}

/// Resolves the instruction to send: an operator-supplied template with
/// `{source_lang}`/`{target_lang}` substituted, or the built-in default.
pub fn system_prompt(
    template: Option<&str>,
    source_lang: Option<&str>,
    target_lang: Option<&str>,
) -> String {
    match template {
        Some(template) if !template.is_empty() => template
            .replace("{source_lang}", source_lang.unwrap_or("auto"))
            .replace("{target_lang}", target_lang.unwrap_or(FALLBACK_TARGET)),
        _ => default_system_prompt(source_lang, target_lang),
    }
}

fn named_language(lang: Option<&str>) -> Option<&str> {
    lang.map(str::trim)
        .filter(|lang| !lang.is_empty() && !lang.eq_ignore_ascii_case("auto"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH_DEFAULT: &str = "You are a professional translator. \
         please translate the following into English, \
         do not give any text other than the translated content, \
         and trim the spaces at the end:";

    #[test]
    fn no_arguments_targets_english() {
        assert_eq!(default_system_prompt(None, None), ENGLISH_DEFAULT);
    }

    #[test]
    fn auto_for_both_languages_targets_english() {
        assert_eq!(
            default_system_prompt(Some("auto"), Some("auto")),
            ENGLISH_DEFAULT
        );
    }

    #[test]
    fn auto_source_is_left_out_of_the_instruction() {
        let prompt = default_system_prompt(Some("auto"), Some("French"));
        assert_eq!(
            prompt,
            "You are a professional translator. \
             please translate the following into French, \
             do not give any text other than the translated content, \
             and trim the spaces at the end:"
        );
        assert!(!prompt.contains("auto"));
    }

    #[test]
    fn explicit_source_names_both_languages() {
        assert_eq!(
            default_system_prompt(Some("French"), Some("Simple Chinese")),
            "You are a professional translator. \
             please translate the following in French into Simple Chinese, \
             do not give any text other than the translated content, \
             and trim the spaces at the end:"
        );
    }

    #[test]
    fn blank_languages_behave_like_absent_ones() {
        assert_eq!(default_system_prompt(Some(""), Some("  ")), ENGLISH_DEFAULT);
    }

    #[test]
    fn template_substitutes_both_placeholders() {
        let prompt = system_prompt(
            Some("Translate {source_lang} news into {target_lang}."),
            Some("French"),
            Some("English"),
        );
        assert_eq!(prompt, "Translate French news into English.");
    }

    #[test]
    fn template_without_placeholders_is_used_verbatim() {
        let prompt = system_prompt(Some("Reply in pirate speak."), Some("French"), None);
        assert_eq!(prompt, "Reply in pirate speak.");
    }

    #[test]
    fn empty_template_falls_back_to_the_default() {
        assert_eq!(system_prompt(Some(""), None, None), ENGLISH_DEFAULT);
        assert_eq!(system_prompt(None, None, None), ENGLISH_DEFAULT);
    }

    #[test]
    fn absent_languages_fill_the_template_with_defaults() {
        let prompt = system_prompt(Some("{source_lang} -> {target_lang}"), None, None);
        assert_eq!(prompt, "auto -> English");
    }
}
