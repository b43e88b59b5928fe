//! Chat-completion client for translating titles, summaries, and article bodies.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, instrument, warn};

use crate::error::TranslateError;
use crate::html;
use crate::prompt;

/// Client for an OpenAI-compatible chat completion backend, configured once
/// per run with the endpoint, credential, and model to use.
#[derive(Debug, Clone)]
pub struct Translator {
    client: Client<OpenAIConfig>,
    model: String,
    template: Option<String>,
}

impl Translator {
    /// Creates a translator against `api_base`, or the default OpenAI
    /// endpoint when `api_base` is `None`.
    pub fn new(api_base: Option<&str>, api_key: &str, model: &str) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
            template: None,
        }
    }

    /// Replaces the built-in instruction with an operator-supplied template.
    /// `{source_lang}` and `{target_lang}` placeholders are substituted per call.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Translates a plain string. Sampling is pinned to temperature 0 so
    /// repeated calls on the same input stay as repeatable as the backend
    /// allows.
    #[instrument(skip(self, text))]
    pub async fn translate_text(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: Option<&str>,
    ) -> Result<String, TranslateError> {
        let instruction = prompt::system_prompt(self.template.as_deref(), source_lang, target_lang);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(instruction)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(text)
                    .build()?
                    .into(),
            ])
            .temperature(0.0)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .ok_or(TranslateError::EmptyCompletion)?;

        Ok(content.clone())
    }

    /// Translates every non-blank text node of an HTML fragment, leaving the
    /// markup around them untouched.
    ///
    /// Fails open: if any node translation errors out, the original fragment
    /// is returned unchanged, since a half-translated article reads worse
    /// than an untranslated one.
    #[instrument(skip(self, content))]
    pub async fn translate_html(
        &self,
        content: &str,
        source_lang: Option<&str>,
        target_lang: Option<&str>,
    ) -> String {
        let texts = html::text_nodes(content);
        if texts.is_empty() {
            return content.to_string();
        }

        let mut translations = Vec::with_capacity(texts.len());
        for text in &texts {
            match self.translate_text(text, source_lang, target_lang).await {
                Ok(translation) => {
                    debug!(original = %text, translated = %translation, "Translated text node");
                    translations.push(translation);
                }
                Err(error) => {
                    warn!(%error, "Node translation failed, keeping the original content");
                    return content.to_string();
                }
            }
        }

        html::replace_text_nodes(content, &translations)
    }
}
