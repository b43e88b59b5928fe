//! Translation of feed titles, summaries, and article bodies through an
//! OpenAI-compatible chat completion backend.
//!
//! Plain strings go through [`Translator::translate_text`]. Markup goes through
//! [`Translator::translate_html`], which translates each text node individually
//! so the surrounding tags come back untouched.

pub mod client;
pub mod error;
pub mod prompt;

mod html;

pub use client::Translator;
pub use error::TranslateError;
