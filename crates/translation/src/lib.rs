//! Optional text translation helpers.
//!
//! Best-effort machine translation of Uzbek catalog text over the free
//! Google Translate web endpoint (`client=gtx`). Any failure (network,
//! timeout, quota, payload shape) surfaces as a [`TranslationError`];
//! callers are expected to treat a failure as "no translation available"
//! and carry on.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const GTX_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Catalog text is authored in Uzbek; it is always the source language.
const SOURCE_LANG: &str = "uz";

/// The endpoint is rate limited and occasionally slow; a hanging request
/// must not stall an administrative save.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    Request(String),

    #[error("Unexpected translation payload: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        TranslationError::Request(err.to_string())
    }
}

/// Contract for a text translation collaborator.
#[async_trait]
pub trait TranslatorTrait: Send + Sync {
    /// Translate `text` from Uzbek into `target_lang` (`"ru"` or `"en"`).
    ///
    /// Blank input is returned unchanged without a network round trip.
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError>;
}

/// Translator backed by the free `translate.googleapis.com` gtx endpoint.
pub struct GtxTranslator {
    client: reqwest::Client,
}

impl GtxTranslator {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for GtxTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslatorTrait for GtxTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let response = self
            .client
            .get(GTX_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_LANG),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .header(reqwest::header::USER_AGENT, "Mozilla/5.0")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        let translated = join_segments(&payload)?;
        log::debug!("Translated {} chars to '{}'", text.len(), target_lang);
        Ok(translated)
    }
}

/// The gtx payload is a nested array; the first element holds the
/// translation split into segments, each segment's first element being the
/// translated chunk.
fn join_segments(payload: &Value) -> Result<String, TranslationError> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::Payload(payload.to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(chunk) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(chunk);
        }
    }

    if translated.is_empty() {
        return Err(TranslationError::Payload(payload.to_string()));
    }

    Ok(translated)
}
