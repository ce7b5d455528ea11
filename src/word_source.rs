//! Word sources that feed new rounds.
//!
//! The game core only needs a word; where it comes from is behind the
//! [`WordSource`] trait. [`HttpWordSource`] asks the public random-word API,
//! [`FixedWordSource`] cycles through a list for offline play and tests.

use crate::language::Language;
use strictly_hangman_core::normalize;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, error, info, instrument, warn};

/// Default endpoint of the random-word API.
pub const DEFAULT_WORD_API_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Error that can occur while fetching a word.
///
/// Callers treat every variant the same way: no word is available.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FetchError {
    /// The configured endpoint is not a valid URL.
    #[display("Invalid word API URL {:?}: {}", _0, _1)]
    InvalidUrl(String, String),

    /// The request could not be sent or the body could not be read.
    #[display("Word API request failed: {}", _0)]
    Network(String),

    /// The API answered with a non-2xx status.
    #[display("Word API returned HTTP {}", _0)]
    Status(u16),

    /// The body was not a JSON array holding a word.
    #[display("Unexpected word API response: {}", _0)]
    Malformed(String),
}

impl std::error::Error for FetchError {}

/// Something that can supply a random word for a new round.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetches one word, optionally in the given language.
    async fn fetch_random_word(&self, language: Option<Language>) -> Result<String, FetchError>;
}

/// Word source backed by the random-word HTTP API.
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    base_url: reqwest::Url,
    client: reqwest::Client,
}

impl HttpWordSource {
    /// Creates a source for the given endpoint.
    #[instrument]
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Creates a source that sends requests through an existing client.
    #[instrument(skip(client))]
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, FetchError> {
        let base_url = reqwest::Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        debug!(%base_url, "Creating HTTP word source");
        Ok(Self { base_url, client })
    }

    /// Returns the request URL for a language.
    ///
    /// English and "no preference" both use the API default.
    pub fn request_url(&self, language: Option<Language>) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Some(code) = language.and_then(Language::api_code) {
            url.query_pairs_mut().append_pair("lang", code);
        }
        url
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    #[instrument(skip(self))]
    async fn fetch_random_word(&self, language: Option<Language>) -> Result<String, FetchError> {
        let url = self.request_url(language);
        info!(%url, "Fetching random word");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = ?e, "Word API request failed");
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Word API returned error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read word API response");
            FetchError::Network(e.to_string())
        })?;

        parse_word_response(&body)
    }
}

/// Extracts the word from an API body such as `["apple"]`.
///
/// The first element is returned uppercased with the same per-letter rule
/// the game uses, so `ß` stays one letter. Anything other than a
/// non-empty array of strings is [`FetchError::Malformed`].
#[instrument(skip(body), fields(body_len = body.len()))]
pub fn parse_word_response(body: &str) -> Result<String, FetchError> {
    let words: Vec<String> = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Word API body is not a list of strings");
        FetchError::Malformed(e.to_string())
    })?;

    let word = words
        .into_iter()
        .next()
        .map(|w| w.trim().chars().map(normalize).collect::<String>())
        .filter(|w| !w.is_empty())
        .ok_or_else(|| FetchError::Malformed("no word in response".to_string()))?;

    debug!(word_len = word.chars().count(), "Word received");
    Ok(word)
}

/// Word source that cycles through a fixed list.
///
/// Ignores the language; used for offline play and tests.
#[derive(Debug)]
pub struct FixedWordSource {
    words: Vec<String>,
    next: AtomicUsize,
}

impl FixedWordSource {
    /// Creates a source over the given words.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WordSource for FixedWordSource {
    #[instrument(skip(self))]
    async fn fetch_random_word(&self, _language: Option<Language>) -> Result<String, FetchError> {
        if self.words.is_empty() {
            return Err(FetchError::Malformed("word list is empty".to_string()));
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.words.len();
        debug!(index, "Serving fixed word");
        Ok(self.words[index].clone())
    }
}
