//! Dynamic lexicon acquisition
//!
//! Deployments that maintain their sentiment word lists in a lookup service
//! fetch them once per session instead of compiling them in. The fetch is a
//! single read-only GET returning `{"positive": [...], "negative": [...]}`.
//!
//! Loading never fails from the caller's point of view: any error — network
//! failure, non-2xx status, malformed payload, empty positive list, or
//! timeout — is logged and degrades to [`SentimentLexicon::fallback`]. The
//! [`LexiconLoader`] state machine (`Idle → Loading → Ready`) therefore
//! always terminates in `Ready`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::lexicon::SentimentLexicon;

/// Default bound on the lexicon fetch. The upstream service has no
/// contractual latency, so a hung request falls back instead of holding the
/// loader in `Loading`.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Wire shape of the lexicon service response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconPayload {
    #[serde(default)]
    pub positive: Vec<String>,

    #[serde(default)]
    pub negative: Vec<String>,
}

impl LexiconPayload {
    /// Convert the payload into a usable lexicon.
    ///
    /// A payload with no positive entries is indistinguishable from a
    /// misconfigured service and is treated as a failed fetch.
    pub fn into_lexicon(self) -> Result<SentimentLexicon, LexiconFetchError> {
        if self.positive.is_empty() {
            return Err(LexiconFetchError::Empty);
        }
        Ok(SentimentLexicon::from_word_lists(
            self.positive,
            self.negative,
        ))
    }
}

/// Why a lexicon fetch was abandoned. Internal to the loading path — the
/// public API degrades to the fallback lexicon instead of surfacing this.
#[derive(Debug, Error)]
pub enum LexiconFetchError {
    #[error("lexicon request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lexicon payload has no positive entries")]
    Empty,
}

/// Client for the lexicon lookup service.
#[derive(Debug, Clone)]
pub struct RemoteLexicon {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl RemoteLexicon {
    /// Create a client for the given lexicon endpoint with the default
    /// timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a caller-provided HTTP client (shared pools, proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<SentimentLexicon, LexiconFetchError> {
        let resp = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let payload: LexiconPayload = resp.json().await?;
        payload.into_lexicon()
    }

    /// Fetch the lexicon, degrading to the built-in fallback on any
    /// failure. Always returns a usable lexicon.
    pub async fn load(&self) -> SentimentLexicon {
        match self.fetch().await {
            Ok(lexicon) => {
                debug!(
                    "Lexicon fetch completed - url={}, positive={}, negative={}",
                    self.url,
                    lexicon.positive_len(),
                    lexicon.negative_len()
                );
                lexicon
            }
            Err(err) => {
                warn!(
                    "Lexicon fetch failed, using fallback - url={}, error={}",
                    self.url, err
                );
                SentimentLexicon::fallback()
            }
        }
    }
}

/// Loading state of the session lexicon.
///
/// Consumers render a "loading" placeholder until the loader is `Ready`;
/// classification never runs against a partial or empty lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconState {
    Idle,
    Loading,
    Ready(SentimentLexicon),
}

impl LexiconState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The loaded lexicon, if `Ready`.
    pub fn lexicon(&self) -> Option<&SentimentLexicon> {
        match self {
            Self::Ready(lexicon) => Some(lexicon),
            _ => None,
        }
    }
}

/// One-shot session lexicon loader.
///
/// Drives `Idle → Loading → Ready` exactly once; the loaded lexicon is
/// cached for the rest of the session and handed out as an immutable
/// reference. There is no cancellation: a load in flight runs to
/// completion (or to its timeout) before classification proceeds.
#[derive(Debug)]
pub struct LexiconLoader {
    source: RemoteLexicon,
    state: LexiconState,
}

impl LexiconLoader {
    /// Create an idle loader for the given source.
    pub fn new(source: RemoteLexicon) -> Self {
        Self {
            source,
            state: LexiconState::Idle,
        }
    }

    /// Current loading state.
    pub fn state(&self) -> &LexiconState {
        &self.state
    }

    /// Load the lexicon if not yet loaded, then return it.
    ///
    /// The first call performs the fetch (with fallback on failure); later
    /// calls return the cached lexicon without touching the network.
    pub async fn ensure_loaded(&mut self) -> &SentimentLexicon {
        if !self.state.is_ready() {
            self.state = LexiconState::Loading;
            let lexicon = self.source.load().await;
            self.state = LexiconState::Ready(lexicon);
        }

        match &self.state {
            LexiconState::Ready(lexicon) => lexicon,
            _ => unreachable!("load always transitions to Ready"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    #[test]
    fn test_payload_deserializes_service_shape() {
        let json = r#"{ "positive": ["great", "clear"], "negative": ["slow"] }"#;
        let payload: LexiconPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.positive, vec!["great", "clear"]);
        assert_eq!(payload.negative, vec!["slow"]);
    }

    #[test]
    fn test_payload_missing_fields_default_to_empty() {
        let payload: LexiconPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.positive.is_empty());
        assert!(payload.negative.is_empty());
    }

    #[test]
    fn test_payload_into_lexicon() {
        let payload = LexiconPayload {
            positive: vec!["Great".into()],
            negative: vec!["Slow".into()],
        };
        let lexicon = payload.into_lexicon().unwrap();
        assert_eq!(lexicon.classify("great"), Sentiment::Positive);
        assert_eq!(lexicon.classify("slow"), Sentiment::Negative);
    }

    #[test]
    fn test_empty_positive_list_is_an_error() {
        let payload = LexiconPayload {
            positive: vec![],
            negative: vec!["slow".into()],
        };
        assert!(matches!(
            payload.into_lexicon(),
            Err(LexiconFetchError::Empty)
        ));
    }

    #[test]
    fn test_loader_starts_idle() {
        let loader = LexiconLoader::new(RemoteLexicon::new("http://localhost/lexicon"));
        assert_eq!(*loader.state(), LexiconState::Idle);
        assert!(loader.state().lexicon().is_none());
    }
}
