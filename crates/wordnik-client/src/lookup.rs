use serde_json::Value;
use url::Url;
use wordnik_config::Settings;
use wordnik_core::{Extract, ParsedDefinitions, parse_definitions, parse_related, render};

use crate::api;
use crate::transport::{Transport, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Failed to get Wordnik data. Check your internet connection.")]
    Transport(#[from] TransportError),

    #[error("{term} not found in the wordnik database.")]
    NotFound { term: String },
}

/// Runs one lookup: both API calls, parsing, and rendering with the stored template
pub struct WordLookup<T> {
    transport: T,
}

impl<T: Transport> WordLookup<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Look up `search_term` and return the markdown to insert.
    ///
    /// Both requests are in flight together. The definitions outcome is checked
    /// first, and nothing is rendered until both have resolved.
    pub async fn lookup(
        &self,
        settings: &Settings,
        search_term: &str,
    ) -> Result<String, LookupError> {
        let definitions_url = api::definitions_url(search_term, &settings.api_key)?;
        let related_url = api::related_words_url(search_term, &settings.api_key)?;

        let (definitions, related) = tokio::join!(
            self.fetch_json(&definitions_url),
            self.fetch_json(&related_url)
        );

        let extract = match parse_definitions(&definitions?) {
            Ok(ParsedDefinitions::Found(extract)) => extract,
            Ok(ParsedDefinitions::NotFound) => {
                tracing::info!("No definitions for {search_term:?}");
                return Err(LookupError::NotFound {
                    term: search_term.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!("Unusable definitions for {search_term:?}: {e}");
                return Err(LookupError::NotFound {
                    term: search_term.to_string(),
                });
            }
        };

        let related = self.related_extract(&related?);

        let max_definitions = usize::try_from(settings.max_definitions).unwrap_or(usize::MAX);
        Ok(render(
            &settings.template,
            &extract,
            related.as_ref(),
            search_term,
            Some(max_definitions),
        ))
    }

    async fn fetch_json(&self, url: &Url) -> Result<Value, TransportError> {
        tracing::debug!("GET {}", api::redacted(url));
        let body = self.transport.get(url).await.inspect_err(|e| {
            tracing::error!("Request to {} failed: {e}", api::redacted(url));
        })?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }

    fn related_extract(&self, json: &Value) -> Option<Extract> {
        match parse_related(json) {
            Ok(extract) => Some(extract),
            Err(e) => {
                tracing::warn!("Skipping related words: {e}");
                None
            }
        }
    }
}
