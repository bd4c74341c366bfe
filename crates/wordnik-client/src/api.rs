use url::Url;

use crate::transport::TransportError;

pub const API_BASE: &str = "https://api.wordnik.com/v4/word.json";

const DEFINITIONS_QUERY: [(&str, &str); 4] = [
    ("limit", "200"),
    ("includeRelated", "false"),
    ("useCanonical", "false"),
    ("includeTags", "false"),
];

const RELATED_WORDS_QUERY: [(&str, &str); 2] = [
    ("useCanonical", "false"),
    ("limitPerRelationshipType", "10"),
];

/// `GET /word.json/{term}/definitions`
pub fn definitions_url(term: &str, api_key: &str) -> Result<Url, TransportError> {
    word_url(term, "definitions", &DEFINITIONS_QUERY, api_key)
}

/// `GET /word.json/{term}/relatedWords`
pub fn related_words_url(term: &str, api_key: &str) -> Result<Url, TransportError> {
    word_url(term, "relatedWords", &RELATED_WORDS_QUERY, api_key)
}

fn word_url(
    term: &str,
    resource: &str,
    query: &[(&str, &str)],
    api_key: &str,
) -> Result<Url, TransportError> {
    let mut url = Url::parse(API_BASE).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

    // The term is one path segment, so `/`, `?` and `%` get escaped too
    url.path_segments_mut()
        .map_err(|_| TransportError::InvalidUrl(API_BASE.to_string()))?
        .push(term)
        .push(resource);

    url.query_pairs_mut()
        .extend_pairs(query)
        .append_pair("api_key", api_key);

    Ok(url)
}

/// URL with the api key masked, for logs
pub fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
