/// Label every extract carries in place of the headword
pub const EXTRACT_TITLE: &str = "word";

/// Normalized result of one dictionary API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extract {
    pub title: String,
    /// Lines in API response order
    pub text: Vec<String>,
    /// Reference URL, empty for related words
    pub url: String,
}

impl Extract {
    pub fn new(text: Vec<String>, url: String) -> Self {
        Self {
            title: EXTRACT_TITLE.to_string(),
            text,
            url,
        }
    }
}

/// Outcome of parsing a definitions payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDefinitions {
    Found(Extract),
    NotFound,
}
