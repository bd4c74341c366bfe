use serde::Deserialize;
use serde_json::Value;

use crate::extract::{Extract, ParsedDefinitions};

// JSON structures for the Wordnik v4 word.json endpoints
#[derive(Debug, Deserialize)]
struct DefinitionJson {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: Option<String>,
    text: Option<String>,
    #[serde(rename = "wordnikUrl")]
    wordnik_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelatedGroupJson {
    #[serde(rename = "relationshipType")]
    relationship_type: Option<String>,
    words: Option<Vec<String>>,
}

impl RelatedGroupJson {
    fn words(&self) -> &[String] {
        self.words.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unexpected {payload} payload: {source}")]
    Shape {
        payload: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Turn a definitions response into one `*pos*: text` line per entry.
///
/// An empty array means the word is unknown. Missing fields become empty
/// strings rather than failing the whole lookup.
pub fn parse_definitions(json: &Value) -> Result<ParsedDefinitions, ParseError> {
    let entries = Vec::<DefinitionJson>::deserialize(json).map_err(|source| ParseError::Shape {
        payload: "definitions",
        source,
    })?;

    let Some(first) = entries.first() else {
        return Ok(ParsedDefinitions::NotFound);
    };

    let url = first.wordnik_url.clone().unwrap_or_else(|| {
        tracing::warn!("Definitions response has no wordnikUrl");
        String::new()
    });

    let text = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.part_of_speech.is_none() || entry.text.is_none() {
                tracing::warn!("Definition {index} is missing partOfSpeech or text");
            }
            format!(
                "*{}*: {}",
                entry.part_of_speech.as_deref().unwrap_or_default(),
                entry.text.as_deref().unwrap_or_default()
            )
        })
        .collect();

    let extract = Extract::new(text, url);
    tracing::debug!("Definitions extract: {} lines", extract.text.len());
    Ok(ParsedDefinitions::Found(extract))
}

/// Lay out related-word groups as a markdown table, one column per relationship type
pub fn parse_related(json: &Value) -> Result<Extract, ParseError> {
    let groups = Vec::<RelatedGroupJson>::deserialize(json).map_err(|source| ParseError::Shape {
        payload: "related words",
        source,
    })?;

    let header: Vec<&str> = groups
        .iter()
        .map(|g| g.relationship_type.as_deref().unwrap_or_default())
        .collect();
    let separator = vec!["---"; groups.len()];
    let depth = groups.iter().map(|g| g.words().len()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(depth + 2);
    lines.push(table_row(&header));
    lines.push(table_row(&separator));

    for rank in 0..depth {
        let row: Vec<&str> = groups
            .iter()
            .map(|g| g.words().get(rank).map(String::as_str).unwrap_or_default())
            .collect();
        lines.push(table_row(&row));
    }

    tracing::debug!(
        "Related extract: {} groups, {} rows",
        groups.len(),
        depth
    );
    Ok(Extract::new(lines, String::new()))
}

fn table_row(cells: &[&str]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        row.push_str(cell);
        row.push_str(" |");
    }
    row
}
