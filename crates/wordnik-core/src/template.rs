use crate::extract::Extract;

/// Template variables recognized by [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Text,
    RelatedWords,
    SearchTerm,
    Url,
}

impl Placeholder {
    const ALL: [Placeholder; 4] = [Self::Text, Self::RelatedWords, Self::SearchTerm, Self::Url];

    fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::RelatedWords => "relatedWords",
            Self::SearchTerm => "searchTerm",
            Self::Url => "url",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Fill `template` with the extracts of one lookup.
///
/// Every occurrence of a known `{{placeholder}}` is replaced in a single scan,
/// so substituted values are never rescanned. Unknown tokens are kept as-is.
/// `max_definitions` caps the lines written into `{{text}}`.
pub fn render(
    template: &str,
    extract: &Extract,
    related: Option<&Extract>,
    search_term: &str,
    max_definitions: Option<usize>,
) -> String {
    let limit = max_definitions.unwrap_or(usize::MAX);
    let text = join_lines(extract.text.iter().take(limit));
    let related_words = related
        .map(|r| join_lines(r.text.iter()))
        .unwrap_or_default();

    let mut out = String::with_capacity(template.len() + text.len() + related_words.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let known = after_open.find("}}").and_then(|end| {
            Placeholder::from_name(&after_open[..end]).map(|p| (p, end))
        });

        match known {
            Some((placeholder, end)) => {
                let value: &str = match placeholder {
                    Placeholder::Text => &text,
                    Placeholder::RelatedWords => &related_words,
                    Placeholder::SearchTerm => search_term,
                    Placeholder::Url => &extract.url,
                };
                out.push_str(value);
                rest = &after_open[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after_open;
            }
        }
    }
    out.push_str(rest);

    out
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a String>) -> String {
    let mut joined = String::new();
    for line in lines {
        joined.push_str(line);
        joined.push('\n');
    }
    joined
}
