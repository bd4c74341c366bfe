use std::io::{self, BufRead, Write};

/// Ask for a search term. `None` when the user enters nothing.
pub fn read_search_term<R: BufRead>(mut input: R, interactive: bool) -> io::Result<Option<String>> {
    if interactive {
        let mut stderr = io::stderr();
        write!(stderr, "Enter Search Term: ")?;
        stderr.flush()?;
    }

    let mut line = String::new();
    input.read_line(&mut line)?;

    let term = line.trim();
    Ok((!term.is_empty()).then(|| term.to_string()))
}

/// Search term for a note: its file name without the extension
pub fn note_title(path: &std::path::Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().trim().to_string())
        .filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use super::*;

    #[test]
    fn test_reads_trimmed_term() {
        let term = read_search_term(Cursor::new("  serendipity \n"), false).unwrap();
        assert_eq!(term.as_deref(), Some("serendipity"));
    }

    #[test]
    fn test_empty_input_cancels() {
        assert_eq!(read_search_term(Cursor::new("\n"), false).unwrap(), None);
        assert_eq!(read_search_term(Cursor::new(""), false).unwrap(), None);
    }

    #[test]
    fn test_note_title_is_basename() {
        assert_eq!(note_title(Path::new("vault/words/ephemeral.md")).as_deref(), Some("ephemeral"));
        assert_eq!(note_title(Path::new("ice cream.md")).as_deref(), Some("ice cream"));
        assert_eq!(note_title(Path::new("vault/")).as_deref(), Some("vault"));
        assert_eq!(note_title(Path::new("")), None);
    }
}
