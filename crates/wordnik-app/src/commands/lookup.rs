use std::error::Error;
use std::io;
use std::path::PathBuf;

use wordnik_client::{HttpTransport, Transport, WordLookup};
use wordnik_config::Settings;

use crate::host::{Host, InsertionPoint, TerminalHost};
use crate::prompt::{note_title, read_search_term};

/// Look up the note's title and insert the result into the note
pub async fn handle_note(settings: &Settings, path: PathBuf, print: bool) -> anyhow::Result<()> {
    let Some(term) = note_title(&path) else {
        tracing::warn!("Note {} has no title to look up", path.display());
        return Ok(());
    };

    let target = if print {
        InsertionPoint::Stdout
    } else {
        InsertionPoint::Document(path)
    };

    let lookup = WordLookup::new(HttpTransport::new());
    insert_lookup(&mut TerminalHost::new(target), &lookup, settings, &term).await
}

/// Look up a user-entered term, prompting when none was given
pub async fn handle_search(
    settings: &Settings,
    term: Option<String>,
    into: Option<PathBuf>,
) -> anyhow::Result<()> {
    let term = match term {
        Some(term) => Some(term.trim().to_string()).filter(|t| !t.is_empty()),
        None => {
            let interactive = atty::is(atty::Stream::Stdin);
            read_search_term(io::stdin().lock(), interactive)?
        }
    };

    let Some(term) = term else {
        tracing::debug!("Empty search term, nothing to look up");
        return Ok(());
    };

    let target = into.map_or(InsertionPoint::Stdout, InsertionPoint::Document);

    let lookup = WordLookup::new(HttpTransport::new());
    insert_lookup(&mut TerminalHost::new(target), &lookup, settings, &term).await
}

/// Run one lookup and hand the outcome to the host: text on success, a notice otherwise
pub async fn insert_lookup<H, T>(
    host: &mut H,
    lookup: &WordLookup<T>,
    settings: &Settings,
    term: &str,
) -> anyhow::Result<()>
where
    H: Host,
    T: Transport,
{
    tracing::info!("Looking up {term:?}");

    match lookup.lookup(settings, term).await {
        Ok(text) => host.insert(&text),
        Err(e) => {
            match e.source() {
                Some(cause) => tracing::error!("Lookup for {term:?} failed: {e} ({cause})"),
                None => tracing::warn!("Lookup for {term:?} failed: {e}"),
            }
            host.notify(&e.to_string());
            Ok(())
        }
    }
}
