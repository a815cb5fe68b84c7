//! Token acquisition: positional argument, piped stdin, or clipboard.

use std::io::{self, IsTerminal, Read};

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read stdin")]
    StdinRead(#[source] io::Error),
    #[error("failed to read clipboard")]
    ClipboardRead(#[source] arboard::Error),
    #[error("clipboard is empty")]
    EmptyClipboard,
}

/// Resolve the raw token string, trimmed of surrounding whitespace.
///
/// The positional argument wins. With no argument, stdin is read when it
/// is a pipe or redirect; only an interactive invocation with no argument
/// falls back to the system clipboard.
pub fn acquire_token(arg: Option<String>) -> Result<String, InputError> {
    if let Some(token) = arg {
        return Ok(token.trim().to_string());
    }

    let mut stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .map_err(InputError::StdinRead)?;
        return Ok(buf.trim().to_string());
    }

    // No argument, no pipe — try the clipboard
    let mut clipboard = Clipboard::new().map_err(InputError::ClipboardRead)?;
    let text = clipboard.get_text().map_err(InputError::ClipboardRead)?;
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(InputError::EmptyClipboard);
    }
    Ok(text)
}
