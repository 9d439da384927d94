//! Quoted textual formatting for paths embedded in streams.
//!
//! Insertion wraps a path's string form in quotes so embedded spaces
//! survive tokenized extraction; `&` is the escape character (rather than
//! the conventional backslash) so Windows separators pass through
//! unescaped. Extraction reverses the scheme exactly.
//!
//! ```
//! use portable_path::quoted;
//!
//! let quoted = quoted::quote(r#"C:\Program Files\x "y" & z"#);
//! assert_eq!(quoted, r#""C:\Program Files\x &"y&" && z""#);
//! assert_eq!(quoted::unquote(&quoted).unwrap(), r#"C:\Program Files\x "y" & z"#);
//! ```

use std::error;
use std::fmt;

use crate::codec::EncodingError;

/// The quote character wrapped around formatted paths.
pub const QUOTE: char = '"';

/// The escape character; escapes the quote and itself.
pub const ESCAPE: char = '&';

/// Wraps `text` in quotes, escaping embedded quote and escape characters.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(QUOTE);
    for ch in text.chars() {
        if ch == QUOTE || ch == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
    out
}

/// Exact inverse of [`quote`].
///
/// Input that does not begin with the quote character is passed through
/// unchanged, matching stream extraction of an unquoted token. Quoted
/// input must be one complete quoted string: a missing closing quote, an
/// escape with nothing after it, or text after the closing quote is a
/// [`QuotedError`].
pub fn unquote(text: &str) -> Result<String, QuotedError> {
    let mut chars = text.chars();
    match chars.next() {
        Some(ch) if ch == QUOTE => {}
        _ => return Ok(text.to_owned()),
    }

    let mut out = String::with_capacity(text.len());
    loop {
        match chars.next() {
            None => return Err(QuotedError::Unterminated),
            Some(ch) if ch == ESCAPE => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(QuotedError::DanglingEscape),
            },
            Some(ch) if ch == QUOTE => break,
            Some(ch) => out.push(ch),
        }
    }

    if chars.next().is_some() {
        return Err(QuotedError::TrailingInput);
    }

    Ok(out)
}

/// Quoted extraction failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuotedError {
    /// The closing quote never arrived
    Unterminated,
    /// The input ended directly after an escape character
    DanglingEscape,
    /// Text followed the closing quote
    TrailingInput,
    /// The unquoted text could not be converted to native form
    Encoding(EncodingError),
}

impl fmt::Display for QuotedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unterminated => write!(f, "quoted path is missing its closing quote"),
            Self::DanglingEscape => write!(f, "quoted path ends in a dangling escape"),
            Self::TrailingInput => write!(f, "unexpected text after closing quote"),
            Self::Encoding(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for QuotedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EncodingError> for QuotedError {
    fn from(e: EncodingError) -> Self {
        Self::Encoding(e)
    }
}
