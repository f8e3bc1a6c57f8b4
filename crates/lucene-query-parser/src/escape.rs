//! Escape handling for Lucene query text.
//!
//! Lucene lets any character be written literally by prefixing it with `\`,
//! and additionally understands `\uXXXX` for arbitrary code points.

use std::borrow::Cow;

/// An invalid escape sequence found by [`unescape`].
///
/// Offsets are byte offsets into the text passed to `unescape`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UnescapeError {
    /// `\u` not followed by four characters.
    #[error("truncated unicode escape sequence")]
    TruncatedUnicodeEscape { offset: usize },

    /// `\u` followed by something other than four hex digits.
    #[error("non-hex character in unicode escape sequence")]
    NonHexUnicodeEscape { offset: usize },

    /// `\uXXXX` naming a surrogate code point.
    #[error("unicode escape sequence is not a valid character")]
    InvalidCodePoint { offset: usize },

    /// The text ends with a single `\`.
    #[error("term cannot end with an escape character")]
    TrailingEscape { offset: usize },
}

impl UnescapeError {
    /// Byte offset of the backslash that starts the bad sequence.
    pub fn offset(&self) -> usize {
        match self {
            Self::TruncatedUnicodeEscape { offset }
            | Self::NonHexUnicodeEscape { offset }
            | Self::InvalidCodePoint { offset }
            | Self::TrailingEscape { offset } => *offset,
        }
    }
}

/// Discards escape backslashes (`\x` becomes `x`) and decodes `\uXXXX`.
///
/// Returns the input unchanged (borrowed) when it contains no backslash.
///
/// ```rust
/// use lucene_query_parser::unescape;
///
/// assert_eq!(unescape(r"foo\:bar").unwrap(), "foo:bar");
/// assert_eq!(unescape(r"café").unwrap(), "café");
/// assert!(unescape(r"oops\").is_err());
/// ```
pub fn unescape(raw: &str) -> Result<Cow<'_, str>, UnescapeError> {
    let Some(first_escape) = raw.find('\\') else {
        return Ok(Cow::Borrowed(raw));
    };

    let mut out = String::with_capacity(raw.len());
    out.push_str(&raw[..first_escape]);

    let mut chars = raw[first_escape..].char_indices().peekable();
    while let Some((rel_offset, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let offset = first_escape + rel_offset;
        match chars.next() {
            None => return Err(UnescapeError::TrailingEscape { offset }),
            Some((_, 'u')) => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let Some((_, digit)) = chars.next() else {
                        return Err(UnescapeError::TruncatedUnicodeEscape { offset });
                    };
                    let Some(value) = digit.to_digit(16) else {
                        return Err(UnescapeError::NonHexUnicodeEscape { offset });
                    };
                    code = (code << 4) | value;
                }
                let decoded =
                    char::from_u32(code).ok_or(UnescapeError::InvalidCodePoint { offset })?;
                out.push(decoded);
            },
            Some((_, escaped)) => out.push(escaped),
        }
    }

    Ok(Cow::Owned(out))
}

/// Characters that have a meaning in unquoted term position.
fn needs_term_escape(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '+'
            | '-'
            | '!'
            | '('
            | ')'
            | ':'
            | '^'
            | '['
            | ']'
            | '"'
            | '{'
            | '}'
            | '~'
            | '/'
            | '<'
            | '>'
            | '='
            | '&'
            | '|'
            | ' '
            | '\t'
            | '\n'
            | '\r'
            | '\u{3000}'
    )
}

/// Escapes `text` so that it lexes back as a single term with the same
/// unescaped value.
///
/// Wildcards (`*`, `?`) are left alone since they are meaningful in terms.
/// Keywords (`AND`, `OR`, `NOT`, `TO`) and plain numerals are not escaped
/// here; callers rendering a standalone term must guard against those.
pub fn escape_term(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_term_escape) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if needs_term_escape(ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

/// Escapes `text` for use between double quotes.
pub fn escape_quoted(text: &str) -> Cow<'_, str> {
    if !text.contains(['"', '\\']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}
