//! Escaping of source lines into embeddable string literals.
//!
//! A line becomes one element of a C string-literal array:
//!
//! 1. every `"` up to the last one is escaped as `\"`; text after the last
//!    `"` (including the line's newline) is dropped
//! 2. the result is wrapped in `"` … `"`
//! 3. control and non-printable characters are rewritten as escapes, the same
//!    way a printable representation (`repr`) of the string would show them,
//!    and one layer of that representation's enclosing quotes is removed
//! 4. doubled backslashes are collapsed left to right
//!
//! Step 1 loses information for quoted lines. Downstream include files are
//! shaped by it, so it is kept as is.

use std::{borrow::Cow, fmt};

use unicode_general_category::{GeneralCategory, get_general_category};

/// One line, escaped for embedding as a string-literal array element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EscapedLine(String);

impl EscapedLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EscapedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EscapedLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Escape one source line.
///
/// Never fails; malformed text is accepted as is.
pub fn escape_line(line: &str) -> EscapedLine {
    let literal = format!("\"{}\"", escape_quotes(line));
    let repr = printable_repr(&literal);
    EscapedLine(collapse_backslashes(strip_enclosing_quotes(&repr)))
}

/// Escape every `"` before the last one and drop the tail after it.
fn escape_quotes(line: &str) -> Cow<'_, str> {
    match line.rsplit_once('"') {
        Some((head, _tail)) => Cow::Owned(format!("{}\\\"", head.replace('"', "\\\""))),
        None => Cow::Borrowed(line),
    }
}

/// Printable representation of `s`, enclosing quotes included.
///
/// Single quotes enclose the text unless it contains `'` and no `"`.
pub fn printable_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_ascii() || is_printable(c) => out.push(c),
            c => out.push_str(&hex_escape(c)),
        }
    }
    out.push(quote);
    out
}

fn hex_escape(c: char) -> String {
    let code = c as u32;
    if code <= 0xff {
        format!("\\x{:02x}", code)
    } else if code <= 0xffff {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    }
}

/// Whether a non-ASCII character is shown verbatim in a printable representation.
///
/// Separators other than the ASCII space, control, format, surrogate,
/// private-use and unassigned code points are escaped.
fn is_printable(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}

/// Remove one layer of enclosing quotes, whichever quote character was used.
fn strip_enclosing_quotes(repr: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = repr
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    repr
}

/// Collapse each `\\` pair into `\`, scanning left to right without overlap.
fn collapse_backslashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' && chars.peek() == Some(&'\\') {
            chars.next();
        }
    }
    out
}
