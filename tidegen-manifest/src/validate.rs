//! Identifier checks and span lookup for manifest diagnostics.

use miette::SourceSpan;

/// C keywords that cannot be used as identifiers in generated code
pub(crate) const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

/// Validate that a name is a C identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if C_KEYWORDS.contains(&name) {
        return Some("name is a C keyword");
    }
    validate_identifier_prefix(name)
}

/// Validate text that starts an identifier but may be empty (e.g. a symbol prefix).
pub(crate) fn validate_identifier_prefix(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return None,
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("name must contain only letters, numbers, and underscores")
    }
}

/// Find the span of a quoted string value in the source.
///
/// The span covers the text between the quotes.
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", value);
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Find the span of a key in the source (`key =` for TOML, `"key":` for JSON).
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("\"{}\"", key),
        format!("{} =", key),
        format!("{}=", key),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            let start = if pattern.starts_with('"') { pos + 1 } else { pos };
            return Some(SourceSpan::from((start, key.len())));
        }
    }
    None
}
