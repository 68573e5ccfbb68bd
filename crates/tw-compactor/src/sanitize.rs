//! Irreversible cleaning applied before encoding. Not a transport encoding:
//! nothing decodes these escapes back.

use tw_core::{Document, Mapping};

/// Entity-escape `& < > " '` (ampersand first) and trim.
pub fn sanitize_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped.trim().to_string()
}

/// Strip `< > & " '` and line breaks from a mapping key.
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '<' | '>' | '&' | '"' | '\'' | '\n' | '\r'))
        .collect()
}

/// Sanitize every mapping key, recursively. Values are left untouched.
/// Keys that collapse to the same sanitized form keep the later value.
pub fn sanitize_document(doc: Document) -> Document {
    match doc {
        Document::Object(map) => {
            let mut clean = Mapping::with_capacity(map.len());
            for (key, value) in map {
                clean.insert(sanitize_key(&key), sanitize_document(value));
            }
            Document::Object(clean)
        }
        Document::Array(items) => {
            Document::Array(items.into_iter().map(sanitize_document).collect())
        }
        scalar => scalar,
    }
}
