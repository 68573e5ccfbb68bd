//! Zon: columnar encoding with an exact decoder.
//!
//! Three top-level forms:
//!
//! ```text
//! @data(2):id,name        table, for a uniform array of records
//! 1,Alice
//! 2,Bob
//!
//! id: 1                   object, for a non-empty mapping
//! tags: ["a","b"]
//!
//! [1,"two",null]          inline, for anything else (one cell)
//! ```
//!
//! A cell is `null`, `true`, `false`, a JSON number, compact JSON for a nested
//! array or mapping, a `"quoted"` string (`""` escapes a quote) or a bare
//! string. Strings are written bare only when they read back unchanged.
//! Strings holding a line break cannot be represented and fail to encode.

use crate::error::{Result, ZonError};
use tracing::debug;
use tw_core::{tabular_shape, Document, Mapping, TabularShape};

const TABLE_PREFIX: &str = "@data(";

pub fn encode(doc: &Document) -> Result<String> {
    match doc {
        Document::Array(items) => match tabular_shape(items) {
            TabularShape::Uniform { columns, rows } => encode_table(&columns, rows),
            TabularShape::Irregular => encode_cell(doc),
        },
        Document::Object(map) if !map.is_empty() => encode_object(map),
        _ => encode_cell(doc),
    }
}

pub fn decode(text: &str) -> Result<Document> {
    let body = text.trim();
    if body.is_empty() {
        return Err(ZonError::decode(1, "empty input"));
    }
    if body.starts_with(TABLE_PREFIX) {
        return decode_table(body);
    }
    let lines: Vec<&str> = body.lines().collect();
    if let [line] = lines.as_slice() {
        match parse_inline(line) {
            Ok(value) => return Ok(value),
            Err(reason) => debug!(%reason, "not an inline value, trying object form"),
        }
    }
    decode_object(&lines)
}

// ---------- encoding ----------

fn encode_table(columns: &[&str], rows: &[Document]) -> Result<String> {
    let header = columns
        .iter()
        .map(|c| encode_column(c))
        .collect::<Result<Vec<_>>>()?;
    let mut out = format!("{TABLE_PREFIX}{}):{}", rows.len(), header.join(","));
    for row in rows {
        let cells = columns
            .iter()
            .map(|c| encode_cell(&row[*c]))
            .collect::<Result<Vec<_>>>()?;
        out.push('\n');
        out.push_str(&cells.join(","));
    }
    Ok(out)
}

fn encode_object(map: &Mapping) -> Result<String> {
    let lines = map
        .iter()
        .map(|(key, value)| Ok(format!("{}: {}", encode_key(key)?, encode_cell(value)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

fn encode_cell(value: &Document) -> Result<String> {
    match value {
        Document::Null => Ok("null".to_string()),
        Document::Bool(b) => Ok(b.to_string()),
        Document::Number(n) => Ok(n.to_string()),
        Document::String(s) => {
            reject_line_break(s)?;
            Ok(if is_bare_string(s) { s.clone() } else { quote(s) })
        }
        container => {
            serde_json::to_string(container).map_err(|e| ZonError::Encode(e.to_string()))
        }
    }
}

fn encode_column(name: &str) -> Result<String> {
    reject_line_break(name)?;
    let needs_quotes = name.is_empty() || name.trim() != name || name.contains([',', '"']);
    Ok(if needs_quotes { quote(name) } else { name.to_string() })
}

fn encode_key(key: &str) -> Result<String> {
    reject_line_break(key)?;
    let needs_quotes = key.is_empty()
        || key.trim() != key
        || key.contains([':', '"'])
        || key.starts_with(['@', '[', '{']);
    Ok(if needs_quotes { quote(key) } else { key.to_string() })
}

fn reject_line_break(s: &str) -> Result<()> {
    if s.contains(['\n', '\r']) {
        return Err(ZonError::Encode("value contains a line break".into()));
    }
    Ok(())
}

/// True when `s` decodes back to the same string without quotes.
fn is_bare_string(s: &str) -> bool {
    !s.is_empty()
        && s.trim() == s
        && !s.contains([',', '"', ':'])
        && !s.starts_with(['[', '{', '@'])
        && matches!(parse_bare(s), Document::String(_))
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

// ---------- decoding ----------

fn decode_table(body: &str) -> Result<Document> {
    let mut lines = body.lines();
    let header = lines.next().unwrap_or_default();
    let rest = &header[TABLE_PREFIX.len()..];
    let (count, columns) = rest
        .split_once("):")
        .ok_or_else(|| ZonError::decode(1, "malformed table header"))?;
    let count: usize = count
        .trim()
        .parse()
        .map_err(|_| ZonError::decode(1, "invalid row count"))?;

    let columns = split_fields(columns, false)
        .map_err(|reason| ZonError::decode(1, reason))?
        .into_iter()
        .map(|field| match field {
            Field::Quoted(name) => Ok(name),
            Field::Raw(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(ZonError::decode(1, "empty column name")),
        })
        .collect::<Result<Vec<_>>>()?;
    for (i, column) in columns.iter().enumerate() {
        if columns[..i].contains(column) {
            return Err(ZonError::decode(1, format!("duplicate column at position {}", i + 1)));
        }
    }

    let rows: Vec<&str> = lines.collect();
    if rows.len() != count {
        return Err(ZonError::decode(
            rows.len() + 1,
            format!("header declares {count} rows, found {}", rows.len()),
        ));
    }

    let mut records = Vec::with_capacity(count);
    for (i, row) in rows.iter().enumerate() {
        let line = i + 2;
        let fields = split_fields(row, true).map_err(|reason| ZonError::decode(line, reason))?;
        if fields.len() != columns.len() {
            return Err(ZonError::decode(
                line,
                format!("expected {} fields, found {}", columns.len(), fields.len()),
            ));
        }
        let mut record = Mapping::with_capacity(columns.len());
        for (column, field) in columns.iter().zip(fields) {
            let value = parse_cell(field).map_err(|reason| ZonError::decode(line, reason))?;
            record.insert(column.clone(), value);
        }
        records.push(Document::Object(record));
    }
    Ok(Document::Array(records))
}

fn decode_object(lines: &[&str]) -> Result<Document> {
    let mut map = Mapping::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = parse_pair(line).map_err(|reason| ZonError::decode(i + 1, reason))?;
        map.insert(key, value);
    }
    Ok(Document::Object(map))
}

fn parse_pair(line: &str) -> std::result::Result<(String, Document), String> {
    let (key, rest) = if line.starts_with('"') {
        let (key, rest) = parse_quoted(&line[1..])?;
        let rest = rest
            .strip_prefix(':')
            .ok_or_else(|| "expected `:` after quoted key".to_string())?;
        (key, rest)
    } else {
        let (key, rest) = line
            .split_once(':')
            .ok_or_else(|| "expected `key: value`".to_string())?;
        let key = key.trim();
        if key.is_empty() {
            return Err("empty key".into());
        }
        (key.to_string(), rest)
    };
    let value = parse_single(rest)?;
    Ok((key, value))
}

/// A top-level single-line value. Bare text with a `:` is object syntax.
fn parse_inline(line: &str) -> std::result::Result<Document, String> {
    if let Ok(fields) = split_fields(line, true) {
        if let [Field::Raw(token)] = fields.as_slice() {
            if token.contains(':') {
                return Err("bare token contains `:`".into());
            }
        }
    }
    parse_single(line)
}

fn parse_single(text: &str) -> std::result::Result<Document, String> {
    let mut fields = split_fields(text, true)?;
    if fields.len() != 1 {
        return Err(format!("expected one value, found {}", fields.len()));
    }
    parse_cell(fields.remove(0))
}

fn parse_cell(field: Field<'_>) -> std::result::Result<Document, String> {
    match field {
        Field::Quoted(s) => Ok(Document::String(s)),
        Field::Json(token) => serde_json::from_str(token)
            .map_err(|e| format!("invalid nested value at column {}", e.column())),
        Field::Raw("") => Err("empty field".into()),
        Field::Raw(token) => Ok(parse_bare(token)),
    }
}

fn parse_bare(token: &str) -> Document {
    match token {
        "null" => Document::Null,
        "true" => Document::Bool(true),
        "false" => Document::Bool(false),
        _ => match serde_json::from_str::<serde_json::Number>(token) {
            Ok(n) => Document::Number(n),
            Err(_) => Document::String(token.to_string()),
        },
    }
}

#[derive(Debug)]
enum Field<'a> {
    Quoted(String),
    /// Bracket-balanced compact JSON.
    Json(&'a str),
    /// Unquoted text, trimmed.
    Raw(&'a str),
}

/// Split one line on commas, honouring quoted fields and, when `json_aware`,
/// bracketed JSON values.
fn split_fields(line: &str, json_aware: bool) -> std::result::Result<Vec<Field<'_>>, String> {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut pos = 0;
    loop {
        let start = pos + line[pos..].len() - line[pos..].trim_start().len();
        match bytes.get(start) {
            Some(b'"') => {
                let (value, rest) = parse_quoted(&line[start + 1..])?;
                fields.push(Field::Quoted(value));
                pos = line.len() - rest.trim_start().len();
            }
            Some(b'[' | b'{') if json_aware => {
                let end = start + json_extent(&line[start..])?;
                fields.push(Field::Json(&line[start..end]));
                pos = line.len() - line[end..].trim_start().len();
            }
            _ => {
                let end = line[pos..].find(',').map_or(line.len(), |i| pos + i);
                let token = line[pos..end].trim();
                if token.contains('"') {
                    return Err(format!("stray quote in field {}", fields.len() + 1));
                }
                fields.push(Field::Raw(token));
                pos = end;
            }
        }
        match bytes.get(pos) {
            None => return Ok(fields),
            Some(b',') => pos += 1,
            Some(_) => return Err(format!("unexpected character after field {}", fields.len())),
        }
    }
}

/// Parse a quoted string whose opening quote is already consumed.
/// Returns the unescaped value and the text after the closing quote.
fn parse_quoted(s: &str) -> std::result::Result<(String, &str), String> {
    let mut value = String::new();
    let mut rest = s;
    loop {
        let Some(i) = rest.find('"') else {
            return Err("unterminated quoted field".into());
        };
        value.push_str(&rest[..i]);
        if rest[i + 1..].starts_with('"') {
            value.push('"');
            rest = &rest[i + 2..];
        } else {
            return Ok((value, &rest[i + 1..]));
        }
    }
}

/// Byte length of the JSON array/object at the start of `s`.
fn json_extent(s: &str) -> std::result::Result<usize, String> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, b) in s.bytes().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(i + 1);
                }
            }
            _ => {}
        }
    }
    Err("unterminated nested value".into())
}
