//! Toon: one-way table compaction for LLM-facing display.
//!
//! ```text
//! [3]{id,name,role}:
//! 1,Alice,admin
//! 2,Bob,user
//! 3,Carol,user
//! ```
//!
//! Nested mappings render as flat `key: value` lines with no depth marker.
//! That output is ambiguous and is never parsed back.

use std::collections::BTreeMap;
use tw_core::{tabular_shape, Document, Mapping, TabularShape};

/// Column/key rename table, looked up by original name. Sorted so it
/// serializes deterministically.
pub type RenameSchema = BTreeMap<String, String>;

pub fn format(doc: &Document, schema: Option<&RenameSchema>) -> String {
    match doc {
        Document::Array(items) => format_array(items, schema),
        Document::Object(map) => format_mapping(map, schema),
        scalar => scalar_text(scalar),
    }
}

fn format_array(items: &[Document], schema: Option<&RenameSchema>) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    match tabular_shape(items) {
        TabularShape::Uniform { columns, rows } => {
            let header: Vec<&str> = columns.iter().map(|c| rename(c, schema)).collect();
            let mut out = format!("[{}]{{{}}}:", rows.len(), header.join(","));
            for row in rows {
                let cells: Vec<String> = columns.iter().map(|c| format_cell(&row[*c])).collect();
                out.push('\n');
                out.push_str(&cells.join(","));
            }
            out
        }
        TabularShape::Irregular => {
            let parts: Vec<String> = items.iter().map(|item| format(item, schema)).collect();
            format!("[{}]", parts.join(", "))
        }
    }
}

fn format_mapping(map: &Mapping, schema: Option<&RenameSchema>) -> String {
    map.iter()
        .map(|(key, value)| {
            let key: String = key
                .chars()
                .map(|c| if matches!(c, '\n' | '\r' | ':') { ' ' } else { c })
                .collect();
            format!("{}: {}", rename(&key, schema), format(value, schema))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn rename<'a>(name: &'a str, schema: Option<&'a RenameSchema>) -> &'a str {
    schema
        .and_then(|s| s.get(name))
        .map(String::as_str)
        .filter(|renamed| !renamed.is_empty())
        .unwrap_or(name)
}

/// Flatten line breaks and commas in strings to spaces, then quote (with
/// doubled inner quotes) anything still holding a comma or quote.
fn format_cell(value: &Document) -> String {
    let text = match value {
        Document::String(s) => s
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | ',') { ' ' } else { c })
            .collect(),
        other => scalar_text(other),
    };
    if text.contains(',') || text.contains('"') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

fn scalar_text(value: &Document) -> String {
    match value {
        Document::Null => "null".to_string(),
        Document::Bool(b) => b.to_string(),
        Document::Number(n) => n.to_string(),
        Document::String(s) => s.clone(),
        container => serde_json::to_string(container).unwrap_or_default(),
    }
}
