//! The recursive value model every transform operates on.
//!
//! `Document` is `serde_json::Value` built with `preserve_order`, so mapping
//! keys keep their source order while equality stays order-independent.

pub use serde_json::Value as Document;

/// Mapping node of a [`Document`].
pub type Mapping = serde_json::Map<String, Document>;

/// Shape of a sequence as seen by the tabular codecs. Derived per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabularShape<'a> {
    /// Every element is a mapping over the same non-empty key set.
    /// `columns` follows the key order of the first element.
    Uniform {
        columns: Vec<&'a str>,
        rows: &'a [Document],
    },
    Irregular,
}

impl TabularShape<'_> {
    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform { .. })
    }
}

/// Classify `items` as uniform (table-encodable) or irregular.
pub fn tabular_shape(items: &[Document]) -> TabularShape<'_> {
    let Some(Document::Object(first)) = items.first() else {
        return TabularShape::Irregular;
    };
    if first.is_empty() {
        return TabularShape::Irregular;
    }
    let columns: Vec<&str> = first.keys().map(String::as_str).collect();

    let uniform = items.iter().all(|item| match item {
        Document::Object(map) => {
            map.len() == columns.len() && columns.iter().all(|c| map.contains_key(*c))
        }
        _ => false,
    });

    if uniform {
        TabularShape::Uniform {
            columns,
            rows: items,
        }
    } else {
        TabularShape::Irregular
    }
}
