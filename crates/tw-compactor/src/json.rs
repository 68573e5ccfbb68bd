use crate::sanitize::sanitize_document;
use tracing::debug;
use tw_core::Document;

/// Minify JSON and sanitize its keys. Unparsable input is returned as-is.
pub fn optimize(json: &str) -> String {
    match serde_json::from_str::<Document>(json) {
        Ok(doc) => {
            let doc = sanitize_document(doc);
            serde_json::to_string(&doc).unwrap_or_else(|_| json.to_string())
        }
        Err(err) => {
            debug!(
                input_len = json.len(),
                error = %err,
                "not valid JSON, returning input unchanged"
            );
            json.to_string()
        }
    }
}
