use crate::error::{OptimizerError, Result};
use tracing::debug;
use tw_cache::{Cache, CacheKey, CacheStats};
use tw_compactor::sanitize::{sanitize_document, sanitize_text};
use tw_compactor::{ContentKind, OutputFilter};
use tw_core::{Document, OptimizerConfig};
use tw_tabular::{toon, zon, RenameSchema};

const OP_OPTIMIZE: &str = "optimize";
const OP_TOON: &str = "toon";
const OP_ZON: &str = "zon";
const OP_FROM_ZON: &str = "zon-to-json";
const OP_FILTER: &str = "filter";

/// Target encoding for [`TokenOptimizer::to_tabular`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularKind<'a> {
    Toon { schema: Option<&'a RenameSchema> },
    Zon,
}

/// Owns one cache for its whole lifetime. Every operation is
/// sanitize → lookup → transform → store; hits skip sanitization.
#[derive(Debug)]
pub struct TokenOptimizer {
    cache: Cache,
    default_filters: Vec<String>,
}

impl TokenOptimizer {
    pub fn new(config: &OptimizerConfig) -> Self {
        Self::from_parts(Cache::from_config(&config.cache), config.default_filters.clone())
    }

    /// Default config with a different cache capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut config = OptimizerConfig::default();
        config.cache.max_size = capacity;
        Self::new(&config)
    }

    pub fn from_parts(cache: Cache, default_filters: Vec<String>) -> Self {
        Self {
            cache,
            default_filters,
        }
    }

    /// Entity-escape `content`, then run the pass for `kind`.
    ///
    /// Escaping happens before parsing, so JSON input holding quotes no
    /// longer parses and comes back escaped but otherwise unchanged.
    pub fn optimize_content(&self, content: &str, kind: ContentKind) -> String {
        let key = CacheKey::new(OP_OPTIMIZE, kind.as_str(), content);
        self.cache.get_or_insert_with(key, || {
            debug!(kind = kind.as_str(), input_len = content.len(), "optimizing content");
            tw_compactor::optimize(&sanitize_text(content), kind)
        })
    }

    pub fn to_tabular(&self, json: &str, kind: TabularKind<'_>) -> Result<String> {
        match kind {
            TabularKind::Toon { schema } => Ok(self.json_to_toon(json, schema)),
            TabularKind::Zon => self.json_to_zon(json),
        }
    }

    /// Format a JSON document as Toon. Input that is not JSON comes back
    /// entity-escaped and is not cached.
    pub fn json_to_toon(&self, json: &str, schema: Option<&RenameSchema>) -> String {
        let params = serde_json::to_string(&schema).unwrap_or_default();
        let key = CacheKey::new(OP_TOON, params, json);
        self.cache
            .get_or_try_insert_with(key, || {
                let doc: Document = serde_json::from_str(json).map_err(|err| {
                    debug!(
                        input_len = json.len(),
                        error = %err,
                        "toon input is not JSON, returning escaped text"
                    );
                    sanitize_text(json)
                })?;
                Ok(toon::format(&sanitize_document(doc), schema))
            })
            .unwrap_or_else(|fallback| fallback)
    }

    pub fn json_to_zon(&self, json: &str) -> Result<String> {
        let key = CacheKey::new(OP_ZON, "", json);
        self.cache.get_or_try_insert_with(key, || {
            let doc: Document =
                serde_json::from_str(json).map_err(|source| OptimizerError::InvalidJson {
                    operation: OP_ZON,
                    input_len: json.len(),
                    source,
                })?;
            zon::encode(&sanitize_document(doc)).map_err(|source| OptimizerError::Zon {
                operation: OP_ZON,
                input_len: json.len(),
                source,
            })
        })
    }

    /// Decode Zon text into pretty-printed JSON.
    pub fn from_zon(&self, zon_text: &str) -> Result<String> {
        let key = CacheKey::new(OP_FROM_ZON, "", zon_text);
        self.cache.get_or_try_insert_with(key, || {
            let doc = self.decode_zon(zon_text)?;
            serde_json::to_string_pretty(&doc).map_err(|source| OptimizerError::Serialization {
                operation: OP_FROM_ZON,
                source,
            })
        })
    }

    /// Decode Zon text into a key-sanitized document. Not cached.
    pub fn decode_zon(&self, zon_text: &str) -> Result<Document> {
        zon::decode(zon_text).map(sanitize_document).map_err(|source| OptimizerError::Zon {
            operation: OP_FROM_ZON,
            input_len: zon_text.len(),
            source,
        })
    }

    /// Apply `filters` in order to already-generated text.
    pub fn filter_output<S: AsRef<str>>(&self, text: &str, filters: &[S]) -> Result<String> {
        let names: Vec<&str> = filters.iter().map(|name| name.as_ref()).collect();
        let params = serde_json::to_string(&names).unwrap_or_default();
        let key = CacheKey::new(OP_FILTER, params, text);
        self.cache.get_or_try_insert_with(key, || {
            let filter = OutputFilter::compile(&names).map_err(|source| OptimizerError::Filter {
                input_len: text.len(),
                source,
            })?;
            Ok(filter.apply(text))
        })
    }

    /// [`filter_output`](Self::filter_output) with the configured default filters.
    pub fn filter_output_default(&self, text: &str) -> Result<String> {
        self.filter_output(text, &self.default_filters)
    }

    pub fn default_filters(&self) -> &[String] {
        &self.default_filters
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for TokenOptimizer {
    fn default() -> Self {
        Self::new(&OptimizerConfig::default())
    }
}
