mod context;
pub use context::ParserContext;

use crate::mapper::MapperBuilder;
use crate::Result;
use indexmap::IndexMap;
use std::sync::Arc;

/// Attribute mapping for one field, as it appears in a mapping definition
/// document: type-specific settings keyed by attribute name.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Turns a declarative field definition into a builder for one field-type
/// variant.
///
/// One parser is registered per type tag; selection happens through
/// [`TypeParserRegistry`] before `parse` is called. Malformed attributes
/// fail with a mapping-parse error naming the offending field.
pub trait TypeParser: Send + Sync {
    fn parse(
        &self,
        name: &str,
        attrs: &Attributes,
        ctx: &ParserContext,
    ) -> Result<Box<dyn MapperBuilder>>;
}

/// Dispatch table from field-type tag to its parser.
///
/// Populated once when the mapping module is assembled; parsing only reads
/// from it.
#[derive(Default)]
pub struct TypeParserRegistry {
    parsers: IndexMap<String, Arc<dyn TypeParser>>,
}

impl TypeParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `parser` under `type_tag`, replacing any previous entry.
    pub fn register(&mut self, type_tag: impl Into<String>, parser: Arc<dyn TypeParser>) {
        self.parsers.insert(type_tag.into(), parser);
    }

    pub fn get(&self, type_tag: &str) -> Option<Arc<dyn TypeParser>> {
        self.parsers.get(type_tag).cloned()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}
