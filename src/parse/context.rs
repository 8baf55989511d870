use super::{TypeParser, TypeParserRegistry};
use crate::analysis::{AnalyzerRegistry, SimilarityLookup, SimilarityProvider};
use crate::service::{MapperService, QueryContext, QueryContextSupplier};
use crate::Version;
use std::fmt;
use std::sync::Arc;

/// Everything a type parser needs to turn a field definition into a builder.
///
/// Constructed once per mapping-definition parse and threaded through every
/// parser invocation. All capabilities are injected and treated as opaque.
#[derive(Clone)]
pub struct ParserContext {
    type_tag: String,
    analyzers: Arc<dyn AnalyzerRegistry>,
    similarity_lookup: SimilarityLookup,
    mapper_service: Arc<dyn MapperService>,
    type_parsers: Arc<TypeParserRegistry>,
    index_version_created: Version,
    query_context_supplier: QueryContextSupplier,
    within_multi_field: bool,
}

impl ParserContext {
    pub fn new(
        type_tag: impl Into<String>,
        analyzers: Arc<dyn AnalyzerRegistry>,
        similarity_lookup: SimilarityLookup,
        mapper_service: Arc<dyn MapperService>,
        type_parsers: Arc<TypeParserRegistry>,
        index_version_created: Version,
        query_context_supplier: QueryContextSupplier,
    ) -> Self {
        Self {
            type_tag: type_tag.into(),
            analyzers,
            similarity_lookup,
            mapper_service,
            type_parsers,
            index_version_created,
            query_context_supplier,
            within_multi_field: false,
        }
    }

    /// The type tag of the definition being parsed.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn analyzers(&self) -> &dyn AnalyzerRegistry {
        &*self.analyzers
    }

    /// Resolves a similarity by name.
    pub fn similarity(&self, name: &str) -> Option<Arc<dyn SimilarityProvider>> {
        (self.similarity_lookup)(name)
    }

    pub fn mapper_service(&self) -> &Arc<dyn MapperService> {
        &self.mapper_service
    }

    /// Looks up the parser registered for `type_tag`.
    pub fn type_parser(&self, type_tag: &str) -> Option<Arc<dyn TypeParser>> {
        self.type_parsers.get(type_tag)
    }

    pub fn index_version_created(&self) -> Version {
        self.index_version_created
    }

    /// Materializes the query context.
    ///
    /// Deferred behind a supplier because the context may not exist yet
    /// while mappings are being set up.
    pub fn query_context(&self) -> Arc<dyn QueryContext> {
        (self.query_context_supplier)()
    }

    /// True while parsing a multi-field sub-definition. Parsers must consult
    /// this to reject constructs that are illegal there, such as nested
    /// multi-fields.
    pub fn is_within_multi_field(&self) -> bool {
        self.within_multi_field
    }

    /// Derives a context identical to this one except that
    /// `is_within_multi_field` reports true.
    pub fn multi_field_context(&self) -> ParserContext {
        ParserContext {
            within_multi_field: true,
            ..self.clone()
        }
    }
}

impl fmt::Debug for ParserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserContext")
            .field("type_tag", &self.type_tag)
            .field("index_version_created", &self.index_version_created)
            .field("within_multi_field", &self.within_multi_field)
            .finish_non_exhaustive()
    }
}
