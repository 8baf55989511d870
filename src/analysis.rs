use indexmap::IndexMap;
use std::sync::Arc;

/// Named analysis chain applied to a text field.
///
/// Opaque to this crate: the tokenization machinery lives in the analysis
/// layer. Parsers only resolve analyzers by name and hand them to builders.
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;
}

/// Lookup of analyzers by name, injected into the parser context.
pub trait AnalyzerRegistry: Send + Sync {
    fn get(&self, name: &str) -> Option<Arc<dyn Analyzer>>;
}

/// Analyzer registry backed by an ordered map.
///
/// The analysis layer populates it once when the index is created; parsers
/// only read from it.
#[derive(Default)]
pub struct IndexAnalyzers {
    analyzers: IndexMap<String, Arc<dyn Analyzer>>,
}

impl IndexAnalyzers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `analyzer` under its own name, replacing any previous entry.
    pub fn insert(&mut self, analyzer: Arc<dyn Analyzer>) {
        self.analyzers.insert(analyzer.name().to_string(), analyzer);
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}

impl AnalyzerRegistry for IndexAnalyzers {
    fn get(&self, name: &str) -> Option<Arc<dyn Analyzer>> {
        self.analyzers.get(name).cloned()
    }
}

/// Scoring function attached to a field at mapping time. Opaque here.
pub trait SimilarityProvider: Send + Sync {
    fn name(&self) -> &str;
}

/// Resolves a similarity name to its provider.
pub type SimilarityLookup =
    Arc<dyn Fn(&str) -> Option<Arc<dyn SimilarityProvider>> + Send + Sync>;
