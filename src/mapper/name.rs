use std::sync::OnceLock;

/// Identity carried by every mapper node: the immutable simple name plus the
/// memoized CQL byte encoding of it.
#[derive(Debug)]
pub struct MapperName {
    simple: String,
    cql: OnceLock<Box<[u8]>>,
}

impl MapperName {
    pub fn new(simple: impl Into<String>) -> Self {
        Self {
            simple: simple.into(),
            cql: OnceLock::new(),
        }
    }

    /// The local name, unique among siblings at the same tree level. Set
    /// once at construction and never reassigned.
    pub fn simple(&self) -> &str {
        &self.simple
    }

    /// The CQL byte encoding of the simple name.
    ///
    /// Computed on first access; the name never changes, so no further
    /// synchronization is needed and the bytes stay stable afterwards.
    pub fn cql(&self) -> &[u8] {
        self.cql.get_or_init(|| self.simple.as_bytes().into())
    }
}

impl Clone for MapperName {
    fn clone(&self) -> Self {
        // The cache is derived state; a fresh cell recomputes on demand.
        Self::new(self.simple.clone())
    }
}

impl PartialEq for MapperName {
    fn eq(&self, other: &Self) -> bool {
        self.simple == other.simple
    }
}

impl Eq for MapperName {}
