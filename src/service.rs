use std::sync::Arc;

/// Handle to the service coordinating mapping updates for an index.
///
/// Opaque to this crate: parsers thread it through to builders untouched.
/// The handle is shared and externally synchronized; this crate only ever
/// reads through it.
pub trait MapperService: Send + Sync {}

/// Query-execution state.
///
/// Kept behind a supplier because it may not exist yet while mappings are
/// being set up.
pub trait QueryContext: Send + Sync {}

/// Produces the query context on demand.
pub type QueryContextSupplier = Arc<dyn Fn() -> Arc<dyn QueryContext> + Send + Sync>;
