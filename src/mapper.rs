mod builder;
pub use builder::{BuilderContext, MapperBuilder};

mod content_path;
pub use content_path::ContentPath;

mod cql;
pub use cql::{CqlCollection, CqlStruct, NOT_IN_PRIMARY_KEY};

mod field_type;
pub use field_type::FieldType;

mod name;
pub use name::MapperName;

use crate::Result;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A node in the document-to-schema mapping tree.
///
/// Nodes are immutable once built. Structural changes (merge, field-type
/// refresh) produce a new node and leave both operands untouched, so a whole
/// tree can be shared across concurrent readers and replaced by swapping the
/// pointer to its root.
pub trait Mapper: Send + Sync + fmt::Debug {
    /// Identity shared by every variant: the local name plus its cached CQL
    /// encoding.
    fn ident(&self) -> &MapperName;

    /// The name identifying this mapper against other mappers at the same
    /// level in the tree.
    fn simple_name(&self) -> &str {
        self.ident().simple()
    }

    /// The canonical name uniquely identifying this mapper within its type,
    /// derived from ancestry.
    fn name(&self) -> String;

    /// Returns the merge of `other` into `self` as a new node. Both `self`
    /// and `other` are left unmodified.
    ///
    /// `update_all_types` relaxes variant-specific attribute conflicts that
    /// would otherwise be rejected. A structurally incompatible `other`
    /// fails with a merge-conflict error regardless of the flag.
    fn merge(&self, other: &dyn Mapper, update_all_types: bool) -> Result<Arc<dyn Mapper>>;

    /// Returns a copy of this mapper with cross-referenced field types
    /// refreshed from the global canonical-name to field-type table.
    ///
    /// Some mapping updates cut across independently defined branches of the
    /// tree, so the refresh is keyed by canonical name rather than position.
    fn update_field_type(
        &self,
        full_name_to_field_type: &HashMap<String, FieldType>,
    ) -> Arc<dyn Mapper>;

    /// The CQL column name as raw bytes.
    ///
    /// Computed on first access and cached; byte-stable for the node's
    /// lifetime since the node is immutable.
    fn cql_name(&self) -> &[u8] {
        self.ident().cql()
    }

    /// How this field's values are laid out in its column.
    fn cql_collection(&self) -> CqlCollection;

    /// The tag used when rendering the column's collection type.
    fn cql_collection_tag(&self) -> &'static str {
        self.cql_collection().tag()
    }

    /// Physical representation of this node when it maps to a nested object
    /// column.
    fn cql_struct(&self) -> CqlStruct;

    /// True if updates to this column may be applied without reading the
    /// previous row.
    fn cql_partial_update(&self) -> bool;

    /// True if the column is part of the partition key.
    fn cql_partition_key(&self) -> bool;

    /// True if the column is static.
    fn cql_static_column(&self) -> bool;

    /// Position of the column within the primary key, or
    /// [`NOT_IN_PRIMARY_KEY`].
    fn cql_primary_key_order(&self) -> i32;

    /// Explicit CQL type override, if any. `None` means the physical type is
    /// inferred from the logical field type.
    fn cql_type(&self) -> Option<&str> {
        None
    }

    /// True if this node itself carries a leaf value.
    fn has_field(&self) -> bool;

    /// Child mappers, for object and array variants. Leaves have none.
    fn children(&self) -> &[Arc<dyn Mapper>] {
        &[]
    }

    /// Variant discrimination seam used by concrete `merge` implementations.
    fn as_any(&self) -> &dyn Any;
}
