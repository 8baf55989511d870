/// Entry in the global canonical-name to field-type table handed to
/// `Mapper::update_field_type`.
///
/// Carries the cross-branch view of a field's resolved index type.
/// Multi-field sub-definitions referencing a primary field pick their type
/// up from here after a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    /// Canonical name of the field the type belongs to.
    pub name: String,

    /// Type tag of the field, the same tag used to select its parser.
    pub type_tag: String,
}

impl FieldType {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }
}
