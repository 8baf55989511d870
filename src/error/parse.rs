use super::Error;

/// Error when a field definition in a mapping document is malformed.
///
/// Always names the offending field so the caller can point at the bad part
/// of the definition.
#[derive(Debug)]
pub(super) struct MappingParseError {
    field: Box<str>,
    detail: Box<str>,
}

impl std::error::Error for MappingParseError {}

impl core::fmt::Display for MappingParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to parse mapping for field [{}]: {}",
            self.field, self.detail
        )
    }
}

impl Error {
    /// Creates a mapping parse error for the named field.
    pub fn mapping_parse(field: impl Into<String>, detail: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MappingParse(MappingParseError {
            field: field.into().into(),
            detail: detail.into().into(),
        }))
    }

    /// Returns `true` if this error is a mapping parse error.
    pub fn is_mapping_parse(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MappingParse(_))
    }
}
