use super::Error;

/// Error when two mapper nodes cannot be reconciled.
///
/// Raised by `Mapper::merge` when the other node is of an incompatible
/// variant, or when an attribute disagrees and is not relaxable under the
/// requested flags. Propagates out of a top-level tree merge unmodified;
/// there are no partial merges.
#[derive(Debug)]
pub(super) struct MergeConflictError {
    field: Box<str>,
    detail: Box<str>,
}

impl std::error::Error for MergeConflictError {}

impl core::fmt::Display for MergeConflictError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapper [{}] cannot be merged: {}", self.field, self.detail)
    }
}

impl Error {
    /// Creates a merge conflict error for the named field.
    pub fn merge_conflict(field: impl Into<String>, detail: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MergeConflict(MergeConflictError {
            field: field.into().into(),
            detail: detail.into().into(),
        }))
    }

    /// Returns `true` if this error is a merge conflict.
    pub fn is_merge_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MergeConflict(_))
    }
}
