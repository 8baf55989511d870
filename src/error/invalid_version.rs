use super::Error;

/// Error when a version string cannot be parsed.
#[derive(Debug)]
pub(super) struct InvalidVersionError {
    src: Box<str>,
}

impl std::error::Error for InvalidVersionError {}

impl core::fmt::Display for InvalidVersionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid version [{}]", self.src)
    }
}

impl Error {
    /// Creates an invalid version error from the offending input.
    pub fn invalid_version(src: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidVersion(InvalidVersionError {
            src: src.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid version error.
    pub fn is_invalid_version(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidVersion(_))
    }
}
