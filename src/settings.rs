use crate::Version;

/// Index-level settings visible to mapper builders.
#[derive(Debug, Clone)]
pub struct IndexSettings {
    /// Version the index was created under.
    pub version_created: Version,
}

impl IndexSettings {
    pub fn new(version_created: Version) -> Self {
        Self { version_created }
    }

    pub fn version_created(&self) -> Version {
        self.version_created
    }
}
