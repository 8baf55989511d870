use super::{ContentPath, Mapper};
use crate::{IndexSettings, Result, Version};
use std::sync::Arc;

/// Ambient state for a single build pass: the index settings (if any) and
/// the current position in the document structure being walked.
///
/// Constructed once per build invocation and discarded after; never shared
/// across concurrent operations.
#[derive(Debug)]
pub struct BuilderContext<'a> {
    index_settings: Option<&'a IndexSettings>,
    content_path: &'a mut ContentPath,
}

impl<'a> BuilderContext<'a> {
    pub fn new(
        index_settings: Option<&'a IndexSettings>,
        content_path: &'a mut ContentPath,
    ) -> Self {
        Self {
            index_settings,
            content_path,
        }
    }

    pub fn path(&mut self) -> &mut ContentPath {
        self.content_path
    }

    pub fn index_settings(&self) -> Option<&IndexSettings> {
        self.index_settings
    }

    /// Version the index was created under, when settings are available.
    pub fn index_created_version(&self) -> Option<Version> {
        self.index_settings
            .map(|settings| settings.version_created())
    }
}

/// Mutable accumulator that produces an immutable [`Mapper`].
///
/// Concrete builders expose fluent attribute setters returning `Self`.
/// `build` consumes the builder and is the single transition point from
/// mutable configuration to immutable node.
pub trait MapperBuilder: std::fmt::Debug {
    /// The name the built mapper will carry as its simple name.
    fn name(&self) -> &str;

    /// Returns a newly built mapper, fully initialized.
    ///
    /// Side-effect-free with respect to the builder's inputs; on error the
    /// builder is simply dropped.
    fn build(self: Box<Self>, ctx: &mut BuilderContext<'_>) -> Result<Arc<dyn Mapper>>;
}
