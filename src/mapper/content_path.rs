use std::fmt;

/// Tracks the nesting path while walking a document's structure during a
/// build pass.
///
/// Builders push their segment before building children and pop it after, so
/// `path_as_text` always reflects the current position.
#[derive(Debug, Default)]
pub struct ContentPath {
    segments: Vec<String>,
}

impl ContentPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a path segment. Paired with [`ContentPath::remove`].
    pub fn add(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Pops the most recently added segment.
    pub fn remove(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Renders the full dotted path for `name` under the current position.
    pub fn path_as_text(&self, name: &str) -> String {
        if self.segments.is_empty() {
            return name.to_string();
        }
        let mut out = String::with_capacity(self.segments.len() * 8 + name.len());
        for segment in &self.segments {
            out.push_str(segment);
            out.push('.');
        }
        out.push_str(name);
        out
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_as_text_at_root() {
        let path = ContentPath::new();
        assert_eq!(path.path_as_text("age"), "age");
    }

    #[test]
    fn path_as_text_nested() {
        let mut path = ContentPath::new();
        path.add("user");
        path.add("address");
        assert_eq!(path.path_as_text("city"), "user.address.city");
        assert_eq!(path.to_string(), "user.address");
    }

    #[test]
    fn add_and_remove_are_paired() {
        let mut path = ContentPath::new();
        path.add("user");
        assert_eq!(path.len(), 1);
        assert_eq!(path.remove().as_deref(), Some("user"));
        assert!(path.is_empty());
        assert_eq!(path.remove(), None);
    }
}
