use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Schema version an index was created under.
///
/// Ordering is lexicographic over `(major, minor, patch)`, so version gates
/// in type parsers can use plain comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self> {
        let mut parts = src.splitn(3, '.');
        let mut next = || -> Result<u16> {
            parts
                .next()
                .ok_or_else(|| Error::invalid_version(src))?
                .parse()
                .map_err(|_| Error::invalid_version(src))
        };
        Ok(Self::new(next()?, next()?, next()?))
    }
}
