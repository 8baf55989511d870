/// Primary-key position reported by columns outside the primary key.
pub const NOT_IN_PRIMARY_KEY: i32 = -1;

/// How a field's values are laid out in its CQL column.
///
/// `Singleton` is the scalar case: one value per row, no collection wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CqlCollection {
    List,
    Set,
    Singleton,
}

impl CqlCollection {
    /// The tag used when rendering the column's CQL type.
    pub fn tag(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Set => "set",
            Self::Singleton => "singleton",
        }
    }

    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Singleton)
    }
}

/// Physical representation of a nested object column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CqlStruct {
    Udt,
    Map,
    Tuple,
}

impl CqlStruct {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Udt => "udt",
            Self::Map => "map",
            Self::Tuple => "tuple",
        }
    }
}
