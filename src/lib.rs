pub mod analysis;

mod error;
pub use error::Error;

pub mod mapper;
pub use mapper::Mapper;

pub mod parse;

pub mod service;

mod settings;
pub use settings::IndexSettings;

mod version;
pub use version::Version;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
