#[cfg(feature = "collections")]
pub mod collections;

pub mod error;
pub mod slice;

pub use error::AdtError;
