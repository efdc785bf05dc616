#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `h3-udf-core`.

pub mod error;
pub mod function_catalog;
pub mod functions;
pub mod index;
pub mod library;
pub mod list;
pub mod wkt;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{H3UdfError, Result};
pub use index::IndexRepr;
pub use library::{AreaUnit, H3oLibrary, IndexingLibrary, LengthUnit};
pub use wkt::GeoPoint;
