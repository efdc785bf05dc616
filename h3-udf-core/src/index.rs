//! The two SQL-facing forms of an H3 index.
//!
//! Inside the crate an index is a raw `u64`. SQL sees it either as a signed
//! 64-bit integer (same bits) or as the lowercase hexadecimal address. Every
//! function is generic over [`IndexRepr`] so both forms share one
//! implementation.

use crate::error::{H3UdfError, Result};

/// A SQL-facing representation of an H3 cell or edge index.
pub trait IndexRepr: Sized {
    /// Decode into the raw index. No H3 validity check happens here.
    fn to_index(&self) -> Result<u64>;

    /// Encode a raw index.
    fn from_index(index: u64) -> Self;
}

impl IndexRepr for i64 {
    fn to_index(&self) -> Result<u64> {
        Ok(*self as u64)
    }

    fn from_index(index: u64) -> Self {
        index as i64
    }
}

impl IndexRepr for String {
    fn to_index(&self) -> Result<u64> {
        string_to_index(self)
    }

    fn from_index(index: u64) -> Self {
        index_to_string(index)
    }
}

/// Canonical address of an index: lowercase hex, no prefix, no padding.
///
/// # Example
///
/// ```
/// use h3_udf_core::index::index_to_string;
///
/// assert_eq!(index_to_string(628064021095030783), "8b754e649929fff");
/// ```
pub fn index_to_string(index: u64) -> String {
    format!("{index:x}")
}

/// Parse a hexadecimal address. Case-insensitive; anything other than hex
/// digits (sign, prefix, whitespace) is rejected.
///
/// # Example
///
/// ```
/// use h3_udf_core::index::string_to_index;
///
/// assert_eq!(string_to_index("8B754E649929FFF").unwrap(), 628064021095030783);
/// assert!(string_to_index("not hex").is_err());
/// ```
pub fn string_to_index(address: &str) -> Result<u64> {
    if address.is_empty() || !address.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(H3UdfError::InvalidArgument(format!(
            "invalid H3 address {address:?}: expected hexadecimal digits only"
        )));
    }
    u64::from_str_radix(address, 16)
        .map_err(|e| H3UdfError::InvalidArgument(format!("invalid H3 address {address:?}: {e}")))
}

/// Decode a slice of representations into raw indexes.
pub(crate) fn to_indexes<R: IndexRepr>(values: &[R]) -> Result<Vec<u64>> {
    values.iter().map(IndexRepr::to_index).collect()
}

/// Encode raw indexes into the caller's representation.
pub(crate) fn from_indexes<R: IndexRepr>(indexes: impl IntoIterator<Item = u64>) -> Vec<R> {
    indexes.into_iter().map(R::from_index).collect()
}
