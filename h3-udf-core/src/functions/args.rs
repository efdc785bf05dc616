//! Conversions from SQL scalar arguments to library argument types, plus
//! the "undefined answer becomes NULL" rule.

use crate::error::{H3UdfError, Result};

/// SQL integers arrive as `i32`; the library validates the 0..=15 range.
pub(crate) fn resolution(res: i32) -> Result<u8> {
    u8::try_from(res)
        .map_err(|_| H3UdfError::InvalidArgument(format!("resolution {res} is out of range")))
}

pub(crate) fn ring_size(k: i32) -> Result<u32> {
    u32::try_from(k).map_err(|_| H3UdfError::InvalidArgument(format!("k must be >= 0, got {k}")))
}

/// Turn `NoResultExists` into `None`; every other error is kept.
pub(crate) fn undefined_as_null<T>(function: &str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_no_result() => {
            log::debug!("{function}: {e}; returning NULL");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
