//! Grid traversal functions.
//!
//! k_ring, hex_ring, h3_distance, h3_line
//!
//! `h3_distance` and `h3_line` return NULL when the library cannot define an
//! answer (cells too far apart, pentagon distortion) but fail when the cells
//! have different resolutions, since that is a caller error rather than an
//! empty result.

use super::args;
use crate::error::{H3UdfError, Result};
use crate::index::{from_indexes, IndexRepr};
use crate::library::IndexingLibrary;

/// k_ring — every cell within `k` steps of the origin, origin included.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::traversal::k_ring;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let ring: Vec<i64> = k_ring(&lib, &628064021095030783_i64, 1).unwrap();
/// assert_eq!(ring.len(), 7);
/// ```
pub fn k_ring<L, R>(lib: &L, h3: &R, k: i32) -> Result<Vec<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let cells = lib.grid_disk(h3.to_index()?, args::ring_size(k)?)?;
    Ok(from_indexes(cells))
}

/// hex_ring — cells at exactly `k` steps. Fails if a pentagon is in range.
pub fn hex_ring<L, R>(lib: &L, h3: &R, k: i32) -> Result<Vec<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let cells = lib.grid_ring(h3.to_index()?, args::ring_size(k)?)?;
    Ok(from_indexes(cells))
}

/// h3_distance — grid steps between two cells.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::traversal::h3_distance;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let a = "8b754e649929fff".to_string();
/// assert_eq!(h3_distance(&lib, Some(&a), Some(&a)).unwrap(), Some(0));
/// assert_eq!(h3_distance(&lib, Some(&a), None).unwrap(), None);
/// ```
pub fn h3_distance<L, R>(lib: &L, a: Option<&R>, b: Option<&R>) -> Result<Option<i32>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let (Some(a), Some(b)) = (a, b) else {
        return Ok(None);
    };
    let (a, b) = (a.to_index()?, b.to_index()?);
    null_unless_incomparable(lib, "grid distance", a, b, lib.grid_distance(a, b))
}

/// h3_line — cells on the grid path from `start` to `end`, both included.
pub fn h3_line<L, R>(lib: &L, start: Option<&R>, end: Option<&R>) -> Result<Option<Vec<R>>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(None);
    };
    let (start, end) = (start.to_index()?, end.to_index()?);
    let path = null_unless_incomparable(lib, "grid line", start, end, lib.grid_path(start, end))?;
    Ok(path.map(from_indexes))
}

fn null_unless_incomparable<L, T>(
    lib: &L,
    what: &str,
    a: u64,
    b: u64,
    result: Result<T>,
) -> Result<Option<T>>
where
    L: IndexingLibrary + ?Sized,
{
    if let Err(e) = &result {
        if e.is_no_result() {
            let (res_a, res_b) = (lib.resolution(a)?, lib.resolution(b)?);
            if res_a != res_b {
                return Err(H3UdfError::IncomparableInputs(format!(
                    "cannot compute {what} between cells of different resolutions ({res_a} and {res_b})"
                )));
            }
        }
    }
    args::undefined_as_null(what, result)
}
