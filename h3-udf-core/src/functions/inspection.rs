//! Index inspection functions.
//!
//! h3_is_valid, h3_get_base_cell, h3_is_pentagon, h3_get_resolution,
//! h3_is_res_class_iii, h3_get_faces, h3_to_string, string_to_h3

use crate::error::Result;
use crate::index::{index_to_string, string_to_index, IndexRepr};
use crate::library::IndexingLibrary;

/// h3_is_valid — `true` if the value names a valid cell.
///
/// An address that is not even hexadecimal is reported as invalid rather
/// than as an error.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::inspection::h3_is_valid;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// assert!(h3_is_valid(&lib, &"8b754e649929fff".to_string()));
/// assert!(!h3_is_valid(&lib, &0_i64));
/// ```
pub fn h3_is_valid<L, R>(lib: &L, h3: &R) -> bool
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    h3.to_index().is_ok_and(|index| lib.is_valid_cell(index))
}

/// h3_get_base_cell — base cell number (0..=121).
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::inspection::h3_get_base_cell;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// assert_eq!(h3_get_base_cell(&lib, &"8b754e649929fff".to_string()).unwrap(), 58);
/// ```
pub fn h3_get_base_cell<L, R>(lib: &L, h3: &R) -> Result<i32>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    Ok(i32::from(lib.base_cell(h3.to_index()?)?))
}

/// h3_is_pentagon — `true` for the twelve pentagons of each resolution.
pub fn h3_is_pentagon<L, R>(lib: &L, h3: &R) -> Result<bool>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    lib.is_pentagon(h3.to_index()?)
}

/// h3_get_resolution — resolution of the cell (0..=15).
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::inspection::h3_get_resolution;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// assert_eq!(h3_get_resolution(&lib, &628064021095030783_i64).unwrap(), 11);
/// ```
pub fn h3_get_resolution<L, R>(lib: &L, h3: &R) -> Result<i32>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    Ok(i32::from(lib.resolution(h3.to_index()?)?))
}

/// h3_is_res_class_iii — `true` for odd (Class III) resolutions.
pub fn h3_is_res_class_iii<L, R>(lib: &L, h3: &R) -> Result<bool>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    lib.is_res_class_iii(h3.to_index()?)
}

/// h3_get_faces — icosahedron faces the cell intersects. NULL in, NULL out.
pub fn h3_get_faces<L, R>(lib: &L, h3: Option<&R>) -> Result<Option<Vec<i32>>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let Some(h3) = h3 else {
        return Ok(None);
    };
    let faces = lib.icosahedron_faces(h3.to_index()?)?;
    Ok(Some(faces.into_iter().map(i32::from).collect()))
}

/// h3_to_string — integer index to its hexadecimal address.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::inspection::h3_to_string;
///
/// assert_eq!(h3_to_string(628064021095030783), "8b754e649929fff");
/// ```
pub fn h3_to_string(h3: i64) -> String {
    index_to_string(h3 as u64)
}

/// string_to_h3 — hexadecimal address to its integer index.
pub fn string_to_h3(address: &str) -> Result<i64> {
    Ok(string_to_index(address)? as i64)
}
