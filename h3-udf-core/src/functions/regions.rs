//! Polygon filling.
//!
//! polyfill / polyfill_address take the outer ring and holes as lists of WKT
//! points; polyfill_wkt / polyfill_wkt_address take a single WKT polygon.

use super::args;
use crate::error::Result;
use crate::index::{from_indexes, IndexRepr};
use crate::library::IndexingLibrary;
use crate::wkt::{parse_point, parse_polygon, GeoPoint};

fn parse_ring<S: AsRef<str>>(points: &[S]) -> Result<Vec<GeoPoint>> {
    points.iter().map(|p| parse_point(p.as_ref())).collect()
}

/// polyfill — cells whose centre lies inside the polygon and outside every
/// hole.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::regions::polyfill;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let square = ["POINT (0 0)", "POINT (0.01 0)", "POINT (0.01 0.01)", "POINT (0 0.01)"];
/// let cells: Vec<i64> = polyfill(&lib, &square, &Vec::<Vec<&str>>::new(), 9).unwrap();
/// assert!(!cells.is_empty());
/// ```
pub fn polyfill<L, R, S>(lib: &L, points: &[S], holes: &[Vec<S>], res: i32) -> Result<Vec<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
    S: AsRef<str>,
{
    let exterior = parse_ring(points)?;
    let holes = holes
        .iter()
        .map(|h| parse_ring(h))
        .collect::<Result<Vec<_>>>()?;
    let cells = lib.polyfill(&exterior, &holes, args::resolution(res)?)?;
    Ok(from_indexes(cells))
}

/// polyfill_wkt — same as [`polyfill`] for a `POLYGON ((...))` without holes.
pub fn polyfill_wkt<L, R>(lib: &L, polygon: &str, res: i32) -> Result<Vec<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let exterior = parse_polygon(polygon)?;
    let cells = lib.polyfill(&exterior, &[], args::resolution(res)?)?;
    Ok(from_indexes(cells))
}
