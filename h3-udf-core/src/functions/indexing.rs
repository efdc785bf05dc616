//! Coordinate ⇄ cell functions.
//!
//! geo_to_h3 / geo_to_h3_address, h3_to_geo, h3_to_geo_boundary,
//! h3_to_geo_boundary_polygon

use super::args;
use crate::error::Result;
use crate::index::IndexRepr;
use crate::library::IndexingLibrary;
use crate::wkt::{format_point, format_polygon, GeoPoint};

/// geo_to_h3 / geo_to_h3_address — cell of resolution `res` containing the
/// point. The representation of the result is picked by the caller.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::indexing::geo_to_h3;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let address: String = geo_to_h3(&lib, 0.0, 0.0, 11).unwrap();
/// assert_eq!(address, "8b754e649929fff");
/// let index: i64 = geo_to_h3(&lib, 0.0, 0.0, 11).unwrap();
/// assert_eq!(index, 628064021095030783);
/// ```
pub fn geo_to_h3<L, R>(lib: &L, lat: f64, lng: f64, res: i32) -> Result<R>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let index = lib.lat_lng_to_cell(GeoPoint::new(lat, lng), args::resolution(res)?)?;
    Ok(R::from_index(index))
}

/// h3_to_geo — centre of the cell as `POINT (lng lat)`.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::indexing::h3_to_geo;
/// use h3_udf_core::wkt::parse_point;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let wkt = h3_to_geo(&lib, &"8b754e649929fff".to_string()).unwrap();
/// let centre = parse_point(&wkt).unwrap();
/// assert!(centre.lat.abs() < 0.001 && centre.lng.abs() < 0.001);
/// ```
pub fn h3_to_geo<L, R>(lib: &L, h3: &R) -> Result<String>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    Ok(format_point(lib.cell_to_lat_lng(h3.to_index()?)?))
}

/// h3_to_geo_boundary — boundary vertices, one `POINT` per vertex.
pub fn h3_to_geo_boundary<L, R>(lib: &L, h3: &R) -> Result<Vec<String>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    Ok(lib
        .cell_boundary(h3.to_index()?)?
        .into_iter()
        .map(format_point)
        .collect())
}

/// h3_to_geo_boundary_polygon — boundary as a single `POLYGON`.
pub fn h3_to_geo_boundary_polygon<L, R>(lib: &L, h3: &R) -> Result<String>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    Ok(format_polygon(&lib.cell_boundary(h3.to_index()?)?))
}
