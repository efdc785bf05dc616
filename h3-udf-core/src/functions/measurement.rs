//! Measurement and per-resolution catalogue functions.
//!
//! cell_area, point_dist, exact_edge_length, hex_area, edge_length,
//! num_hexagons, get_res_0_indexes(_addresses),
//! get_pentagon_indexes(_addresses)

use super::args;
use crate::error::Result;
use crate::index::{from_indexes, IndexRepr};
use crate::library::{AreaUnit, IndexingLibrary, LengthUnit};
use crate::wkt::parse_point;

/// cell_area — exact area of the cell in `unit` (`m2`, `km2`, `rads2`).
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::measurement::cell_area;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let m2 = cell_area(&lib, &628064021095030783_i64, "m2").unwrap();
/// let km2 = cell_area(&lib, &628064021095030783_i64, "km2").unwrap();
/// assert!((m2 / 1e6 - km2).abs() < 1e-9);
/// ```
pub fn cell_area<L, R>(lib: &L, h3: &R, unit: &str) -> Result<f64>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let unit: AreaUnit = unit.parse()?;
    lib.cell_area(h3.to_index()?, unit)
}

/// point_dist — great-circle distance between two WKT points.
pub fn point_dist<L>(lib: &L, a: Option<&str>, b: Option<&str>, unit: &str) -> Result<Option<f64>>
where
    L: IndexingLibrary + ?Sized,
{
    let (Some(a), Some(b)) = (a, b) else {
        return Ok(None);
    };
    let unit: LengthUnit = unit.parse()?;
    let distance = lib.great_circle_distance(parse_point(a)?, parse_point(b)?, unit)?;
    Ok(Some(distance))
}

/// exact_edge_length — length of a directed edge in `unit` (`m`, `km`,
/// `rads`).
pub fn exact_edge_length<L, R>(lib: &L, edge: Option<&R>, unit: &str) -> Result<Option<f64>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let Some(edge) = edge else {
        return Ok(None);
    };
    let unit: LengthUnit = unit.parse()?;
    Ok(Some(lib.exact_edge_length(edge.to_index()?, unit)?))
}

/// hex_area — average hexagon area at a resolution.
pub fn hex_area<L>(lib: &L, res: i32, unit: &str) -> Result<f64>
where
    L: IndexingLibrary + ?Sized,
{
    let unit: AreaUnit = unit.parse()?;
    lib.hex_area(args::resolution(res)?, unit)
}

/// edge_length — average hexagon edge length at a resolution.
pub fn edge_length<L>(lib: &L, res: i32, unit: &str) -> Result<f64>
where
    L: IndexingLibrary + ?Sized,
{
    let unit: LengthUnit = unit.parse()?;
    lib.edge_length(args::resolution(res)?, unit)
}

/// num_hexagons — number of cells (pentagons included) at a resolution.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::measurement::num_hexagons;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// assert_eq!(num_hexagons(&lib, 1).unwrap(), 842);
/// ```
pub fn num_hexagons<L>(lib: &L, res: i32) -> Result<i64>
where
    L: IndexingLibrary + ?Sized,
{
    let count = lib.num_cells(args::resolution(res)?)?;
    // 15 is the finest resolution, with about 5.7e14 cells.
    Ok(count as i64)
}

/// get_res_0_indexes — the 122 base cells.
pub fn get_res_0_indexes<L, R>(lib: &L) -> Vec<R>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    from_indexes(lib.res0_cells())
}

/// get_pentagon_indexes — the twelve pentagons at a resolution.
pub fn get_pentagon_indexes<L, R>(lib: &L, res: i32) -> Result<Vec<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    Ok(from_indexes(lib.pentagons(args::resolution(res)?)?))
}
