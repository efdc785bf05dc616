//! Directed-edge functions.
//!
//! Every function here propagates NULL: if any index argument is NULL the
//! result is NULL and the library is not consulted. An edge requested
//! between two cells that are not neighbours is also NULL.

use super::args;
use crate::error::Result;
use crate::index::{from_indexes, IndexRepr};
use crate::library::IndexingLibrary;
use crate::wkt::format_point;

/// h3_indexes_are_neighbors — `true` if the two cells share an edge.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::edges::h3_indexes_are_neighbors;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let cell = 628064021095030783_i64;
/// assert_eq!(h3_indexes_are_neighbors(&lib, Some(&cell), Some(&cell)).unwrap(), Some(false));
/// assert_eq!(h3_indexes_are_neighbors(&lib, Some(&cell), None).unwrap(), None);
/// ```
pub fn h3_indexes_are_neighbors<L, R>(lib: &L, a: Option<&R>, b: Option<&R>) -> Result<Option<bool>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let (Some(a), Some(b)) = (a, b) else {
        return Ok(None);
    };
    Ok(Some(lib.are_neighbors(a.to_index()?, b.to_index()?)?))
}

/// get_h3_unidirectional_edge — the edge from `origin` to `destination`.
pub fn get_h3_unidirectional_edge<L, R>(
    lib: &L,
    origin: Option<&R>,
    destination: Option<&R>,
) -> Result<Option<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let (Some(origin), Some(destination)) = (origin, destination) else {
        return Ok(None);
    };
    let edge = lib.directed_edge(origin.to_index()?, destination.to_index()?);
    Ok(args::undefined_as_null("get_h3_unidirectional_edge", edge)?.map(R::from_index))
}

/// h3_unidirectional_edge_is_valid — `true` if the value names a valid
/// directed edge. Unparseable addresses are reported as `false`.
pub fn h3_unidirectional_edge_is_valid<L, R>(lib: &L, edge: Option<&R>) -> Option<bool>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    edge.map(|e| e.to_index().is_ok_and(|index| lib.is_valid_directed_edge(index)))
}

pub fn get_origin_h3_index_from_unidirectional_edge<L, R>(lib: &L, edge: Option<&R>) -> Result<Option<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    edge.map(|e| Ok(R::from_index(lib.edge_origin(e.to_index()?)?)))
        .transpose()
}

pub fn get_destination_h3_index_from_unidirectional_edge<L, R>(
    lib: &L,
    edge: Option<&R>,
) -> Result<Option<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    edge.map(|e| Ok(R::from_index(lib.edge_destination(e.to_index()?)?)))
        .transpose()
}

/// get_h3_indexes_from_unidirectional_edge — `[origin, destination]`.
pub fn get_h3_indexes_from_unidirectional_edge<L, R>(
    lib: &L,
    edge: Option<&R>,
) -> Result<Option<Vec<R>>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let Some(edge) = edge else {
        return Ok(None);
    };
    let (origin, destination) = lib.edge_cells(edge.to_index()?)?;
    Ok(Some(vec![R::from_index(origin), R::from_index(destination)]))
}

/// get_h3_unidirectional_edges_from_hexagon — the six (five for a
/// pentagon) edges leaving the cell.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::edges::get_h3_unidirectional_edges_from_hexagon;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let cell = "8b754e649929fff".to_string();
/// let edges = get_h3_unidirectional_edges_from_hexagon(&lib, Some(&cell)).unwrap();
/// assert_eq!(edges.map(|e| e.len()), Some(6));
/// ```
pub fn get_h3_unidirectional_edges_from_hexagon<L, R>(
    lib: &L,
    h3: Option<&R>,
) -> Result<Option<Vec<R>>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let Some(h3) = h3 else {
        return Ok(None);
    };
    Ok(Some(from_indexes(lib.edges_from_cell(h3.to_index()?)?)))
}

/// get_h3_unidirectional_edge_boundary — the edge's vertices as `POINT`s.
pub fn get_h3_unidirectional_edge_boundary<L, R>(
    lib: &L,
    edge: Option<&R>,
) -> Result<Option<Vec<String>>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let Some(edge) = edge else {
        return Ok(None);
    };
    let boundary = lib.edge_boundary(edge.to_index()?)?;
    Ok(Some(boundary.into_iter().map(format_point).collect()))
}
