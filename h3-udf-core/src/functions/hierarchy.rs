//! Parent/child navigation and compaction.
//!
//! h3_to_parent / h3_to_parent_address, h3_to_children, h3_to_center_child,
//! compact / compact_address, uncompact / uncompact_address

use super::args;
use crate::error::Result;
use crate::index::{from_indexes, to_indexes, IndexRepr};
use crate::library::IndexingLibrary;

/// h3_to_parent — ancestor at resolution `res`.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::hierarchy::h3_to_parent;
/// use h3_udf_core::functions::inspection::h3_get_resolution;
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let parent = h3_to_parent(&lib, &"8b754e649929fff".to_string(), 9).unwrap();
/// assert_eq!(h3_get_resolution(&lib, &parent).unwrap(), 9);
/// ```
pub fn h3_to_parent<L, R>(lib: &L, h3: &R, res: i32) -> Result<R>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    Ok(R::from_index(lib.parent(h3.to_index()?, args::resolution(res)?)?))
}

/// h3_to_children — descendants at resolution `child_res`.
pub fn h3_to_children<L, R>(lib: &L, h3: &R, child_res: i32) -> Result<Vec<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let children = lib.children(h3.to_index()?, args::resolution(child_res)?)?;
    Ok(from_indexes(children))
}

/// h3_to_center_child — the child at resolution `child_res` sharing the
/// cell's centre.
pub fn h3_to_center_child<L, R>(lib: &L, h3: &R, child_res: i32) -> Result<R>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let child = lib.center_child(h3.to_index()?, args::resolution(child_res)?)?;
    Ok(R::from_index(child))
}

/// compact — replace complete sibling sets by their parent, recursively.
///
/// # Example
///
/// ```
/// use h3_udf_core::functions::hierarchy::{compact, h3_to_children};
/// use h3_udf_core::H3oLibrary;
///
/// let lib = H3oLibrary::new();
/// let parent = 0x85283473fffffff_i64;
/// let children = h3_to_children(&lib, &parent, 7).unwrap();
/// assert_eq!(compact(&lib, &children).unwrap(), vec![parent]);
/// ```
pub fn compact<L, R>(lib: &L, h3: &[R]) -> Result<Vec<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    Ok(from_indexes(lib.compact(&to_indexes(h3)?)?))
}

/// uncompact — expand every cell to resolution `res`.
pub fn uncompact<L, R>(lib: &L, h3: &[R], res: i32) -> Result<Vec<R>>
where
    L: IndexingLibrary + ?Sized,
    R: IndexRepr,
{
    let cells = lib.uncompact(&to_indexes(h3)?, args::resolution(res)?)?;
    Ok(from_indexes(cells))
}
