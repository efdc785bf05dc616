//! The seam between the SQL functions and the hexagonal grid engine.
//!
//! [`IndexingLibrary`] speaks raw `u64` indexes and [`GeoPoint`]s and reports
//! failures as either [`H3UdfError::InvalidArgument`] (the input is wrong) or
//! [`H3UdfError::NoResultExists`] (the input is fine but the answer is
//! undefined). The function layer decides what each of those means in SQL.

use std::fmt;
use std::str::FromStr;

use crate::error::{H3UdfError, Result};
use crate::wkt::GeoPoint;

mod h3o_library;

pub use h3o_library::H3oLibrary;

/// Unit for cell and hexagon areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    M2,
    Km2,
    Rads2,
}

impl FromStr for AreaUnit {
    type Err = H3UdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m2" => Ok(Self::M2),
            "km2" => Ok(Self::Km2),
            "rads2" => Ok(Self::Rads2),
            _ => Err(H3UdfError::InvalidArgument(format!(
                "unknown area unit {s:?} (expected m2, km2 or rads2)"
            ))),
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::M2 => "m2",
            Self::Km2 => "km2",
            Self::Rads2 => "rads2",
        })
    }
}

/// Unit for edge lengths and point distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    M,
    Km,
    Rads,
}

impl FromStr for LengthUnit {
    type Err = H3UdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" => Ok(Self::M),
            "km" => Ok(Self::Km),
            "rads" => Ok(Self::Rads),
            _ => Err(H3UdfError::InvalidArgument(format!(
                "unknown length unit {s:?} (expected m, km or rads)"
            ))),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::M => "m",
            Self::Km => "km",
            Self::Rads => "rads",
        })
    }
}

/// Operations the SQL functions delegate to.
///
/// Implementations hold no mutable state, so one handle is shared by every
/// call on every thread.
pub trait IndexingLibrary: Send + Sync {
    // Inspection
    fn is_valid_cell(&self, index: u64) -> bool;
    fn base_cell(&self, cell: u64) -> Result<u8>;
    fn is_pentagon(&self, cell: u64) -> Result<bool>;
    fn resolution(&self, cell: u64) -> Result<u8>;
    fn is_res_class_iii(&self, cell: u64) -> Result<bool>;
    fn icosahedron_faces(&self, cell: u64) -> Result<Vec<u8>>;

    // Indexing
    fn lat_lng_to_cell(&self, point: GeoPoint, res: u8) -> Result<u64>;
    fn cell_to_lat_lng(&self, cell: u64) -> Result<GeoPoint>;
    fn cell_boundary(&self, cell: u64) -> Result<Vec<GeoPoint>>;

    // Traversal
    fn grid_disk(&self, cell: u64, k: u32) -> Result<Vec<u64>>;
    /// Hollow ring at exactly `k` steps. `NoResultExists` if a pentagon is
    /// in the way.
    fn grid_ring(&self, cell: u64, k: u32) -> Result<Vec<u64>>;
    /// `NoResultExists` for every failure, including mismatched resolutions;
    /// callers tell those apart.
    fn grid_distance(&self, from: u64, to: u64) -> Result<i32>;
    /// Same failure contract as [`IndexingLibrary::grid_distance`].
    fn grid_path(&self, from: u64, to: u64) -> Result<Vec<u64>>;

    // Regions
    fn polyfill(&self, exterior: &[GeoPoint], holes: &[Vec<GeoPoint>], res: u8)
        -> Result<Vec<u64>>;

    // Hierarchy
    fn parent(&self, cell: u64, res: u8) -> Result<u64>;
    fn children(&self, cell: u64, res: u8) -> Result<Vec<u64>>;
    fn center_child(&self, cell: u64, res: u8) -> Result<u64>;
    fn compact(&self, cells: &[u64]) -> Result<Vec<u64>>;
    fn uncompact(&self, cells: &[u64], res: u8) -> Result<Vec<u64>>;

    // Measurement
    fn cell_area(&self, cell: u64, unit: AreaUnit) -> Result<f64>;
    fn great_circle_distance(&self, a: GeoPoint, b: GeoPoint, unit: LengthUnit) -> Result<f64>;
    fn exact_edge_length(&self, edge: u64, unit: LengthUnit) -> Result<f64>;
    fn hex_area(&self, res: u8, unit: AreaUnit) -> Result<f64>;
    fn edge_length(&self, res: u8, unit: LengthUnit) -> Result<f64>;
    fn num_cells(&self, res: u8) -> Result<u64>;
    fn res0_cells(&self) -> Vec<u64>;
    fn pentagons(&self, res: u8) -> Result<Vec<u64>>;

    // Directed edges
    fn are_neighbors(&self, a: u64, b: u64) -> Result<bool>;
    /// `NoResultExists` when the cells are not neighbours.
    fn directed_edge(&self, origin: u64, destination: u64) -> Result<u64>;
    fn is_valid_directed_edge(&self, index: u64) -> bool;
    fn edge_origin(&self, edge: u64) -> Result<u64>;
    fn edge_destination(&self, edge: u64) -> Result<u64>;
    fn edge_cells(&self, edge: u64) -> Result<(u64, u64)>;
    fn edges_from_cell(&self, cell: u64) -> Result<Vec<u64>>;
    fn edge_boundary(&self, edge: u64) -> Result<Vec<GeoPoint>>;
}
