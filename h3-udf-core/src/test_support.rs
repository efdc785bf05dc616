//! Library stubs for the function-layer tests.

use crate::error::Result;
use crate::library::{AreaUnit, IndexingLibrary, LengthUnit};
use crate::wkt::GeoPoint;

/// Fails the test on any call. Used to prove that NULL arguments short-circuit
/// before the library is reached.
pub(crate) struct UnreachableLibrary;

impl IndexingLibrary for UnreachableLibrary {
    fn is_valid_cell(&self, _index: u64) -> bool {
        unreachable!("is_valid_cell called")
    }

    fn base_cell(&self, _cell: u64) -> Result<u8> {
        unreachable!("base_cell called")
    }

    fn is_pentagon(&self, _cell: u64) -> Result<bool> {
        unreachable!("is_pentagon called")
    }

    fn resolution(&self, _cell: u64) -> Result<u8> {
        unreachable!("resolution called")
    }

    fn is_res_class_iii(&self, _cell: u64) -> Result<bool> {
        unreachable!("is_res_class_iii called")
    }

    fn icosahedron_faces(&self, _cell: u64) -> Result<Vec<u8>> {
        unreachable!("icosahedron_faces called")
    }

    fn lat_lng_to_cell(&self, _point: GeoPoint, _res: u8) -> Result<u64> {
        unreachable!("lat_lng_to_cell called")
    }

    fn cell_to_lat_lng(&self, _cell: u64) -> Result<GeoPoint> {
        unreachable!("cell_to_lat_lng called")
    }

    fn cell_boundary(&self, _cell: u64) -> Result<Vec<GeoPoint>> {
        unreachable!("cell_boundary called")
    }

    fn grid_disk(&self, _cell: u64, _k: u32) -> Result<Vec<u64>> {
        unreachable!("grid_disk called")
    }

    fn grid_ring(&self, _cell: u64, _k: u32) -> Result<Vec<u64>> {
        unreachable!("grid_ring called")
    }

    fn grid_distance(&self, _from: u64, _to: u64) -> Result<i32> {
        unreachable!("grid_distance called")
    }

    fn grid_path(&self, _from: u64, _to: u64) -> Result<Vec<u64>> {
        unreachable!("grid_path called")
    }

    fn polyfill(&self, _exterior: &[GeoPoint], _holes: &[Vec<GeoPoint>], _res: u8) -> Result<Vec<u64>> {
        unreachable!("polyfill called")
    }

    fn parent(&self, _cell: u64, _res: u8) -> Result<u64> {
        unreachable!("parent called")
    }

    fn children(&self, _cell: u64, _res: u8) -> Result<Vec<u64>> {
        unreachable!("children called")
    }

    fn center_child(&self, _cell: u64, _res: u8) -> Result<u64> {
        unreachable!("center_child called")
    }

    fn compact(&self, _cells: &[u64]) -> Result<Vec<u64>> {
        unreachable!("compact called")
    }

    fn uncompact(&self, _cells: &[u64], _res: u8) -> Result<Vec<u64>> {
        unreachable!("uncompact called")
    }

    fn cell_area(&self, _cell: u64, _unit: AreaUnit) -> Result<f64> {
        unreachable!("cell_area called")
    }

    fn great_circle_distance(&self, _a: GeoPoint, _b: GeoPoint, _unit: LengthUnit) -> Result<f64> {
        unreachable!("great_circle_distance called")
    }

    fn exact_edge_length(&self, _edge: u64, _unit: LengthUnit) -> Result<f64> {
        unreachable!("exact_edge_length called")
    }

    fn hex_area(&self, _res: u8, _unit: AreaUnit) -> Result<f64> {
        unreachable!("hex_area called")
    }

    fn edge_length(&self, _res: u8, _unit: LengthUnit) -> Result<f64> {
        unreachable!("edge_length called")
    }

    fn num_cells(&self, _res: u8) -> Result<u64> {
        unreachable!("num_cells called")
    }

    fn res0_cells(&self) -> Vec<u64> {
        unreachable!("res0_cells called")
    }

    fn pentagons(&self, _res: u8) -> Result<Vec<u64>> {
        unreachable!("pentagons called")
    }

    fn are_neighbors(&self, _a: u64, _b: u64) -> Result<bool> {
        unreachable!("are_neighbors called")
    }

    fn directed_edge(&self, _origin: u64, _destination: u64) -> Result<u64> {
        unreachable!("directed_edge called")
    }

    fn is_valid_directed_edge(&self, _index: u64) -> bool {
        unreachable!("is_valid_directed_edge called")
    }

    fn edge_origin(&self, _edge: u64) -> Result<u64> {
        unreachable!("edge_origin called")
    }

    fn edge_destination(&self, _edge: u64) -> Result<u64> {
        unreachable!("edge_destination called")
    }

    fn edge_cells(&self, _edge: u64) -> Result<(u64, u64)> {
        unreachable!("edge_cells called")
    }

    fn edges_from_cell(&self, _cell: u64) -> Result<Vec<u64>> {
        unreachable!("edges_from_cell called")
    }

    fn edge_boundary(&self, _edge: u64) -> Result<Vec<GeoPoint>> {
        unreachable!("edge_boundary called")
    }
}
