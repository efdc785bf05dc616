use geo::{Coord, LineString, Polygon};
use h3o::geom::{PolyfillConfig, ToCells};
use h3o::{CellIndex, DirectedEdgeIndex, LatLng, Resolution};

use super::{AreaUnit, IndexingLibrary, LengthUnit};
use crate::error::{H3UdfError, Result};
use crate::wkt::GeoPoint;

/// [`IndexingLibrary`] backed by the pure-Rust `h3o` crate.
///
/// Stateless; construction is free and the value can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct H3oLibrary;

impl H3oLibrary {
    pub fn new() -> Self {
        Self
    }
}

fn cell(index: u64) -> Result<CellIndex> {
    CellIndex::try_from(index)
        .map_err(|e| H3UdfError::InvalidArgument(format!("{index:x} is not a valid cell: {e}")))
}

fn cells(indexes: &[u64]) -> Result<Vec<CellIndex>> {
    indexes.iter().map(|&i| cell(i)).collect()
}

fn edge(index: u64) -> Result<DirectedEdgeIndex> {
    DirectedEdgeIndex::try_from(index).map_err(|e| {
        H3UdfError::InvalidArgument(format!("{index:x} is not a valid directed edge: {e}"))
    })
}

fn resolution(res: u8) -> Result<Resolution> {
    Resolution::try_from(res).map_err(|e| H3UdfError::InvalidArgument(e.to_string()))
}

fn lat_lng(point: GeoPoint) -> Result<LatLng> {
    LatLng::new(point.lat, point.lng).map_err(|e| H3UdfError::InvalidArgument(e.to_string()))
}

fn geo_point(ll: LatLng) -> GeoPoint {
    GeoPoint::new(ll.lat(), ll.lng())
}

fn ring(points: &[GeoPoint]) -> LineString<f64> {
    LineString::from(
        points
            .iter()
            .map(|p| Coord { x: p.lng, y: p.lat })
            .collect::<Vec<_>>(),
    )
}

fn indexes<T: Into<u64>>(iter: impl IntoIterator<Item = T>) -> Vec<u64> {
    iter.into_iter().map(Into::into).collect()
}

impl IndexingLibrary for H3oLibrary {
    fn is_valid_cell(&self, index: u64) -> bool {
        CellIndex::try_from(index).is_ok()
    }

    fn base_cell(&self, index: u64) -> Result<u8> {
        Ok(u8::from(cell(index)?.base_cell()))
    }

    fn is_pentagon(&self, index: u64) -> Result<bool> {
        Ok(cell(index)?.is_pentagon())
    }

    fn resolution(&self, index: u64) -> Result<u8> {
        Ok(u8::from(cell(index)?.resolution()))
    }

    fn is_res_class_iii(&self, index: u64) -> Result<bool> {
        Ok(cell(index)?.resolution().is_class3())
    }

    fn icosahedron_faces(&self, index: u64) -> Result<Vec<u8>> {
        Ok(cell(index)?.icosahedron_faces().iter().map(u8::from).collect())
    }

    fn lat_lng_to_cell(&self, point: GeoPoint, res: u8) -> Result<u64> {
        Ok(u64::from(lat_lng(point)?.to_cell(resolution(res)?)))
    }

    fn cell_to_lat_lng(&self, index: u64) -> Result<GeoPoint> {
        Ok(geo_point(LatLng::from(cell(index)?)))
    }

    fn cell_boundary(&self, index: u64) -> Result<Vec<GeoPoint>> {
        Ok(cell(index)?
            .boundary()
            .iter()
            .map(|ll| geo_point(*ll))
            .collect())
    }

    fn grid_disk(&self, index: u64, k: u32) -> Result<Vec<u64>> {
        Ok(indexes(cell(index)?.grid_disk::<Vec<_>>(k)))
    }

    fn grid_ring(&self, index: u64, k: u32) -> Result<Vec<u64>> {
        cell(index)?
            .grid_ring_fast(k)
            .collect::<Option<Vec<_>>>()
            .map(indexes)
            .ok_or_else(|| {
                H3UdfError::NoResultExists(format!("pentagon encountered within {k} rings"))
            })
    }

    fn grid_distance(&self, from: u64, to: u64) -> Result<i32> {
        cell(from)?
            .grid_distance(cell(to)?)
            .map_err(|e| H3UdfError::NoResultExists(format!("grid distance undefined: {e}")))
    }

    fn grid_path(&self, from: u64, to: u64) -> Result<Vec<u64>> {
        cell(from)?
            .grid_path_cells(cell(to)?)
            .and_then(|path| path.collect::<std::result::Result<Vec<_>, _>>())
            .map(indexes)
            .map_err(|e| H3UdfError::NoResultExists(format!("grid line undefined: {e}")))
    }

    fn polyfill(
        &self,
        exterior: &[GeoPoint],
        holes: &[Vec<GeoPoint>],
        res: u8,
    ) -> Result<Vec<u64>> {
        let res = resolution(res)?;
        let polygon = Polygon::new(ring(exterior), holes.iter().map(|h| ring(h)).collect());
        let polygon = h3o::geom::Polygon::from_degrees(polygon)
            .map_err(|e| H3UdfError::InvalidArgument(format!("invalid polygon: {e}")))?;
        let mut out = indexes(polygon.to_cells(PolyfillConfig::new(res)));
        out.sort_unstable();
        out.dedup();
        Ok(out)
    }

    fn parent(&self, index: u64, res: u8) -> Result<u64> {
        let c = cell(index)?;
        c.parent(resolution(res)?).map(u64::from).ok_or_else(|| {
            H3UdfError::InvalidArgument(format!(
                "parent resolution {res} is finer than cell resolution {}",
                u8::from(c.resolution())
            ))
        })
    }

    fn children(&self, index: u64, res: u8) -> Result<Vec<u64>> {
        Ok(indexes(cell(index)?.children(resolution(res)?)))
    }

    fn center_child(&self, index: u64, res: u8) -> Result<u64> {
        let c = cell(index)?;
        c.center_child(resolution(res)?)
            .map(u64::from)
            .ok_or_else(|| {
                H3UdfError::InvalidArgument(format!(
                    "child resolution {res} is coarser than cell resolution {}",
                    u8::from(c.resolution())
                ))
            })
    }

    fn compact(&self, indexes_in: &[u64]) -> Result<Vec<u64>> {
        let mut input = cells(indexes_in)?;
        input.sort_unstable();
        let compacted = CellIndex::compact(input)
            .map_err(|e| H3UdfError::InvalidArgument(format!("cannot compact: {e}")))?;
        Ok(indexes(compacted))
    }

    fn uncompact(&self, indexes_in: &[u64], res: u8) -> Result<Vec<u64>> {
        let target = resolution(res)?;
        let input = cells(indexes_in)?;
        if let Some(finer) = input.iter().find(|c| u8::from(c.resolution()) > res) {
            return Err(H3UdfError::InvalidArgument(format!(
                "cell {finer} is finer than uncompact resolution {res}"
            )));
        }
        Ok(indexes(CellIndex::uncompact(input, target)))
    }

    fn cell_area(&self, index: u64, unit: AreaUnit) -> Result<f64> {
        let c = cell(index)?;
        Ok(match unit {
            AreaUnit::M2 => c.area_m2(),
            AreaUnit::Km2 => c.area_km2(),
            AreaUnit::Rads2 => c.area_rads2(),
        })
    }

    fn great_circle_distance(&self, a: GeoPoint, b: GeoPoint, unit: LengthUnit) -> Result<f64> {
        let (a, b) = (lat_lng(a)?, lat_lng(b)?);
        Ok(match unit {
            LengthUnit::M => a.distance_m(b),
            LengthUnit::Km => a.distance_km(b),
            LengthUnit::Rads => a.distance_rads(b),
        })
    }

    fn exact_edge_length(&self, index: u64, unit: LengthUnit) -> Result<f64> {
        let e = edge(index)?;
        Ok(match unit {
            LengthUnit::M => e.length_m(),
            LengthUnit::Km => e.length_km(),
            LengthUnit::Rads => e.length_rads(),
        })
    }

    fn hex_area(&self, res: u8, unit: AreaUnit) -> Result<f64> {
        let r = resolution(res)?;
        Ok(match unit {
            AreaUnit::M2 => r.area_m2(),
            AreaUnit::Km2 => r.area_km2(),
            AreaUnit::Rads2 => r.area_rads2(),
        })
    }

    fn edge_length(&self, res: u8, unit: LengthUnit) -> Result<f64> {
        let r = resolution(res)?;
        Ok(match unit {
            LengthUnit::M => r.edge_length_m(),
            LengthUnit::Km => r.edge_length_km(),
            LengthUnit::Rads => r.edge_length_rads(),
        })
    }

    fn num_cells(&self, res: u8) -> Result<u64> {
        Ok(resolution(res)?.cell_count())
    }

    fn res0_cells(&self) -> Vec<u64> {
        indexes(CellIndex::base_cells())
    }

    fn pentagons(&self, res: u8) -> Result<Vec<u64>> {
        Ok(indexes(resolution(res)?.pentagons()))
    }

    fn are_neighbors(&self, a: u64, b: u64) -> Result<bool> {
        // Cells of different resolutions are never neighbours.
        Ok(cell(a)?.is_neighbor_with(cell(b)?).unwrap_or(false))
    }

    fn directed_edge(&self, origin: u64, destination: u64) -> Result<u64> {
        cell(origin)?
            .edge(cell(destination)?)
            .map(u64::from)
            .ok_or_else(|| {
                H3UdfError::NoResultExists(format!(
                    "{origin:x} and {destination:x} are not neighbors"
                ))
            })
    }

    fn is_valid_directed_edge(&self, index: u64) -> bool {
        DirectedEdgeIndex::try_from(index).is_ok()
    }

    fn edge_origin(&self, index: u64) -> Result<u64> {
        Ok(u64::from(edge(index)?.origin()))
    }

    fn edge_destination(&self, index: u64) -> Result<u64> {
        Ok(u64::from(edge(index)?.destination()))
    }

    fn edge_cells(&self, index: u64) -> Result<(u64, u64)> {
        let (origin, destination) = edge(index)?.cells();
        Ok((u64::from(origin), u64::from(destination)))
    }

    fn edges_from_cell(&self, index: u64) -> Result<Vec<u64>> {
        Ok(indexes(cell(index)?.edges()))
    }

    fn edge_boundary(&self, index: u64) -> Result<Vec<GeoPoint>> {
        Ok(edge(index)?
            .boundary()
            .iter()
            .map(|ll| geo_point(*ll))
            .collect())
    }
}
