//! WKT text codec for the two shapes the H3 functions exchange with SQL.
//!
//! `POINT (lng lat)` and `POLYGON ((lng lat, lng lat, ...))`. Parsing is
//! token-based: numeric tokens are pulled out of the text in order and paired
//! as (longitude, latitude), so keywords, parentheses and separators are not
//! validated. Formatting always writes six fractional digits.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{H3UdfError, Result};

static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?").expect("numeric token pattern is valid")
});

/// A (latitude, longitude) pair in degrees.
///
/// Range checks are left to the indexing library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

fn numeric_tokens(text: &str) -> Result<Vec<f64>> {
    NUMERIC_TOKEN
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .parse::<f64>()
                .map_err(|e| H3UdfError::MalformedGeometry(format!("{}: {e}", m.as_str())))
        })
        .collect()
}

/// Parse `POINT (lng lat)` into a [`GeoPoint`].
///
/// Only the first two numeric tokens are used; anything after them is
/// ignored.
///
/// # Example
///
/// ```
/// use h3_udf_core::wkt::{parse_point, GeoPoint};
///
/// let p = parse_point("POINT (-73.985 40.758)").unwrap();
/// assert_eq!(p, GeoPoint::new(40.758, -73.985));
/// ```
pub fn parse_point(text: &str) -> Result<GeoPoint> {
    let mut tokens = NUMERIC_TOKEN.find_iter(text).map(|m| m.as_str());
    let (Some(lng), Some(lat)) = (tokens.next(), tokens.next()) else {
        return Err(H3UdfError::MalformedGeometry(format!(
            "expected two coordinates in {text:?}"
        )));
    };
    let parse = |tok: &str| {
        tok.parse::<f64>()
            .map_err(|e| H3UdfError::MalformedGeometry(format!("{tok}: {e}")))
    };
    Ok(GeoPoint::new(parse(lat)?, parse(lng)?))
}

/// Parse `POLYGON ((lng lat, ...))` into its ring, in appearance order.
///
/// The closing point is kept if present and not added if absent.
///
/// # Example
///
/// ```
/// use h3_udf_core::wkt::parse_polygon;
///
/// let ring = parse_polygon("POLYGON ((0 0, 1 0, 1 1))").unwrap();
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring[1].lng, 1.0);
/// ```
pub fn parse_polygon(text: &str) -> Result<Vec<GeoPoint>> {
    let tokens = numeric_tokens(text)?;
    if tokens.len() % 2 != 0 {
        return Err(H3UdfError::MalformedGeometry(format!(
            "odd number of coordinates ({}) in {text:?}",
            tokens.len()
        )));
    }
    Ok(tokens
        .chunks_exact(2)
        .map(|pair| GeoPoint::new(pair[1], pair[0]))
        .collect())
}

/// Format a point as `POINT (lng lat)`.
///
/// # Example
///
/// ```
/// use h3_udf_core::wkt::{format_point, GeoPoint};
///
/// assert_eq!(format_point(GeoPoint::new(1.5, 2.0)), "POINT (2.000000 1.500000)");
/// ```
pub fn format_point(point: GeoPoint) -> String {
    format!("POINT ({:.6} {:.6})", point.lng, point.lat)
}

/// Format a ring as `POLYGON ((lng lat, ...))`.
pub fn format_polygon(points: &[GeoPoint]) -> String {
    let ring = points
        .iter()
        .map(|p| format!("{:.6} {:.6}", p.lng, p.lat))
        .collect::<Vec<_>>()
        .join(", ");
    format!("POLYGON (({ring}))")
}
