//! Isochrone polygon and bearing ordering.

use iso_core::{GeoPoint, bearing};

/// Sort `points` by ascending bearing from `origin`.
///
/// The sort is stable: points with equal bearings keep their input order.
/// When every point sits at a distinct bearing (true for solver output,
/// where each vertex comes from its own fixed angle) the result traces a
/// simple polygon around `origin`.  Arbitrary input is not checked.
pub fn order_by_bearing(origin: GeoPoint, points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut keyed: Vec<(f64, GeoPoint)> = points
        .iter()
        .map(|&p| (bearing(origin, p), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// The fitted boundary: vertices in ascending bearing order around `origin`.
///
/// The ring is implicitly closed (last vertex connects back to the first);
/// use [`closed_ring`][Self::closed_ring] for formats that want the first
/// vertex repeated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsochronePolygon {
    origin:   GeoPoint,
    vertices: Vec<GeoPoint>,
}

impl IsochronePolygon {
    /// Order `points` around `origin` and wrap them.
    pub fn from_points(origin: GeoPoint, points: &[GeoPoint]) -> Self {
        Self {
            origin,
            vertices: order_by_bearing(origin, points),
        }
    }

    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    #[inline]
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bearing of each vertex from the origin, non-decreasing.
    pub fn bearings(&self) -> Vec<f64> {
        self.vertices.iter().map(|&v| bearing(self.origin, v)).collect()
    }

    /// Vertices with the first one repeated at the end.
    pub fn closed_ring(&self) -> Vec<GeoPoint> {
        let mut ring = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            ring.push(first);
        }
        ring
    }

    pub fn into_vertices(self) -> Vec<GeoPoint> {
        self.vertices
    }
}
