//! Shape query engine: border and containment tests for hit-testing.
//!
//! This module is organized into submodules:
//! - `shape`: shape descriptors and their construction from elements
//! - `geometry`: per-family point predicates
//!
//! Nothing here depends on the router; pointer interaction code calls these
//! directly.

pub mod geometry;
pub mod shape;

pub use shape::{Curve, Ellipse, Polygon, Polyline, Shape, shape_for_element};

use crate::types::{Frame, Point};
use geometry::{
    close_polygon, point_in_ellipse, point_in_polygon, point_on_curve, point_on_ellipse,
    point_on_polycurve, point_on_polygon, point_on_polyline, point_on_segment,
};

/// Is `point` on the shape's border, within `tolerance`?
pub fn is_point_on_shape<F: Frame>(point: Point<F>, shape: &Shape<F>, tolerance: f64) -> bool {
    match shape {
        Shape::Polygon(polygon) => point_on_polygon(point, polygon, tolerance),
        Shape::Ellipse(ellipse) => point_on_ellipse(point, ellipse, tolerance),
        Shape::Line(segment) => point_on_segment(point, segment, tolerance),
        Shape::Polyline(polyline) => point_on_polyline(point, &polyline.segments, tolerance),
        Shape::Curve(curve) => point_on_curve(point, curve, tolerance),
        Shape::Polycurve(curves) => point_on_polycurve(point, curves, tolerance),
    }
}

/// Is `point` inside the shape?
///
/// Lines and curves have no interior. A polyline is closed into a polygon
/// first. Polycurves have no containment test yet and always answer `false`.
pub fn is_point_in_shape<F: Frame>(point: Point<F>, shape: &Shape<F>) -> bool {
    match shape {
        Shape::Polygon(polygon) => point_in_polygon(point, polygon.vertices()),
        Shape::Ellipse(ellipse) => point_in_ellipse(point, ellipse),
        Shape::Line(_) | Shape::Curve(_) => false,
        Shape::Polyline(polyline) => point_in_polygon(point, &close_polygon(polyline.points())),
        // TODO: sample each curve with polyline_from_curve and ray cast the closed outline
        Shape::Polycurve(_) => false,
    }
}

/// Is `point` inside an arbitrary closed region (viewport, selection box)?
pub fn is_point_in_bounds<F: Frame>(point: Point<F>, bounds: &Polygon<F>) -> bool {
    point_in_polygon(point, bounds.vertices())
}
