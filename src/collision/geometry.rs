//! Point predicates for each shape family.

use std::f64::consts::FRAC_1_SQRT_2;

use glam::DVec2;

use super::shape::{Curve, Ellipse, Polygon};
use crate::defaults::CURVE_SEGMENTS;
use crate::types::{Frame, Point, Segment, Vector};

/// Shortest distance from `p` to the segment (projection clamped to the ends)
pub fn distance_to_segment<F: Frame>(p: Point<F>, segment: &Segment<F>) -> f64 {
    let d = segment.b - segment.a;
    let len_sq = d.length_squared();
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((p - segment.a).dot(d) / len_sq).clamp(0.0, 1.0)
    };
    p.distance(segment.a + d * t)
}

/// Distance is exactly zero, or strictly under the tolerance
fn within(distance: f64, tolerance: f64) -> bool {
    distance == 0.0 || distance < tolerance
}

pub fn point_on_segment<F: Frame>(p: Point<F>, segment: &Segment<F>, tolerance: f64) -> bool {
    within(distance_to_segment(p, segment), tolerance)
}

pub fn point_on_polyline<F: Frame>(p: Point<F>, segments: &[Segment<F>], tolerance: f64) -> bool {
    segments.iter().any(|s| point_on_segment(p, s, tolerance))
}

/// Border test over every edge, the closing edge included
pub fn point_on_polygon<F: Frame>(p: Point<F>, polygon: &Polygon<F>, tolerance: f64) -> bool {
    edges(polygon.vertices()).any(|s| point_on_segment(p, &s, tolerance))
}

fn edges<F: Frame>(vertices: &[Point<F>]) -> impl Iterator<Item = Segment<F>> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment::new(vertices[i], vertices[(i + 1) % n]))
}

/// Even-odd ray cast. Works on open or explicitly closed vertex lists.
pub fn point_in_polygon<F: Frame>(p: Point<F>, vertices: &[Point<F>]) -> bool {
    let mut inside = false;
    let n = vertices.len();
    if n == 0 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (vertices[i], vertices[j]);
        if ((vi.y > p.y && vj.y <= p.y) || (vi.y <= p.y && vj.y > p.y))
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Append the first vertex if the list is not already closed
pub fn close_polygon<F: Frame>(mut vertices: Vec<Point<F>>) -> Vec<Point<F>> {
    if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
        if first != last {
            vertices.push(first);
        }
    }
    vertices
}

/// Coordinates of `p` in the ellipse's own axis-aligned frame
fn relative_to_ellipse<F: Frame>(p: Point<F>, ellipse: &Ellipse<F>) -> Vector {
    let (sin, cos) = (-ellipse.angle).sin_cos();
    let d = p - ellipse.center;
    DVec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

pub fn point_in_ellipse<F: Frame>(p: Point<F>, ellipse: &Ellipse<F>) -> bool {
    if ellipse.is_degenerate() {
        return false;
    }
    let r = relative_to_ellipse(p, ellipse);
    (r.x / ellipse.half_width).powi(2) + (r.y / ellipse.half_height).powi(2) <= 1.0
}

/// Distance from `p` to the ellipse outline.
///
/// Iterative closest-point search on the first quadrant: start at 45°,
/// refine three times against the local curvature center, then mirror the
/// result back into the point's quadrant.
pub fn distance_to_ellipse<F: Frame>(p: Point<F>, ellipse: &Ellipse<F>) -> f64 {
    let rel = relative_to_ellipse(p, ellipse);
    let (a, b) = (ellipse.half_width, ellipse.half_height);

    if ellipse.is_degenerate() {
        // Collapsed to a segment along the longer axis
        let axis = if a >= b { DVec2::new(a, 0.0) } else { DVec2::new(0.0, b) };
        let seg = Segment::<F>::new(Point::from_vec(-axis), Point::from_vec(axis));
        return distance_to_segment(Point::from_vec(rel), &seg);
    }

    let (px, py) = (rel.x.abs(), rel.y.abs());
    let (mut tx, mut ty) = (FRAC_1_SQRT_2, FRAC_1_SQRT_2);

    for _ in 0..3 {
        let x = a * tx;
        let y = b * ty;
        let ex = (a * a - b * b) * tx.powi(3) / a;
        let ey = (b * b - a * a) * ty.powi(3) / b;

        let (rx, ry) = (x - ex, y - ey);
        let (qx, qy) = (px - ex, py - ey);
        let r = rx.hypot(ry);
        let q = qx.hypot(qy);
        if q == 0.0 {
            break;
        }

        let nx = ((qx * r / q + ex) / a).clamp(0.0, 1.0);
        let ny = ((qy * r / q + ey) / b).clamp(0.0, 1.0);
        let t = nx.hypot(ny);
        if t == 0.0 {
            break;
        }
        tx = nx / t;
        ty = ny / t;
    }

    let closest = DVec2::new(a * tx.copysign(rel.x), b * ty.copysign(rel.y));
    rel.distance(closest)
}

pub fn point_on_ellipse<F: Frame>(p: Point<F>, ellipse: &Ellipse<F>, tolerance: f64) -> bool {
    distance_to_ellipse(p, ellipse) <= tolerance
}

/// Sample a curve into `segments` straight pieces of equal parameter step
pub fn polyline_from_curve<F: Frame>(curve: &Curve<F>, segments: usize) -> Vec<Segment<F>> {
    let segments = segments.max(1);
    let mut prev = curve.start;
    (1..=segments)
        .map(|i| {
            let next = curve.point_at(i as f64 / segments as f64);
            let seg = Segment::new(prev, next);
            prev = next;
            seg
        })
        .collect()
}

pub fn point_on_curve<F: Frame>(p: Point<F>, curve: &Curve<F>, tolerance: f64) -> bool {
    point_on_polyline(p, &polyline_from_curve(curve, CURVE_SEGMENTS), tolerance)
}

pub fn point_on_polycurve<F: Frame>(p: Point<F>, curves: &[Curve<F>], tolerance: f64) -> bool {
    curves.iter().any(|c| point_on_curve(p, c, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GlobalPoint, Radians, World};
    use std::f64::consts::FRAC_PI_2;

    fn pt(x: f64, y: f64) -> GlobalPoint {
        GlobalPoint::new(x, y)
    }

    fn square() -> Vec<GlobalPoint> {
        vec![pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 100.0), pt(0.0, 100.0)]
    }

    #[test]
    fn segment_distance_clamps_to_ends() {
        let seg = Segment::new(pt(0.0, 0.0), pt(10.0, 0.0));
        assert_eq!(distance_to_segment(pt(5.0, 3.0), &seg), 3.0);
        assert_eq!(distance_to_segment(pt(-3.0, 4.0), &seg), 5.0);
        assert_eq!(distance_to_segment(pt(13.0, 4.0), &seg), 5.0);
    }

    #[test]
    fn zero_length_segment_is_a_point() {
        let seg = Segment::new(pt(1.0, 1.0), pt(1.0, 1.0));
        assert_eq!(distance_to_segment(pt(4.0, 5.0), &seg), 5.0);
    }

    #[test]
    fn tolerance_is_strict_except_for_zero() {
        let seg = Segment::new(pt(0.0, 0.0), pt(10.0, 0.0));
        assert!(point_on_segment(pt(5.0, 0.0), &seg, 0.0));
        assert!(!point_on_segment(pt(5.0, 1.0), &seg, 1.0));
        assert!(point_on_segment(pt(5.0, 1.0), &seg, 1.01));
    }

    #[test]
    fn ray_cast_square() {
        let sq = square();
        assert!(point_in_polygon(pt(50.0, 50.0), &sq));
        assert!(!point_in_polygon(pt(150.0, 50.0), &sq));
        assert!(!point_in_polygon(pt(50.0, -1.0), &sq));
        assert!(point_in_polygon(pt(50.0, 50.0), &close_polygon(sq)));
    }

    #[test]
    fn ray_cast_concave() {
        // U shape opening upward
        let u = vec![
            pt(0.0, 0.0),
            pt(30.0, 0.0),
            pt(30.0, 60.0),
            pt(60.0, 60.0),
            pt(60.0, 0.0),
            pt(90.0, 0.0),
            pt(90.0, 90.0),
            pt(0.0, 90.0),
        ];
        assert!(point_in_polygon(pt(15.0, 30.0), &u));
        assert!(!point_in_polygon(pt(45.0, 30.0), &u));
        assert!(point_in_polygon(pt(45.0, 75.0), &u));
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        assert!(!point_in_polygon::<World>(pt(0.0, 0.0), &[]));
    }

    #[test]
    fn close_polygon_appends_once() {
        let closed = close_polygon(square());
        assert_eq!(closed.len(), 5);
        assert_eq!(closed[4], closed[0]);
        assert_eq!(close_polygon(closed.clone()), closed);
    }

    #[test]
    fn polygon_border_includes_closing_edge() {
        let polygon = Polygon::new(square()).unwrap();
        assert!(point_on_polygon(pt(0.0, 50.0), &polygon, 0.0));
        assert!(point_on_polygon(pt(100.0, 50.0), &polygon, 0.0));
        assert!(!point_on_polygon(pt(50.0, 50.0), &polygon, 1.0));
    }

    #[test]
    fn circle_distance_is_exact() {
        let circle = Ellipse::new(pt(50.0, 50.0), 50.0, 50.0, Radians::ZERO).unwrap();
        assert_eq!(distance_to_ellipse(pt(100.0, 50.0), &circle), 0.0);
        assert!((distance_to_ellipse(pt(50.0, 160.0), &circle) - 60.0).abs() < 1e-9);
        assert!((distance_to_ellipse(pt(50.0, 60.0), &circle) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn center_is_a_radius_away() {
        let circle = Ellipse::new(pt(50.0, 50.0), 50.0, 50.0, Radians::ZERO).unwrap();
        assert!((distance_to_ellipse(pt(50.0, 50.0), &circle) - 50.0).abs() < 1e-9);
        assert!(!point_on_ellipse(pt(50.0, 50.0), &circle, 1.0));
    }

    #[test]
    fn rotated_ellipse_containment() {
        // 200x50 lying along y after a quarter turn
        let ellipse = Ellipse::new(pt(0.0, 0.0), 100.0, 25.0, Radians(FRAC_PI_2)).unwrap();
        assert!(point_in_ellipse(pt(0.0, 90.0), &ellipse));
        assert!(!point_in_ellipse(pt(90.0, 0.0), &ellipse));
    }

    #[test]
    fn elongated_ellipse_border() {
        let ellipse = Ellipse::new(pt(0.0, 0.0), 100.0, 50.0, Radians::ZERO).unwrap();
        assert!(point_on_ellipse(pt(100.0, 0.0), &ellipse, 0.5));
        assert!(point_on_ellipse(pt(0.0, -50.0), &ellipse, 0.5));
        assert!(!point_on_ellipse(pt(0.0, 0.0), &ellipse, 1.0));
        assert!(!point_on_ellipse(pt(110.0, 0.0), &ellipse, 1.0));
    }

    #[test]
    fn degenerate_ellipse_is_a_segment() {
        let flat = Ellipse::new(pt(0.0, 0.0), 10.0, 0.0, Radians::ZERO).unwrap();
        assert!(!point_in_ellipse(pt(0.0, 0.0), &flat));
        assert_eq!(distance_to_ellipse(pt(5.0, 3.0), &flat), 3.0);
    }

    #[test]
    fn curve_sampling() {
        let curve = Curve::new(pt(0.0, 0.0), pt(10.0, 0.0), pt(20.0, 0.0), pt(30.0, 0.0));
        let segments = polyline_from_curve(&curve, CURVE_SEGMENTS);
        assert_eq!(segments.len(), CURVE_SEGMENTS);
        assert_eq!(segments[0].a, curve.start);
        assert_eq!(segments[CURVE_SEGMENTS - 1].b, curve.end);
        assert!(point_on_curve(pt(15.0, 0.0), &curve, 1e-6));
        assert!(!point_on_curve(pt(15.0, 2.0), &curve, 1.0));
    }

    #[test]
    fn polycurve_any_member() {
        let a = Curve::new(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0));
        let b = Curve::new(pt(0.0, 10.0), pt(1.0, 10.0), pt(2.0, 10.0), pt(3.0, 10.0));
        assert!(point_on_polycurve(pt(3.0, 10.0), &[a, b], 1e-6));
        assert!(!point_on_polycurve(pt(1.5, 5.0), &[a, b], 1.0));
    }
}
