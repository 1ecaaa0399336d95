//! Picking the side of a bound shape an arrow leaves from, and which way.

use crate::bounds::element_bounds;
use crate::element::Element;
use crate::types::{GlobalPoint, GlobalSegment, Radians, Vector, rotate_vector};
use glam::DVec2;

/// One of the four axis directions on a y-down canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Right,
    Left,
    Down,
    Up,
}

impl Heading {
    /// Snap a vector to the axis it is closest to.
    ///
    /// Exact diagonals into the right half-plane resolve to `Up`, those into
    /// the left half-plane resolve to `Left`, as does the zero vector.
    pub fn from_vector(v: Vector) -> Self {
        if v.x > v.y.abs() {
            Heading::Right
        } else if v.x <= -v.y.abs() {
            Heading::Left
        } else if v.y > v.x.abs() {
            Heading::Down
        } else {
            Heading::Up
        }
    }

    pub fn to_vector(self) -> Vector {
        match self {
            Heading::Right => DVec2::X,
            Heading::Left => DVec2::NEG_X,
            Heading::Down => DVec2::Y,
            Heading::Up => DVec2::NEG_Y,
        }
    }
}

/// Snap a vector to a unit axis vector
pub fn vector_to_heading(v: Vector) -> Vector {
    Heading::from_vector(v).to_vector()
}

/// Cheap proximity score used to rank segments.
///
/// Not a true distance: it takes the smaller coordinate offset of the two
/// endpoints per axis and measures from the point to that offset pair.
/// Rankings built on it are part of observable routing behavior.
pub fn approximate_segment_distance(segment: &GlobalSegment, p: GlobalPoint) -> f64 {
    let dx = (segment.a.x - p.x).min(segment.b.x - p.x);
    let dy = (segment.a.y - p.y).min(segment.b.y - p.y);
    (p.x - dx).hypot(p.y - dy)
}

/// The segment with the smallest [`approximate_segment_distance`] to `p`.
/// Ties go to the earliest segment.
pub fn closest_segment(segments: &[GlobalSegment], p: GlobalPoint) -> Option<GlobalSegment> {
    segments.iter().copied().min_by(|a, b| {
        approximate_segment_distance(a, p).total_cmp(&approximate_segment_distance(b, p))
    })
}

/// The two perpendiculars of a segment's direction, counter-clockwise first.
/// Neither is normalized.
pub fn normal_candidates(segment: &GlobalSegment) -> [Vector; 2] {
    let along = segment.a - segment.b;
    [
        rotate_vector(along, Radians::QUARTER_TURN),
        rotate_vector(along, -Radians::QUARTER_TURN),
    ]
}

/// Normal of `segment` facing from the element's center towards `point`.
///
/// The first candidate wins when `point` sits exactly on the line through
/// the center perpendicular to it.
pub fn normal_for_segment(
    element: &Element,
    segment: &GlobalSegment,
    point: GlobalPoint,
) -> Vector {
    let center = element_bounds(element).center();
    let [n1, n2] = normal_candidates(segment);
    if (point - center).dot(n1) >= 0.0 { n1 } else { n2 }
}
