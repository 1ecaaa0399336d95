//! Shape descriptors: one variant per geometric family.
//!
//! Descriptors are plain values built from the current element state for
//! each query. Nothing here is cached.

use crate::bounds::element_absolute_coords;
use crate::element::{Element, ElementType};
use crate::errors::ShapeError;
use crate::types::{
    Frame, GlobalPoint, Point, Radians, Segment, World, finite, non_negative, rotate_point,
};

/// Closed polygon. The closing edge from the last vertex back to the first
/// is implied.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<F: Frame> {
    vertices: Vec<Point<F>>,
}

impl<F: Frame> Polygon<F> {
    pub const MIN_VERTICES: usize = 3;

    /// Create a polygon with validation (at least 3 finite vertices)
    pub fn new(vertices: Vec<Point<F>>) -> Result<Self, ShapeError> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(ShapeError::TooFewVertices {
                needed: Self::MIN_VERTICES,
                got: vertices.len(),
            });
        }
        for v in &vertices {
            finite(v.x).and_then(|_| finite(v.y)).map_err(ShapeError::numeric("polygon vertex"))?;
        }
        Ok(Polygon { vertices })
    }

    pub fn vertices(&self) -> &[Point<F>] {
        &self.vertices
    }
}

/// Possibly rotated ellipse
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse<F: Frame> {
    pub center: Point<F>,
    pub half_width: f64,
    pub half_height: f64,
    pub angle: Radians,
}

impl<F: Frame> Ellipse<F> {
    /// Create an ellipse with validation (finite center, non-negative radii)
    pub fn new(
        center: Point<F>,
        half_width: f64,
        half_height: f64,
        angle: Radians,
    ) -> Result<Self, ShapeError> {
        finite(center.x)
            .and_then(|_| finite(center.y))
            .map_err(ShapeError::numeric("ellipse center"))?;
        let half_width = non_negative(half_width).map_err(ShapeError::numeric("half width"))?;
        let half_height = non_negative(half_height).map_err(ShapeError::numeric("half height"))?;
        let angle = Radians(finite(angle.raw()).map_err(ShapeError::numeric("ellipse angle"))?);
        Ok(Ellipse { center, half_width, half_height, angle })
    }

    /// Either radius is zero: the ellipse has collapsed into a segment or point
    pub fn is_degenerate(&self) -> bool {
        self.half_width == 0.0 || self.half_height == 0.0
    }
}

/// Open chain of segments
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polyline<F: Frame> {
    pub segments: Vec<Segment<F>>,
}

impl<F: Frame> Polyline<F> {
    /// Pair consecutive points into segments
    pub fn from_points(points: &[Point<F>]) -> Self {
        Polyline {
            segments: points.windows(2).map(|w| Segment::new(w[0], w[1])).collect(),
        }
    }

    /// The chain's vertices, first segment start followed by every end
    pub fn points(&self) -> Vec<Point<F>> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            points.push(first.a);
        }
        points.extend(self.segments.iter().map(|s| s.b));
        points
    }
}

/// Cubic Bézier curve: start, two control points, end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve<F: Frame> {
    pub start: Point<F>,
    pub control1: Point<F>,
    pub control2: Point<F>,
    pub end: Point<F>,
}

impl<F: Frame> Curve<F> {
    pub fn new(start: Point<F>, control1: Point<F>, control2: Point<F>, end: Point<F>) -> Self {
        Curve { start, control1, control2, end }
    }

    /// Evaluate the curve at parameter `t` in `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point<F> {
        let mt = 1.0 - t;
        let p = self.start.to_vec() * (mt * mt * mt)
            + self.control1.to_vec() * (3.0 * mt * mt * t)
            + self.control2.to_vec() * (3.0 * mt * t * t)
            + self.end.to_vec() * (t * t * t);
        Point::from_vec(p)
    }
}

/// Normalized geometry for border and containment queries
#[derive(Clone, Debug, PartialEq)]
pub enum Shape<F: Frame> {
    Polygon(Polygon<F>),
    Ellipse(Ellipse<F>),
    Line(Segment<F>),
    Polyline(Polyline<F>),
    Curve(Curve<F>),
    Polycurve(Vec<Curve<F>>),
}

impl<F: Frame> Shape<F> {
    pub fn family(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "polygon",
            Shape::Ellipse(_) => "ellipse",
            Shape::Line(_) => "line",
            Shape::Polyline(_) => "polyline",
            Shape::Curve(_) => "curve",
            Shape::Polycurve(_) => "polycurve",
        }
    }
}

/// Build the world-space shape descriptor for an element.
///
/// Box-like families become rotated rectangles, diamonds become rotated
/// rhombi, ellipses stay analytic and point-based elements become polylines.
pub fn shape_for_element(element: &Element) -> Result<Shape<World>, ShapeError> {
    let c = element_absolute_coords(element);
    let center = c.center();
    let rotate = |p: GlobalPoint| rotate_point(p, center, element.angle);

    let shape = match element.kind {
        ElementType::Rectangle
        | ElementType::Image
        | ElementType::Iframe
        | ElementType::Embeddable
        | ElementType::Text
        | ElementType::Frame
        | ElementType::Selection => Shape::Polygon(Polygon::new(
            [
                Point::new(c.x1, c.y1),
                Point::new(c.x2, c.y1),
                Point::new(c.x2, c.y2),
                Point::new(c.x1, c.y2),
            ]
            .map(rotate)
            .to_vec(),
        )?),
        ElementType::Diamond => Shape::Polygon(Polygon::new(
            [
                Point::new(c.cx, c.y1),
                Point::new(c.x2, c.cy),
                Point::new(c.cx, c.y2),
                Point::new(c.x1, c.cy),
            ]
            .map(rotate)
            .to_vec(),
        )?),
        ElementType::Ellipse => Shape::Ellipse(Ellipse::new(
            center,
            (c.x2 - c.x1) / 2.0,
            (c.y2 - c.y1) / 2.0,
            element.angle,
        )?),
        ElementType::Line | ElementType::Arrow | ElementType::Freedraw => {
            let points: Vec<GlobalPoint> = element
                .points
                .iter()
                .map(|p| rotate(element.to_world(*p)))
                .collect();
            Shape::Polyline(Polyline::from_points(&points))
        }
    };

    Ok(shape)
}
