//! Element geometry provider: absolute coordinates and rotated bounds.

use crate::element::{Element, ElementType};
use crate::types::{Bounds, GlobalPoint, Point, rotate_point};

/// Unrotated extents of an element in world space plus its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbsoluteCoords {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub cx: f64,
    pub cy: f64,
}

impl AbsoluteCoords {
    pub fn center(&self) -> GlobalPoint {
        Point::new(self.cx, self.cy)
    }
}

/// Absolute coordinates of an element, ignoring its rotation.
///
/// Point-based elements use the extents of their points; everything else
/// uses the anchor plus width and height.
pub fn element_absolute_coords(element: &Element) -> AbsoluteCoords {
    if element.kind.is_point_based() && !element.points.is_empty() {
        let b = Bounds::from_points(element.points.iter().map(|p| element.to_world(*p)));
        return AbsoluteCoords {
            x1: b.min_x,
            y1: b.min_y,
            x2: b.max_x,
            y2: b.max_y,
            cx: (b.min_x + b.max_x) / 2.0,
            cy: (b.min_y + b.max_y) / 2.0,
        };
    }

    AbsoluteCoords {
        x1: element.x,
        y1: element.y,
        x2: element.x + element.width,
        y2: element.y + element.height,
        cx: element.x + element.width / 2.0,
        cy: element.y + element.height / 2.0,
    }
}

/// Axis-aligned bounds of an element after applying its rotation.
pub fn element_bounds(element: &Element) -> Bounds {
    let c = element_absolute_coords(element);
    let center = c.center();
    let angle = element.angle;

    match element.kind {
        ElementType::Diamond => Bounds::from_points(
            [
                Point::new(c.cx, c.y1),
                Point::new(c.cx, c.y2),
                Point::new(c.x1, c.cy),
                Point::new(c.x2, c.cy),
            ]
            .map(|p| rotate_point(p, center, angle)),
        ),
        ElementType::Ellipse => {
            let w = (c.x2 - c.x1) / 2.0;
            let h = (c.y2 - c.y1) / 2.0;
            let (sin, cos) = angle.sin_cos();
            let ww = (w * cos).hypot(h * sin);
            let hh = (h * cos).hypot(w * sin);
            Bounds::new(c.cx - ww, c.cy - hh, c.cx + ww, c.cy + hh)
        }
        kind if kind.is_point_based() && !element.points.is_empty() => Bounds::from_points(
            element
                .points
                .iter()
                .map(|p| rotate_point(element.to_world(*p), center, angle)),
        ),
        _ => Bounds::from_points(
            [
                Point::new(c.x1, c.y1),
                Point::new(c.x2, c.y1),
                Point::new(c.x2, c.y2),
                Point::new(c.x1, c.y2),
            ]
            .map(|p| rotate_point(p, center, angle)),
        ),
    }
}
