//! Cheap polygonal stand-ins for bound shapes.
//!
//! Box-like families become their rotated rectangle, ellipses and diamonds
//! become the rhombus through their four cardinal midpoints. The rhombus is
//! only an anchor proxy for routing, not a bound on the real outline.

use crate::bounds::element_absolute_coords;
use crate::element::{Element, ElementType};
use crate::errors::ShapeError;
use crate::types::{GlobalPoint, GlobalSegment, Point, Segment, rotate_point};

/// Four world-space segments approximating the element, or an error for
/// families without an approximation.
///
/// Winding is top, right, bottom, left for boxes and W→N→E→S for rhombi.
pub fn try_estimate_shape(element: &Element) -> Result<[GlobalSegment; 4], ShapeError> {
    let c = element_absolute_coords(element);
    let center = c.center();
    let unrotate = |p: GlobalPoint| rotate_point(p, center, -element.angle);

    match element.kind {
        ElementType::Rectangle
        | ElementType::Iframe
        | ElementType::Embeddable
        | ElementType::Image => {
            let [tl, tr, br, bl] = [
                Point::new(c.x1, c.y1),
                Point::new(c.x2, c.y1),
                Point::new(c.x2, c.y2),
                Point::new(c.x1, c.y2),
            ]
            .map(unrotate);
            Ok([
                Segment::new(tl, tr),
                Segment::new(tr, br),
                Segment::new(br, bl),
                Segment::new(bl, tl),
            ])
        }
        ElementType::Diamond | ElementType::Ellipse => {
            let mid_x = c.x1 + (c.x2 - c.x1) / 2.0;
            let mid_y = c.y1 + (c.y2 - c.y1) / 2.0;
            let [n, w, e, s] = [
                Point::new(mid_x, c.y1),
                Point::new(c.x1, mid_y),
                Point::new(c.x2, mid_y),
                Point::new(mid_x, c.y2),
            ]
            .map(unrotate);
            Ok([
                Segment::new(w, n),
                Segment::new(n, e),
                Segment::new(e, s),
                Segment::new(s, w),
            ])
        }
        kind => Err(ShapeError::Unsupported { kind }),
    }
}

/// Segment approximation of a bound shape, empty when the family has none.
///
/// An empty result means "no usable approximation": the caller routes that
/// end without a bind dongle.
pub fn estimate_shape(element: &Element) -> Vec<GlobalSegment> {
    match try_estimate_shape(element) {
        Ok(segments) => segments.to_vec(),
        Err(err) => {
            crate::log::warn!(element = %element.id, %err, "cannot estimate bound shape");
            Vec::new()
        }
    }
}
