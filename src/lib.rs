//! Elbow arrow routing and shape hit-testing for a diagramming canvas.
//!
//! Two independent engines share one geometry vocabulary:
//!
//! - [`routing`] turns an arrow's endpoints (and what they are bound to) into
//!   an orthogonal point sequence.
//! - [`collision`] answers "is this point on the border of / inside this
//!   shape" for pointer interaction.
//!
//! ```
//! use arrowroute::{Element, ElementType, LocalPoint, Scene, calculate_points};
//!
//! let scene = Scene::from_elements([
//!     Element::new("a", ElementType::Rectangle, 0.0, 0.0, 100.0, 100.0),
//!     Element::new("b", ElementType::Rectangle, 320.0, 200.0, 100.0, 100.0),
//! ]);
//! let points = vec![LocalPoint::new(0.0, 0.0), LocalPoint::new(220.0, 200.0)];
//! let arrow = Element::arrow("x", 100.0, 50.0, points)
//!     .with_start_binding("a")
//!     .with_end_binding("b");
//!
//! let points = calculate_points(&arrow, Some(&scene));
//! assert_eq!(points.first(), Some(&LocalPoint::new(0.0, 0.0)));
//! assert_eq!(points.last(), Some(&LocalPoint::new(220.0, 200.0)));
//! ```

pub mod bounds;
pub mod collision;
pub mod defaults;
pub mod element;
pub mod errors;
pub mod log;
pub mod routing;
pub mod scene;
pub mod types;

pub use bounds::{AbsoluteCoords, element_absolute_coords, element_bounds};
pub use collision::{is_point_in_bounds, is_point_in_shape, is_point_on_shape, shape_for_element};
pub use element::{Binding, Element, ElementId, ElementType};
pub use errors::ShapeError;
pub use routing::{RouteOptions, calculate_points, calculate_points_with};
pub use scene::Scene;
pub use types::{
    Bounds, GlobalPoint, GlobalSegment, LocalPoint, NumericError, Point, Radians, Segment, Vector,
};
