//! Elbow arrow routing.
//!
//! This module is organized into submodules:
//! - `estimate`: four-segment approximations of bound shapes
//! - `heading`: side selection, outward normals and axis snapping
//! - `kernel`: the step-by-step orthogonal path search
//!
//! [`calculate_points`] ties them together: it resolves the arrow's bound
//! elements, places a short dongle outside each bound side, routes between
//! the two chains in world space and hands back points relative to the
//! arrow's own anchor.

pub mod estimate;
pub mod heading;
pub mod kernel;

pub use estimate::{estimate_shape, try_estimate_shape};
pub use heading::{
    Heading, approximate_segment_distance, closest_segment, normal_candidates, normal_for_segment,
    vector_to_heading,
};
pub use kernel::{ElbowKernel, PathKernel, calculate_segment, calculate_segment_with};

use crate::bounds::element_bounds;
use crate::defaults::{DONGLE_LENGTH, MAX_KERNEL_STEPS};
use crate::element::{Binding, Element};
use crate::log::debug;
use crate::scene::Scene;
use crate::types::{Bounds, GlobalPoint, LocalPoint, Vector};

/// Knobs for [`calculate_points_with`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteOptions {
    /// Distance from a bound anchor to its dongle
    pub dongle_length: f64,
    /// Cap on intermediate points placed by the kernel
    pub max_steps: usize,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            dongle_length: DONGLE_LENGTH,
            max_steps: MAX_KERNEL_STEPS,
        }
    }
}

/// Route an arrow with the default options.
pub fn calculate_points(arrow: &Element, scene: Option<&Scene>) -> Vec<LocalPoint> {
    calculate_points_with(arrow, scene, &RouteOptions::default())
}

/// Route an arrow between its first and last points.
///
/// Returns points in the arrow's local frame. The first and last points are
/// the arrow's own endpoints; bound ends gain a dongle just outside the bound
/// element. Arrows with fewer than two points come back unchanged.
pub fn calculate_points_with(
    arrow: &Element,
    scene: Option<&Scene>,
    options: &RouteOptions,
) -> Vec<LocalPoint> {
    let &[first, .., last] = arrow.points.as_slice() else {
        return arrow.points.clone();
    };

    let start_anchor = arrow.to_world(first);
    let end_anchor = arrow.to_world(last);

    let start_heading = bound_heading(arrow.start_binding.as_ref(), scene, start_anchor);
    let end_heading = bound_heading(arrow.end_binding.as_ref(), scene, end_anchor);

    let mut start = vec![start_anchor];
    if let Some(heading) = start_heading {
        start.push(start_anchor + heading * options.dongle_length);
    }

    let mut end = Vec::with_capacity(2);
    if let Some(heading) = end_heading {
        end.push(end_anchor + heading * options.dongle_length);
    }
    end.push(end_anchor);

    let obstacles = scene.map(|scene| obstacle_bounds(arrow, scene)).unwrap_or_default();

    debug!(
        arrow = %arrow.id,
        start = %start_anchor,
        end = %end_anchor,
        start_bound = start_heading.is_some(),
        end_bound = end_heading.is_some(),
        "routing elbow arrow"
    );

    calculate_segment_with(&ElbowKernel, &start, &end, &obstacles, options.max_steps)
        .into_iter()
        .map(|p| arrow.to_local(p))
        .collect()
}

/// Axis heading pointing away from the bound element at `anchor`, or `None`
/// when the end is unbound or its binding cannot be used.
fn bound_heading(
    binding: Option<&Binding>,
    scene: Option<&Scene>,
    anchor: GlobalPoint,
) -> Option<Vector> {
    let binding = binding?;
    let Some(scene) = scene else {
        debug!(element = %binding.element_id, "no scene to resolve binding, routing unbound");
        return None;
    };
    let Some(element) = scene.non_deleted_element(&binding.element_id) else {
        debug!(element = %binding.element_id, "binding target missing or deleted, routing unbound");
        return None;
    };

    let segments = estimate_shape(element);
    let segment = closest_segment(&segments, anchor)?;
    let normal = normal_for_segment(element, &segment, anchor);
    Some(vector_to_heading(normal))
}

/// Bounding boxes of the arrow's live bound elements, start element first.
pub fn obstacle_bounds(arrow: &Element, scene: &Scene) -> Vec<Bounds> {
    let start_id = arrow.start_binding.as_ref().map(|b| &b.element_id);
    let end_id = arrow.end_binding.as_ref().map(|b| &b.element_id);

    let mut bound: Vec<&Element> = scene
        .non_deleted_elements()
        .filter(|el| start_id == Some(&el.id) || end_id == Some(&el.id))
        .collect();
    bound.sort_by_key(|el| start_id != Some(&el.id));

    bound.into_iter().map(element_bounds).collect()
}
