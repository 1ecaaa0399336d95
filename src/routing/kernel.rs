//! Orthogonal path stepping between a start chain and an end chain.
//!
//! A kernel proposes one point at a time from the tail of the path built so
//! far towards the head of the end chain. [`calculate_segment_with`] drives
//! it until the proposal lands on the end anchor or the step cap runs out.

use crate::defaults::MAX_KERNEL_STEPS;
use crate::log::debug;
use crate::types::{Bounds, GlobalPoint, Point, Radians, Vector, cutoff, rotate_vector};
use glam::DVec2;

/// A single step of path search.
///
/// `path` is every point placed so far, `target` the end chain with the point
/// to reach first. Returning `None` stops the search early.
pub trait PathKernel {
    fn step(
        &self,
        path: &[GlobalPoint],
        target: &[GlobalPoint],
        obstacles: &[Bounds],
    ) -> Option<GlobalPoint>;
}

/// Greedy elbow router.
///
/// Alternates horizontal and vertical moves based on the direction of the
/// last step, and takes a half step when the next corner would approach the
/// target from behind. Obstacles are accepted but not consulted.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElbowKernel;

impl ElbowKernel {
    /// Direction of the last step, or `+x` for a path with one point.
    /// `None` when the last step had zero length.
    fn start_vector(path: &[GlobalPoint]) -> Option<Vector> {
        match path {
            [.., prev, last] => (*last - *prev).try_normalize(),
            _ => Some(DVec2::X),
        }
    }

    /// Direction from the target head into the rest of its chain, or `-x`
    /// for a lone target. `None` when the first two points coincide.
    fn end_vector(target: &[GlobalPoint]) -> Option<Vector> {
        match target {
            [end, next, ..] => (*next - *end).try_normalize(),
            _ => Some(DVec2::NEG_X),
        }
    }
}

impl PathKernel for ElbowKernel {
    fn step(
        &self,
        path: &[GlobalPoint],
        target: &[GlobalPoint],
        _obstacles: &[Bounds],
    ) -> Option<GlobalPoint> {
        let start = *path.last()?;
        let end = *target.first()?;

        // Moving horizontally when the last step's right-hand normal has no x
        // component. A zero-length last step counts as vertical.
        let horizontal = Self::start_vector(path)
            .is_some_and(|v| cutoff(DVec2::X.dot(rotate_vector(v, Radians::QUARTER_TURN))) == 0.0);

        let next: GlobalPoint = if horizontal {
            Point::new(start.x, end.y)
        } else {
            Point::new(end.x, start.y)
        };

        let behind = match ((next - end).try_normalize(), Self::end_vector(target)) {
            (Some(next_vector), Some(end_vector)) => cutoff(next_vector.dot(end_vector)) == 1.0,
            _ => false,
        };

        if !behind {
            return Some(next);
        }

        Some(if horizontal {
            Point::new(start.x, start.y + (end.y - start.y) / 2.0)
        } else {
            Point::new(start.x + (end.x - start.x) / 2.0, start.y)
        })
    }
}

/// Route from `start` to `end` with the default kernel and step cap.
///
/// The result is `start`, then every intermediate point, then `end`.
pub fn calculate_segment(
    start: &[GlobalPoint],
    end: &[GlobalPoint],
    obstacles: &[Bounds],
) -> Vec<GlobalPoint> {
    calculate_segment_with(&ElbowKernel, start, end, obstacles, MAX_KERNEL_STEPS)
}

/// Route from `start` to `end` with any kernel, placing at most `max_steps`
/// intermediate points.
///
/// An empty `start` yields `end` and an empty `end` yields `start`.
pub fn calculate_segment_with<K: PathKernel + ?Sized>(
    kernel: &K,
    start: &[GlobalPoint],
    end: &[GlobalPoint],
    obstacles: &[Bounds],
    max_steps: usize,
) -> Vec<GlobalPoint> {
    let mut points = start.to_vec();
    let Some(&anchor) = end.first() else {
        return points;
    };
    if points.is_empty() {
        return end.to_vec();
    }

    let mut reached = false;
    for _ in 0..max_steps {
        let Some(next) = kernel.step(&points, end, obstacles) else {
            break;
        };
        if next.approx_eq(anchor) {
            reached = true;
            break;
        }
        points.push(next);
    }

    if !reached {
        debug!(
            steps = points.len() - start.len(),
            %anchor,
            "kernel stopped before reaching target"
        );
    }

    points.extend_from_slice(end);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> GlobalPoint {
        GlobalPoint::new(x, y)
    }

    /// Never converges: always nudges one unit right
    struct Creep;

    impl PathKernel for Creep {
        fn step(
            &self,
            path: &[GlobalPoint],
            _: &[GlobalPoint],
            _: &[Bounds],
        ) -> Option<GlobalPoint> {
            path.last().map(|p| *p + DVec2::X)
        }
    }

    /// Gives up immediately
    struct Refuse;

    impl PathKernel for Refuse {
        fn step(
            &self,
            _: &[GlobalPoint],
            _: &[GlobalPoint],
            _: &[Bounds],
        ) -> Option<GlobalPoint> {
            None
        }
    }

    // ==== Elbow kernel tests ====

    #[test]
    fn first_step_is_vertical_from_lone_point() {
        let next = ElbowKernel.step(&[pt(0.0, 0.0)], &[pt(-100.0, 100.0)], &[]);
        assert_eq!(next, Some(pt(0.0, 100.0)));
    }

    #[test]
    fn approaching_from_behind_halves_the_step() {
        // The corner (0, 0) lies straight behind a lone target heading -x
        let next = ElbowKernel.step(&[pt(0.0, 0.0)], &[pt(100.0, 0.0)], &[]);
        assert_eq!(next, Some(pt(0.0, 0.0)));

        let next = ElbowKernel.step(&[pt(0.0, 0.0)], &[pt(100.0, 40.0)], &[]);
        assert_eq!(next, Some(pt(0.0, 20.0)));
    }

    #[test]
    fn zero_length_last_step_turns_horizontal_corner() {
        let next = ElbowKernel.step(&[pt(0.0, 0.0), pt(0.0, 0.0)], &[pt(100.0, 0.0)], &[]);
        assert_eq!(next, Some(pt(100.0, 0.0)));
    }

    #[test]
    fn coincident_target_chain_never_counts_as_behind() {
        let next = ElbowKernel.step(&[pt(0.0, 0.0)], &[pt(100.0, 0.0), pt(100.0, 0.0)], &[]);
        assert_eq!(next, Some(pt(0.0, 0.0)));
        let next = ElbowKernel.step(&[pt(0.0, 0.0)], &[pt(100.0, 50.0), pt(100.0, 50.0)], &[]);
        assert_eq!(next, Some(pt(0.0, 50.0)));
    }

    #[test]
    fn empty_inputs_stop_the_kernel() {
        assert_eq!(ElbowKernel.step(&[], &[pt(1.0, 1.0)], &[]), None);
        assert_eq!(ElbowKernel.step(&[pt(1.0, 1.0)], &[], &[]), None);
    }

    // ==== Segment tests ====

    #[test]
    fn diagonal_gets_two_elbows() {
        let path = calculate_segment(&[pt(0.0, 0.0)], &[pt(100.0, 100.0)], &[]);
        assert_eq!(path, [pt(0.0, 0.0), pt(0.0, 50.0), pt(100.0, 50.0), pt(100.0, 100.0)]);
    }

    #[test]
    fn straight_line_keeps_endpoints() {
        let path = calculate_segment(&[pt(0.0, 0.0)], &[pt(100.0, 0.0)], &[]);
        assert_eq!(path.first(), Some(&pt(0.0, 0.0)));
        assert_eq!(path.last(), Some(&pt(100.0, 0.0)));
        assert!(path.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn bound_chains_are_preserved() {
        let start = [pt(100.0, 50.0), pt(140.0, 50.0)];
        let end = [pt(280.0, 250.0), pt(320.0, 250.0)];
        let path = calculate_segment(&start, &end, &[]);
        assert_eq!(
            path,
            [
                pt(100.0, 50.0),
                pt(140.0, 50.0),
                pt(140.0, 250.0),
                pt(280.0, 250.0),
                pt(320.0, 250.0),
            ]
        );
    }

    #[test]
    fn path_is_orthogonal_between_chains() {
        let start = [pt(0.0, 0.0)];
        let end = [pt(-70.0, 35.0)];
        let path = calculate_segment(&start, &end, &[]);
        for w in path.windows(2) {
            assert!(w[0].x == w[1].x || w[0].y == w[1].y, "{} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn ends_on_the_anchor_for_many_inputs() {
        let targets = [
            (250.0, -30.0),
            (-120.0, 80.0),
            (0.5, 1e-3),
            (-3.0, -3.0),
            (1e6, 2.0),
            (0.0, 300.0),
        ];
        for (x, y) in targets {
            let end = [pt(x, y)];
            let path = calculate_segment(&[pt(0.0, 0.0)], &end, &[]);
            assert_eq!(path.first(), Some(&pt(0.0, 0.0)));
            assert_eq!(path.last(), Some(&pt(x, y)));
            assert!(path.len() <= 1 + MAX_KERNEL_STEPS + 1);
        }
    }

    #[test]
    fn step_cap_bounds_a_runaway_kernel() {
        let path = calculate_segment_with(&Creep, &[pt(0.0, 0.0)], &[pt(-10.0, 0.0)], &[], 7);
        assert_eq!(path.len(), 1 + 7 + 1);
        assert_eq!(path[7], pt(7.0, 0.0));
        assert_eq!(path.last(), Some(&pt(-10.0, 0.0)));
    }

    #[test]
    fn refusing_kernel_joins_chains_directly() {
        let path = calculate_segment_with(&Refuse, &[pt(0.0, 0.0)], &[pt(5.0, 5.0)], &[], 50);
        assert_eq!(path, [pt(0.0, 0.0), pt(5.0, 5.0)]);
    }

    #[test]
    fn kernel_is_usable_as_trait_object() {
        let kernel: &dyn PathKernel = &ElbowKernel;
        let path = calculate_segment_with(kernel, &[pt(0.0, 0.0)], &[pt(10.0, 20.0)], &[], 50);
        assert_eq!(path.last(), Some(&pt(10.0, 20.0)));
    }

    #[test]
    fn empty_chains() {
        assert_eq!(calculate_segment(&[], &[pt(1.0, 2.0)], &[]), [pt(1.0, 2.0)]);
        assert_eq!(calculate_segment(&[pt(1.0, 2.0)], &[], &[]), [pt(1.0, 2.0)]);
    }
}
