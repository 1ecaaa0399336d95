//! Strongly-typed geometric primitives (zero-cost wrappers over glam).
//!
//! Design goals:
//! - Local and world coordinates are different types and never mix silently
//! - Vector math goes through `glam::DVec2`
//! - Comparisons happen on values rounded by [`cutoff`]

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use glam::DVec2;

/// Direction/magnitude pair. Plain glam vector, no frame attached.
pub type Vector = DVec2;

/// Number of decimal places kept by [`cutoff`].
pub const CUTOFF_DIGITS: i32 = 9;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate that a value is finite.
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Validate that a value is finite and not negative.
#[inline]
pub fn non_negative(val: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Round to [`CUTOFF_DIGITS`] decimal places to suppress floating point jitter.
///
/// Negative zero is folded into positive zero so rounded values compare and
/// print the same regardless of how they were produced.
#[inline]
pub fn cutoff(num: f64) -> f64 {
    let scale = 10f64.powi(CUTOFF_DIGITS);
    (num * scale).round() / scale + 0.0
}

/// Coordinate frame marker.
pub trait Frame: Clone + Copy + fmt::Debug + PartialEq + Default {}

/// Absolute scene space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct World;

/// Space relative to an element's own anchor `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Local;

impl Frame for World {}
impl Frame for Local {}

/// A 2D point tagged with the frame it lives in.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<F: Frame> {
    pub x: f64,
    pub y: f64,
    frame: PhantomData<F>,
}

pub type GlobalPoint = Point<World>;
pub type LocalPoint = Point<Local>;

impl<F: Frame> Point<F> {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y, frame: PhantomData }
    }

    #[inline]
    pub fn from_vec(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }

    #[inline]
    pub fn to_vec(self) -> Vector {
        DVec2::new(self.x, self.y)
    }

    /// Both coordinates passed through [`cutoff`].
    pub fn cutoff(self) -> Self {
        Self::new(cutoff(self.x), cutoff(self.y))
    }

    /// Equality after rounding both points.
    pub fn approx_eq(self, other: Self) -> bool {
        let (a, b) = (self.cutoff(), other.cutoff());
        a.x == b.x && a.y == b.y
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }
}

impl<F: Frame> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Point - Point = Vector (same frame only)
impl<F: Frame> Sub for Point<F> {
    type Output = Vector;
    fn sub(self, rhs: Point<F>) -> Vector {
        DVec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Point + Vector = Point
impl<F: Frame> Add<Vector> for Point<F> {
    type Output = Point<F>;
    fn add(self, rhs: Vector) -> Point<F> {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Point - Vector = Point
impl<F: Frame> Sub<Vector> for Point<F> {
    type Output = Point<F>;
    fn sub(self, rhs: Vector) -> Point<F> {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Angle in radians, clockwise on a y-down canvas.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f64);

impl Radians {
    pub const ZERO: Radians = Radians(0.0);
    pub const QUARTER_TURN: Radians = Radians(std::f64::consts::FRAC_PI_2);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

impl std::ops::Neg for Radians {
    type Output = Radians;
    fn neg(self) -> Radians {
        Radians(-self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

/// Rotate `point` around `center` by `angle`.
pub fn rotate_point<F: Frame>(point: Point<F>, center: Point<F>, angle: Radians) -> Point<F> {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Point::new(
        d.x * cos - d.y * sin + center.x,
        d.x * sin + d.y * cos + center.y,
    )
}

/// Rotate a vector by `angle`, rounding the result with [`cutoff`].
///
/// The rounding is what makes a quarter turn of an axis vector land exactly
/// on the other axis, which the routing kernel compares against zero.
pub fn rotate_vector(v: Vector, angle: Radians) -> Vector {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(cutoff(v.x * cos - v.y * sin), cutoff(v.x * sin + v.y * cos))
}

/// A directed edge between two points. Direction matters for normals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<F: Frame> {
    pub a: Point<F>,
    pub b: Point<F>,
}

pub type GlobalSegment = Segment<World>;

impl<F: Frame> Segment<F> {
    pub const fn new(a: Point<F>, b: Point<F>) -> Self {
        Segment { a, b }
    }
}

/// Axis-aligned box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Bounds { min_x, min_y, max_x, max_y }
    }

    /// An empty box (will expand on first point)
    pub const fn empty() -> Self {
        Bounds {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
        }
    }

    /// Smallest box holding every point.
    pub fn from_points(points: impl IntoIterator<Item = GlobalPoint>) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.expand_point(p);
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn expand_point(&mut self, p: GlobalPoint) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> GlobalPoint {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}
