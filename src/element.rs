//! Element model as seen by the geometry core.
//!
//! Elements are owned by the scene store; this crate only reads them.

use std::fmt;

use crate::types::{GlobalPoint, LocalPoint, Point, Radians};

/// Opaque element identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        ElementId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        ElementId(s.to_string())
    }
}

/// Element families known to the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    Rectangle,
    Diamond,
    Ellipse,
    Image,
    Iframe,
    Embeddable,
    Text,
    Frame,
    Selection,
    Freedraw,
    Line,
    Arrow,
}

impl ElementType {
    /// Lines and arrows: shape defined by an ordered point list
    pub fn is_linear(self) -> bool {
        matches!(self, ElementType::Line | ElementType::Arrow)
    }

    /// Families whose geometry lives in `points` rather than width/height
    pub fn is_point_based(self) -> bool {
        self.is_linear() || self == ElementType::Freedraw
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementType::Rectangle => "rectangle",
            ElementType::Diamond => "diamond",
            ElementType::Ellipse => "ellipse",
            ElementType::Image => "image",
            ElementType::Iframe => "iframe",
            ElementType::Embeddable => "embeddable",
            ElementType::Text => "text",
            ElementType::Frame => "frame",
            ElementType::Selection => "selection",
            ElementType::Freedraw => "freedraw",
            ElementType::Line => "line",
            ElementType::Arrow => "arrow",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attachment of a connector end to another element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub element_id: ElementId,
}

impl Binding {
    pub fn new(element_id: impl Into<ElementId>) -> Self {
        Binding {
            element_id: element_id.into(),
        }
    }
}

/// A canvas element.
///
/// `x`/`y` is the anchor every local point is relative to. For box-like
/// families it is also the top-left corner of the unrotated box.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: Radians,
    /// Local-space points (linear and freedraw elements only)
    pub points: Vec<LocalPoint>,
    pub start_binding: Option<Binding>,
    pub end_binding: Option<Binding>,
    pub is_deleted: bool,
}

impl Element {
    pub fn new(
        id: impl Into<ElementId>,
        kind: ElementType,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
            width,
            height,
            angle: Radians::ZERO,
            points: Vec::new(),
            start_binding: None,
            end_binding: None,
            is_deleted: false,
        }
    }

    /// A connector anchored at `(x, y)` following `points` (local space).
    ///
    /// Width and height are the extents of the point list.
    pub fn arrow(id: impl Into<ElementId>, x: f64, y: f64, points: Vec<LocalPoint>) -> Self {
        Self::new(id, ElementType::Arrow, x, y, 0.0, 0.0).with_points(points)
    }

    pub fn with_angle(mut self, angle: Radians) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_points(mut self, points: Vec<LocalPoint>) -> Self {
        if let Some(first) = points.first() {
            let (mut min, mut max) = (*first, *first);
            for p in &points {
                min = Point::new(min.x.min(p.x), min.y.min(p.y));
                max = Point::new(max.x.max(p.x), max.y.max(p.y));
            }
            self.width = max.x - min.x;
            self.height = max.y - min.y;
        }
        self.points = points;
        self
    }

    pub fn with_start_binding(mut self, element_id: impl Into<ElementId>) -> Self {
        self.start_binding = Some(Binding::new(element_id));
        self
    }

    pub fn with_end_binding(mut self, element_id: impl Into<ElementId>) -> Self {
        self.end_binding = Some(Binding::new(element_id));
        self
    }

    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    pub fn to_world(&self, p: LocalPoint) -> GlobalPoint {
        Point::new(p.x + self.x, p.y + self.y)
    }

    pub fn to_local(&self, p: GlobalPoint) -> LocalPoint {
        Point::new(p.x - self.x, p.y - self.y)
    }
}
