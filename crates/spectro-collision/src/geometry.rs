//! Geometry primitives for collision detection.

use spectro_math::Vec2;

/// Axis-aligned rectangle in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal midpoint.
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint.
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Check if another rectangle lies entirely within this one.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right() <= self.right()
            && other.top >= self.top
            && other.bottom() <= self.bottom()
    }

    /// Check if two rectangles overlap. Shared edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    /// Point of the rectangle closest to `point`.
    pub fn closest_point(&self, point: &Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left, self.right()),
            point.y.clamp(self.top, self.bottom()),
        )
    }
}

/// Collision shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Circle around a center point.
    Circle { center: Vec2, radius: f64 },
    /// Axis-aligned rectangle.
    Rect(Rect),
}

impl Shape {
    /// Check if this shape overlaps an axis-aligned rectangle.
    pub fn intersects(&self, rect: &Rect) -> bool {
        match self {
            Shape::Circle { center, radius } => {
                crate::circle_intersects_rect(center, *radius, rect)
            }
            Shape::Rect(own) => own.overlaps(rect),
        }
    }
}
