//! Collision queries for the spectro simulation core.
//!
//! Only two primitives exist: screen-space axis-aligned rectangles (walls,
//! the apparatus area) and circles (the particle). Interiors are open, so
//! shapes that merely touch along an edge do not intersect.

pub mod geometry;

pub use geometry::{Rect, Shape};

use spectro_math::Vec2;

/// Check whether a circle overlaps an axis-aligned rectangle.
///
/// Uses the distance from the center to the closest point of the
/// rectangle, so corners are handled exactly.
pub fn circle_intersects_rect(center: &Vec2, radius: f64, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).norm_squared() < radius * radius
}
