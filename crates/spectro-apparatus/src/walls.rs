//! Velocity selector wall layout.
//!
//! Two horizontal walls cover the left half of the area at 2/5 and 3/5 of
//! its height, leaving a narrow channel. Two vertical walls stand at the
//! horizontal midpoint, growing from the top and bottom edges inward to 2/5
//! of the height, so only the channel's exit is open into the right half.

use spectro_collision::Rect;

/// Nominal wall thickness (screen units).
pub const WALL_THICKNESS: f64 = 10.0;

/// Index of each wall in the array returned by [`generate_walls`].
pub const UPPER_HORIZONTAL: usize = 0;
pub const LOWER_HORIZONTAL: usize = 1;
pub const UPPER_VERTICAL: usize = 2;
pub const LOWER_VERTICAL: usize = 3;

/// Wall thickness used for `area`.
///
/// Shrinks below [`WALL_THICKNESS`] for small areas so walls never leave
/// the area and the two horizontal walls never overlap.
pub fn wall_thickness(area: &Rect) -> f64 {
    WALL_THICKNESS.min(area.width).min(area.height / 5.0)
}

/// Build the four walls for `area`.
pub fn generate_walls(area: &Rect) -> [Rect; 4] {
    let t = wall_thickness(area);
    let half_width = area.width / 2.0;
    let mid_x = area.center_x();
    let two_fifths = 2.0 * area.height / 5.0;
    let three_fifths = 3.0 * area.height / 5.0;

    let upper_horizontal = Rect::new(area.left, area.top + two_fifths - t / 2.0, half_width, t);
    let lower_horizontal = Rect::new(area.left, area.top + three_fifths - t / 2.0, half_width, t);
    let upper_vertical = Rect::new(mid_x - t / 2.0, area.top, t, two_fifths);
    let lower_vertical = Rect::new(mid_x - t / 2.0, area.top + three_fifths, t, two_fifths);

    [
        upper_horizontal,
        lower_horizontal,
        upper_vertical,
        lower_vertical,
    ]
}
