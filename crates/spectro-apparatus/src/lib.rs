//! Mass spectrometer apparatus.
//!
//! The apparatus owns one charged particle, the velocity selector walls, and
//! the two field strengths. Each call to [`Apparatus::advance_frame`] picks
//! the field regime from the particle's horizontal position (both fields in
//! the left half, magnetic only in the right half), steps the particle, and
//! stops it on contact with a wall or on leaving the area vertically.

pub mod apparatus;
pub mod trajectory;
pub mod walls;

pub use apparatus::{Apparatus, FieldRegime};
pub use trajectory::{TrajectoryRecorder, TrajectorySample, TrajectoryStats};
pub use walls::{WALL_THICKNESS, generate_walls};
