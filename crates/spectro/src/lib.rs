//! spectro — charged-particle mass spectrometer simulation core.
//!
//! This is the umbrella crate that re-exports the sub-crates and provides
//! a headless frame driver. Rendering and input handling belong to the
//! surrounding application, which calls [`Apparatus::advance_frame`] once
//! per rendered frame and draws [`Apparatus::walls`] and the particle
//! position afterwards.

pub use spectro_apparatus::{
    self, Apparatus, FieldRegime, TrajectoryRecorder, TrajectorySample, TrajectoryStats,
};
pub use spectro_collision::{self, Rect, Shape};
pub use spectro_format::{self, ApparatusSpec, FormatError, load_spec};
pub use spectro_math::{self, FRAME_RATE, Vec2};
pub use spectro_particle::{self, ChargedParticle, ParticleError, Polarity, RADIUS};

/// Advance `apparatus` by up to `frames` frames.
///
/// Stops early once the particle is stopped. When a recorder is given, the
/// launch state and every frame are recorded. Returns the number of frames
/// actually simulated.
pub fn run_frames(
    apparatus: &mut Apparatus,
    frames: u64,
    mut recorder: Option<&mut TrajectoryRecorder>,
) -> u64 {
    if let Some(recorder) = recorder.as_deref_mut() {
        recorder.record(apparatus);
    }

    let mut simulated = 0;
    while simulated < frames && !apparatus.is_stopped() {
        apparatus.advance_frame();
        simulated += 1;
        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record(apparatus);
        }
    }
    simulated
}
