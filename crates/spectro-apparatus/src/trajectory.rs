//! Trajectory recording and export.

use serde::Serialize;
use std::path::Path;

use crate::Apparatus;

/// One recorded frame of particle state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub frame: u64,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub stopped: bool,
}

/// Records the particle path frame by frame, e.g. for drawing its trail.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryRecorder {
    samples: Vec<TrajectorySample>,
}

impl TrajectoryRecorder {
    /// Create a new empty trajectory recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the apparatus' current particle state.
    pub fn record(&mut self, apparatus: &Apparatus) {
        let particle = apparatus.particle();
        let (p, v) = (particle.position(), particle.velocity());
        self.samples.push(TrajectorySample {
            frame: apparatus.frame(),
            position: [p.x, p.y],
            velocity: [v.x, v.y],
            stopped: particle.is_stopped(),
        });
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Number of samples recorded.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Clear all recorded data.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.samples)
    }

    /// Export to JSON file.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
    }

    /// Get trajectory statistics for the most recent launch.
    ///
    /// `reset_particle` rewinds the frame counter, so a drop in frame number
    /// starts a new segment and earlier segments are ignored.
    pub fn stats(&self) -> TrajectoryStats {
        let start = (1..self.samples.len())
            .rev()
            .find(|&i| self.samples[i].frame < self.samples[i - 1].frame)
            .unwrap_or(0);
        let segment = &self.samples[start..];

        let (Some(first), Some(last)) = (segment.first(), segment.last()) else {
            return TrajectoryStats::default();
        };

        let path_length = segment
            .windows(2)
            .map(|w| {
                let dx = w[1].position[0] - w[0].position[0];
                let dy = w[1].position[1] - w[0].position[1];
                dx.hypot(dy)
            })
            .sum();

        TrajectoryStats {
            nsamples: segment.len(),
            frames: last.frame - first.frame,
            path_length,
            final_position: last.position,
            stopped_at: segment.iter().find(|s| s.stopped).map(|s| s.frame),
        }
    }
}

/// Statistics about a recorded trajectory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryStats {
    /// Number of samples in the latest segment.
    pub nsamples: usize,
    /// Frames between first and last sample.
    pub frames: u64,
    /// Distance travelled along the recorded path.
    pub path_length: f64,
    /// Position of the last sample.
    pub final_position: [f64; 2],
    /// First frame at which the particle was seen stopped.
    pub stopped_at: Option<u64>,
}
