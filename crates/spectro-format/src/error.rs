//! Error types for spectro-format.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Particle(#[from] spectro_particle::ParticleError),
}

pub type Result<T> = std::result::Result<T, FormatError>;
