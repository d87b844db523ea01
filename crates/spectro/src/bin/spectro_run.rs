//! # Headless spectrometer run
//!
//! Drives one particle through the apparatus without a window, at the
//! nominal frame count of the interactive simulator.
//!
//! ```bash
//! # Default setup, 10 seconds of frames
//! spectro-run --seconds 10
//!
//! # Load a setup and override the magnetic field, saving the path
//! spectro-run --config setup.spectro.json --magnetic-field 0.05 --output path.json
//! ```

use clap::Parser;
use std::path::PathBuf;

use spectro::{
    ApparatusSpec, FRAME_RATE, TrajectoryRecorder, load_spec, run_frames,
    spectro_format::export_spec,
};

/// Run a charged particle through the mass spectrometer
#[derive(Parser, Debug)]
#[command(name = "spectro-run")]
#[command(about = "Simulate a charged particle in a mass spectrometer")]
#[command(version)]
struct Args {
    /// Apparatus setup file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated seconds at the nominal frame rate
    #[arg(short, long, default_value = "10")]
    seconds: u64,

    /// Electric field strength, positive is down
    #[arg(long, allow_hyphen_values = true)]
    electric_field: Option<f64>,

    /// Magnetic field strength, positive is out of the page
    #[arg(long, allow_hyphen_values = true)]
    magnetic_field: Option<f64>,

    /// Particle mass
    #[arg(long)]
    mass: Option<f64>,

    /// Particle charge
    #[arg(long, allow_hyphen_values = true)]
    charge: Option<f64>,

    /// Launch velocity along x
    #[arg(long)]
    initial_x_velocity: Option<f64>,

    /// Write the recorded trajectory as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the effective setup as JSON
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut spec = match &args.config {
        Some(path) => load_spec(path)?,
        None => ApparatusSpec::default(),
    };
    if let Some(e) = args.electric_field {
        spec.electric_field = e;
    }
    if let Some(b) = args.magnetic_field {
        spec.magnetic_field = b;
    }
    if let Some(m) = args.mass {
        spec.particle.mass = m;
    }
    if let Some(q) = args.charge {
        spec.particle.charge = q;
    }
    if let Some(v) = args.initial_x_velocity {
        spec.particle.initial_x_velocity = v;
    }

    if let Some(path) = &args.save_config {
        export_spec(&spec, path)?;
    }

    let mut apparatus = spec.build()?;
    log::info!(
        "E={} B={} mass={} charge={} vx={}",
        spec.electric_field,
        spec.magnetic_field,
        spec.particle.mass,
        spec.particle.charge,
        spec.particle.initial_x_velocity
    );

    let frames = args.seconds * u64::from(FRAME_RATE);
    let mut recorder = TrajectoryRecorder::new();
    let simulated = run_frames(&mut apparatus, frames, Some(&mut recorder));

    let position = apparatus.position();
    let stats = recorder.stats();
    log::info!("Simulated {} of {} frames", simulated, frames);
    log::info!("Final position: ({:.2}, {:.2})", position.x, position.y);
    log::info!("Path length: {:.2}", stats.path_length);
    match stats.stopped_at {
        Some(frame) => log::info!("Particle stopped at frame {}", frame),
        None => log::info!("Particle still moving"),
    }

    if let Some(path) = &args.output {
        recorder.to_json_file(path)?;
        log::info!("Saved trajectory to {:?}", path);
    }

    Ok(())
}
