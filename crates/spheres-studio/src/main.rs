//! Drives an environment through a short manipulation sequence and writes
//! every flushed frame to `<out_dir>/frame_<n>.png`.
//!
//! Usage: `spheres-studio [-v|--verbose] [out_dir]` (default `frames`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;

use spheres_engine::logging::{LoggingConfig, init_logging};
use spheres_engine::raster::rasterize;
use spheres_env::{Environment, EnvironmentConfig, Rgba};

fn main() -> Result<()> {
    let mut verbose = false;
    let mut out_dir = PathBuf::from("frames");
    for arg in std::env::args_os().skip(1) {
        if arg == "-v" || arg == "--verbose" {
            verbose = true;
        } else {
            out_dir = PathBuf::from(arg);
        }
    }

    let mut logging = LoggingConfig::default();
    if verbose {
        logging = logging.spheres_level(LevelFilter::Debug);
    }
    init_logging(logging);

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut env = Environment::with_config(EnvironmentConfig::new().size(600, 600))?;
    let mut recorder = Recorder::new(&out_dir);

    recorder.capture(&mut env, "baseline")?;

    env.initialize_object("object_a")?
        .set_color(Rgba::new(0.0, 0.0, 1.0, 1.0))?;
    recorder.capture(&mut env, "object_a colored")?;

    env.get_mut("object_a")?.set_radius(0.20)?;
    recorder.capture(&mut env, "object_a resized")?;

    env.get_mut("object_a")?.set_position((0.50, -0.55, 1.00))?;
    recorder.capture(&mut env, "object_a moved")?;

    {
        let b = env.initialize_object("object_b")?;
        b.set_color(Rgba::new(0.0, 1.0, 0.0, 1.0))?;
        b.set_position((-0.25, 0.25, 0.00))?;
        b.set_radius(0.10)?;
    }
    recorder.capture(&mut env, "object_b added")?;

    env.get_mut("object_b")?.set_position((0.35, -0.35, 1.0))?;
    recorder.capture(&mut env, "object_b overlaps object_a")?;

    env.get_mut("object_a")?.raise_to_front()?;
    recorder.capture(&mut env, "object_a raised")?;

    log::info!("final state: {}", env.snapshot_all()?);
    env.teardown();

    log::info!("wrote {} frames to {}", recorder.written, out_dir.display());
    Ok(())
}

/// Flushes the environment and saves the resulting frame.
struct Recorder<'a> {
    out_dir: &'a Path,
    written: usize,
}

impl<'a> Recorder<'a> {
    fn new(out_dir: &'a Path) -> Self {
        Self { out_dir, written: 0 }
    }

    fn capture(&mut self, env: &mut Environment, label: &str) -> Result<()> {
        env.update();

        let image = {
            let surface = env.surface();
            let frame = surface
                .frame()
                .context("surface produced no frame after update")?;
            rasterize(frame)
        };

        let path = self.out_dir.join(format!("frame_{}.png", self.written));
        image
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::info!("frame {}: {label} -> {}", self.written, path.display());
        self.written += 1;
        Ok(())
    }
}
