use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

mod bitmap;
mod colour;
mod config;
mod escape;
mod pixel;
mod raster;
mod render;
mod screen;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::Config::default();
    info!(
        "rendering {}x{} around ({}, {}) at {} pixels per unit",
        config.size.width,
        config.size.height,
        config.x_center,
        config.y_center,
        config.resolution
    );

    let started = Instant::now();
    let rendering = render::render(&config).context("failed to start render threads")?;

    let histogram = &rendering.histogram;
    debug!(
        "{} pixels, {} distinct escape counts, {} never escaped, escaped range {:?}",
        histogram.total_samples(),
        histogram.bucket_labels().len(),
        histogram.count(config.max_iterations),
        histogram.escaped_range(config.max_iterations)
    );

    let (x_offset, y_offset) = config.offsets();
    debug!(
        "centre pixel: {:?}",
        rendering.raster.get((-x_offset) as u32, y_offset as u32)
    );

    bitmap::save(&rendering.raster, &config.filename)
        .with_context(|| format!("failed to write {}", config.filename.display()))?;

    info!(
        "wrote {} in {:?}",
        config.filename.display(),
        started.elapsed()
    );

    Ok(())
}
