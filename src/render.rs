//! The per-pixel driving loop.

use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator};

use crate::{
    colour::EscapeHistogram, config::Config, escape::escape_time, pixel::Pixel, raster::Raster,
};

pub struct Rendering {
    pub raster: Raster,
    pub histogram: EscapeHistogram,
}

/// Renders every pixel of `config.size` exactly once.
///
/// Rows are independent, so with more than one thread they are handed out to
/// a dedicated pool. The output does not depend on the thread count.
pub fn render(config: &Config) -> Result<Rendering, rayon::ThreadPoolBuildError> {
    trace!("begin render");

    let mut raster = Raster::new(config.size);

    let histogram = if config.threads <= 1 {
        debug!("rendering on the calling thread");

        raster
            .rows_mut()
            .enumerate()
            .map(|(row_index, row)| render_row(config, row_index as u32, row))
            .fold(EscapeHistogram::new(), merge)
    } else {
        debug!("rendering on {} threads", config.threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;

        pool.install(|| {
            raster
                .par_rows_mut()
                .enumerate()
                .map(|(row_index, row)| render_row(config, row_index as u32, row))
                .reduce(EscapeHistogram::new, merge)
        })
    };

    debug_assert_eq!(histogram.total_samples(), config.size.pixel_count());

    trace!("end render");

    Ok(Rendering { raster, histogram })
}

fn render_row(config: &Config, row_index: u32, row: &mut [Pixel]) -> EscapeHistogram {
    let mut histogram = EscapeHistogram::new();

    for (col, pixel) in row.iter_mut().enumerate() {
        let point = config.pixel_to_point(col as u32, row_index);
        let iterations = escape_time(point, config.max_iterations);
        histogram.record(iterations);
        *pixel = config.colour(iterations);
    }

    histogram
}

fn merge(mut histogram: EscapeHistogram, other: EscapeHistogram) -> EscapeHistogram {
    histogram.merge(other);
    histogram
}
