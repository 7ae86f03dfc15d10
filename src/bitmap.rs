//! Writing the raster out as a Windows bitmap.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{codecs::bmp::BmpEncoder, ExtendedColorType, ImageEncoder, ImageResult};
use log::debug;

use crate::raster::Raster;

/// One RGBA [`Pixel`](crate::pixel::Pixel) per cell.
pub const BITS_PER_PIXEL: u16 = 32;

/// Writes `raster` to `path` as an uncompressed 32-bit BMP, replacing any existing file.
pub fn save(raster: &Raster, path: impl AsRef<Path>) -> ImageResult<()> {
    let path = path.as_ref();
    let size = raster.size();
    debug!(
        "writing {}x{} {}-bit bitmap to {}",
        size.width,
        size.height,
        BITS_PER_PIXEL,
        path.display()
    );

    let mut writer = BufWriter::new(File::create(path)?);
    BmpEncoder::new(&mut writer).write_image(
        raster.as_bytes(),
        size.width,
        size.height,
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;

    Ok(())
}
