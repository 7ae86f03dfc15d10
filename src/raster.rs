/*!
The in-memory image.

Pixels are stored row-major, top row first. [`Pixel`] is [`bytemuck::Pod`], so
the whole raster can be handed to the encoder as bytes without copying.

A raster with a zero dimension holds no pixels and has no rows.
*/

use std::{
    ops::{Deref, DerefMut},
    slice::ChunksMut,
};

use rayon::{prelude::ParallelSliceMut, slice::ChunksMut as ParChunksMut};

use crate::{pixel::Pixel, screen};

pub struct Raster {
    size: screen::Size,
    pixels: Vec<Pixel>,
}

impl Raster {
    pub fn new(size: screen::Size) -> Self {
        Self {
            size,
            pixels: vec![Pixel::default(); size.pixel_count()],
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn get(&self, col: u32, row: u32) -> Pixel {
        self.pixels[self.size.index(col, row)]
    }

    pub fn rows_mut(&mut self) -> ChunksMut<Pixel> {
        let row_length = self.row_length();
        self.pixels.chunks_mut(row_length)
    }

    pub fn par_rows_mut(&mut self) -> ParChunksMut<Pixel> {
        let row_length = self.row_length();
        self.pixels.par_chunks_mut(row_length)
    }

    // Chunk sizes must be non-zero; a zero-width raster is empty anyway.
    fn row_length(&self) -> usize {
        self.size.width.max(1) as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl Deref for Raster {
    type Target = [Pixel];

    fn deref(&self) -> &Self::Target {
        &self.pixels
    }
}

impl DerefMut for Raster {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.pixels
    }
}
