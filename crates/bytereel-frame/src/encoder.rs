/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use bytereel_core::layout::RasterLayout;
use bytereel_core::pack::symbol_at;
use bytereel_core::symbol::SENTINEL_RGBA;

use crate::errors::FrameEncodeErrors;

/// Paints one chunk of payload bytes into one RGBA raster.
///
/// Blocks are visited in row-major order; block `g` takes the color of
/// the bit pair `g % 4` of byte `g / 4` while payload remains, and the
/// sentinel color afterwards. Every pixel of a block's footprint is
/// filled uniformly with an opaque color, so two encodes of the same
/// chunk are bit-identical.
///
/// # Example
/// - Encode one byte into a tiny 4x4 raster of 2-pixel blocks
///
/// ```
/// use bytereel_core::layout::RasterLayout;
/// use bytereel_frame::FrameEncoder;
///
/// let layout = RasterLayout::new(4, 4, 2).unwrap();
/// let raster = FrameEncoder::new(&[0b00_01_10_11], layout).encode().unwrap();
/// assert_eq!(raster.len(), layout.rgba_len());
/// ```
pub struct FrameEncoder<'a> {
    // payload for this raster, at most capacity_bytes long
    chunk:  &'a [u8],
    layout: RasterLayout
}

impl<'a> FrameEncoder<'a> {
    /// Create a new encoder painting `chunk` into a raster shaped by
    /// `layout`.
    ///
    /// # Arguments
    /// - chunk: Payload bytes, length must not exceed `layout.capacity_bytes()`
    /// - layout: Geometry of the raster to produce
    pub const fn new(chunk: &'a [u8], layout: RasterLayout) -> FrameEncoder<'a> {
        FrameEncoder { chunk, layout }
    }

    /// Color of the block at row-major index `g`
    #[inline]
    fn block_rgba(&self, g: usize) -> [u8; 4] {
        match self.chunk.get(g / 4) {
            Some(byte) => symbol_at(*byte, g % 4).rgba(),
            None => SENTINEL_RGBA
        }
    }

    /// Encode the chunk into a freshly allocated RGBA raster.
    ///
    /// # Returns
    /// - Ok(raster): `width * height * 4` bytes of interleaved RGBA
    /// - Err: The chunk does not fit in one raster
    pub fn encode(&self) -> Result<Vec<u8>, FrameEncodeErrors> {
        let capacity = self.layout.capacity_bytes();

        if self.chunk.len() > capacity {
            return Err(FrameEncodeErrors::ChunkTooLarge(self.chunk.len(), capacity));
        }

        let width = self.layout.width();
        let size = self.layout.block_size();

        let mut raster = alloc::vec![0_u8; self.layout.rgba_len()];

        for g in 0..self.layout.block_count() {
            let color = self.block_rgba(g);
            let (bx, by) = self.layout.block_coords(g);

            for dy in 0..size {
                let row_start = ((by * size + dy) * width + bx * size) * 4;
                let row = &mut raster[row_start..row_start + size * 4];

                for pixel in row.chunks_exact_mut(4) {
                    pixel.copy_from_slice(&color);
                }
            }
        }
        Ok(raster)
    }
}
