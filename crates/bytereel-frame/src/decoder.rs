/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use bytereel_core::layout::RasterLayout;
use bytereel_core::log::trace;
use bytereel_core::pack::unpack_symbols;
use bytereel_core::symbol::{classify, BlockColor};

use crate::errors::FrameDecodeErrors;

/// One decoded raster: the payload bytes it carried and whether the
/// end-of-data marker was seen.
pub struct DecodedFrame {
    /// Payload bytes recovered from this raster
    pub bytes:            Vec<u8>,
    /// True when a sentinel block terminated this raster, meaning no
    /// later raster carries payload
    pub reached_sentinel: bool
}

/// Reads one raster back into a chunk of payload bytes.
///
/// Blocks are sampled at their center pixel in the same row-major
/// order the encoder painted them. The first sentinel block terminates
/// the raster; symbols seen before it are packed into whole bytes,
/// dropping any trailing partial group of fewer than four symbols.
pub struct FrameDecoder {
    layout:   RasterLayout,
    // interleaved channels per pixel in the incoming raster,
    // 4 for RGBA, 3 for RGB coming back from a demuxer
    channels: usize
}

impl FrameDecoder {
    /// Create a decoder expecting RGBA rasters shaped by `layout`
    pub const fn new(layout: RasterLayout) -> FrameDecoder {
        FrameDecoder {
            layout,
            channels: 4
        }
    }

    /// Create a decoder for rasters with `channels` interleaved
    /// channels per pixel.
    ///
    /// Demuxed video frames commonly come back as RGB without the
    /// alpha channel the encoder wrote; both 3 and 4 are accepted and
    /// classification never reads alpha.
    pub const fn new_with_channels(layout: RasterLayout, channels: usize) -> FrameDecoder {
        FrameDecoder { layout, channels }
    }

    /// Decode one raster.
    ///
    /// # Arguments
    /// - raster: Interleaved pixels, length must equal
    ///   `layout.pixel_count() * channels`
    ///
    /// # Returns
    /// - Ok(frame): Recovered bytes plus the sentinel flag
    /// - Err: The buffer does not match the configured geometry
    pub fn decode(&self, raster: &[u8]) -> Result<DecodedFrame, FrameDecodeErrors> {
        if self.channels != 3 && self.channels != 4 {
            return Err(FrameDecodeErrors::UnsupportedChannelCount(self.channels));
        }

        let expected = self.layout.pixel_count() * self.channels;

        if raster.len() != expected {
            return Err(FrameDecodeErrors::WrongRasterSize(expected, raster.len()));
        }

        let mut symbols = Vec::with_capacity(self.layout.block_count());
        let mut reached_sentinel = false;

        for g in 0..self.layout.block_count() {
            let (x, y) = self.layout.block_center(g);
            let p = (y * self.layout.width() + x) * self.channels;

            match classify(raster[p], raster[p + 1], raster[p + 2]) {
                BlockColor::Sentinel => {
                    trace!("sentinel block at grid index {}", g);
                    reached_sentinel = true;
                    break;
                }
                BlockColor::Data(symbol) => symbols.push(symbol)
            }
        }

        Ok(DecodedFrame {
            bytes: unpack_symbols(&symbols),
            reached_sentinel
        })
    }
}
