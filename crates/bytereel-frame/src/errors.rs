/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors possible when decoding a raster back into a chunk
pub enum FrameDecodeErrors {
    /// The raster buffer does not match the layout's pixel count
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the number of bytes found
    WrongRasterSize(usize, usize),
    /// The raster's channel count is not supported
    ///
    /// Only `3` (RGB) and `4` (RGBA) are supported
    UnsupportedChannelCount(usize)
}

impl Debug for FrameDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameDecodeErrors::WrongRasterSize(expected, found) => {
                writeln!(
                    f,
                    "Wrong raster size, expected {expected} bytes but found {found}"
                )
            }
            FrameDecodeErrors::UnsupportedChannelCount(channels) => {
                writeln!(
                    f,
                    "Unsupported channel count {channels}, expected either 3 or 4"
                )
            }
        }
    }
}

/// Errors possible when encoding a chunk into a raster
pub enum FrameEncodeErrors {
    /// The chunk holds more bytes than one raster can carry
    ///
    /// # Arguments
    /// - 1st argument is the chunk length
    /// - 2nd argument is the raster capacity in bytes
    ChunkTooLarge(usize, usize)
}

impl Debug for FrameEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameEncodeErrors::ChunkTooLarge(found, capacity) => {
                writeln!(
                    f,
                    "Chunk of {found} bytes exceeds the raster capacity of {capacity} bytes"
                )
            }
        }
    }
}

impl Display for FrameDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for FrameEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameDecodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for FrameEncodeErrors {}
