/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Seams to the frame persistence collaborators.
//!
//! The sequencer never touches the filesystem or a video container
//! itself; it hands rasters to a [`FrameSink`] and pulls them back
//! from a [`FrameSource`]. Both are blocking, called one frame at a
//! time, in index order, from a single thread.

use crate::errors::StreamErrors;

/// Persists encoded rasters in sequence order.
pub trait FrameSink {
    /// Persist one raster under its 0-based sequential index.
    ///
    /// The raster must be stored losslessly; any pixel drift shows up
    /// as corrupted payload on decode.
    fn write_frame(&mut self, index: usize, raster: &[u8]) -> Result<(), StreamErrors>;
}

/// Yields rasters back in sequence order.
pub trait FrameSource {
    /// Return the raster at the 0-based sequential index, or `None`
    /// when the sequence is exhausted.
    fn read_frame(&mut self, index: usize) -> Result<Option<Vec<u8>>, StreamErrors>;

    /// Interleaved channels per pixel of the rasters this source
    /// returns.
    ///
    /// Sinks store RGBA, but a video demuxer commonly hands frames
    /// back as RGB.
    fn channels(&self) -> usize {
        4
    }
}
