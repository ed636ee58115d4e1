/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use bytereel_core::layout::LayoutErrors;
use bytereel_frame::{FrameDecodeErrors, FrameEncodeErrors};

/// All errors possible while sequencing a payload across frames.
///
/// Variants carrying a `usize` name the frame index that failed, since
/// chunk order is semantically required and a gap corrupts everything
/// after it.
pub enum StreamErrors {
    /// The raster geometry is invalid
    Layout(LayoutErrors),
    /// The layout's block grid is too small to carry even one byte
    ///
    /// The argument is the block count of the offending layout
    ZeroCapacity(usize),
    /// Encoding the chunk for this frame index failed
    FrameEncode(usize, FrameEncodeErrors),
    /// Decoding the raster at this frame index failed
    FrameDecode(usize, FrameDecodeErrors),
    /// The frame source ran out at this index before any sentinel was
    /// seen; the stream is truncated or was re-encoded lossily
    MissingSentinel(usize),
    /// An I/O error from the frame sink or source
    IoErrors(std::io::Error),
    /// Generic message
    Generic(String)
}

impl Debug for StreamErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamErrors::Layout(error) => {
                writeln!(f, "Invalid raster layout: {:?}", error)
            }
            StreamErrors::ZeroCapacity(blocks) => {
                writeln!(
                    f,
                    "Layout with {blocks} blocks cannot carry a single byte, need at least 4"
                )
            }
            StreamErrors::FrameEncode(index, error) => {
                writeln!(f, "Encoding frame {index} failed: {:?}", error)
            }
            StreamErrors::FrameDecode(index, error) => {
                writeln!(f, "Decoding frame {index} failed: {:?}", error)
            }
            StreamErrors::MissingSentinel(index) => {
                writeln!(
                    f,
                    "Frame source exhausted at frame {index} before the end-of-data sentinel"
                )
            }
            StreamErrors::IoErrors(error) => {
                writeln!(f, "I/O error: {}", error)
            }
            StreamErrors::Generic(message) => {
                writeln!(f, "{message}")
            }
        }
    }
}

impl Display for StreamErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for StreamErrors {}

impl From<LayoutErrors> for StreamErrors {
    fn from(error: LayoutErrors) -> Self {
        StreamErrors::Layout(error)
    }
}

impl From<std::io::Error> for StreamErrors {
    fn from(error: std::io::Error) -> Self {
        StreamErrors::IoErrors(error)
    }
}

impl From<String> for StreamErrors {
    fn from(message: String) -> Self {
        StreamErrors::Generic(message)
    }
}
