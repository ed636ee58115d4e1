/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG-backed frame persistence.
//!
//! Rasters are stored as `<index>.png` inside a working directory,
//! named by their plain sequence number. PNG keeps exact pixel values,
//! which the codec depends on end to end.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};
use zune_core::result::DecodingResult;
use zune_png::{PngDecoder, PngEncoder};

use bytereel_core::layout::RasterLayout;
use bytereel_stream::errors::StreamErrors;
use bytereel_stream::traits::{FrameSink, FrameSource};

fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("{index}.png"))
}

/// Writes rasters as sequentially numbered PNG files.
pub struct PngFrameSink<'a> {
    dir:    &'a Path,
    layout: RasterLayout
}

impl<'a> PngFrameSink<'a> {
    pub fn new(dir: &'a Path, layout: RasterLayout) -> PngFrameSink<'a> {
        PngFrameSink { dir, layout }
    }
}

impl FrameSink for PngFrameSink<'_> {
    fn write_frame(&mut self, index: usize, raster: &[u8]) -> Result<(), StreamErrors> {
        let options = EncoderOptions::new(
            self.layout.width(),
            self.layout.height(),
            ColorSpace::RGBA,
            BitDepth::Eight
        );

        let mut encoded = Vec::new();

        PngEncoder::new(raster, options)
            .encode(&mut encoded)
            .map_err(|error| {
                StreamErrors::Generic(format!("frame {index}: png encode failed: {:?}", error))
            })?;

        fs::write(frame_path(self.dir, index), encoded)?;
        Ok(())
    }
}

/// Reads sequentially numbered PNG files back as RGBA rasters.
///
/// A missing `<index>.png` means the sequence is exhausted. Frames
/// demuxed from a video commonly come back as plain RGB; those are
/// widened to RGBA so the decoder always sees four channels.
pub struct PngFrameSource<'a> {
    dir: &'a Path
}

impl<'a> PngFrameSource<'a> {
    pub fn new(dir: &'a Path) -> PngFrameSource<'a> {
        PngFrameSource { dir }
    }
}

fn widen_to_rgba(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect()
}

impl FrameSource for PngFrameSource<'_> {
    fn read_frame(&mut self, index: usize) -> Result<Option<Vec<u8>>, StreamErrors> {
        let path = frame_path(self.dir, index);

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into())
        };

        let mut decoder =
            PngDecoder::new_with_options(ZCursor::new(&data), DecoderOptions::new_cmd());

        let pixels = match decoder.decode() {
            Ok(DecodingResult::U8(pixels)) => pixels,
            Ok(_) => {
                return Err(StreamErrors::Generic(format!(
                    "frame {index}: expected an 8-bit frame image"
                )))
            }
            Err(error) => {
                return Err(StreamErrors::Generic(format!(
                    "frame {index}: png decode failed: {:?}",
                    error
                )))
            }
        };

        let colorspace = decoder.colorspace().unwrap_or(ColorSpace::Unknown);

        match colorspace.num_components() {
            4 => Ok(Some(pixels)),
            3 => Ok(Some(widen_to_rgba(&pixels))),
            other => Err(StreamErrors::Generic(format!(
                "frame {index}: unsupported channel count {other}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use bytereel_core::layout::RasterLayout;
    use bytereel_stream::bytereel_frame::FrameEncoder;
    use bytereel_stream::traits::{FrameSink, FrameSource};

    use super::{PngFrameSink, PngFrameSource};

    #[test]
    fn test_png_write_read_preserves_pixels() {
        let layout = RasterLayout::new(16, 8, 2).unwrap();
        let raster = FrameEncoder::new(&[0xDE, 0xAD], layout).encode().unwrap();

        let dir = std::env::temp_dir().join("bytereel-png-io-test");
        crate::file_io::recreate_dir(&dir).unwrap();

        PngFrameSink::new(&dir, layout)
            .write_frame(0, &raster)
            .unwrap();

        let read_back = PngFrameSource::new(&dir)
            .read_frame(0)
            .unwrap()
            .expect("frame 0 should exist");

        assert_eq!(read_back, raster);

        // the next index is absent, signalling exhaustion
        assert!(PngFrameSource::new(&dir).read_frame(1).unwrap().is_none());

        crate::file_io::remove_dir(&dir).unwrap();
    }
}
