/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whole-payload encode and decode drivers
//!
//! [`StreamEncoder`] walks the chunk sequence and writes one raster
//! per chunk into a sink; [`StreamDecoder`] drains a source raster by
//! raster until the sentinel. Both own their frame counter as plain
//! struct state, advanced once per frame boundary, which is also the
//! only safe point for a caller to cancel between calls.

use log::{info, trace};

use bytereel_core::layout::RasterLayout;
use bytereel_frame::{FrameDecoder, FrameEncoder};

use crate::chunk::ChunkSequencer;
use crate::errors::StreamErrors;
use crate::traits::{FrameSink, FrameSource};

/// Encodes a whole payload into an ordered sequence of rasters.
pub struct StreamEncoder<'a> {
    data:           &'a [u8],
    layout:         RasterLayout,
    frames_written: usize
}

impl<'a> StreamEncoder<'a> {
    /// Create an encoder for `data` producing rasters shaped by
    /// `layout`.
    pub const fn new(data: &'a [u8], layout: RasterLayout) -> StreamEncoder<'a> {
        StreamEncoder {
            data,
            layout,
            frames_written: 0
        }
    }

    /// Number of frames written so far
    pub const fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Encode every chunk of the payload into `sink`, in order.
    ///
    /// The final frame always carries a sentinel: when the payload
    /// divides the raster capacity evenly an extra sentinel-only frame
    /// is written after the last full one.
    ///
    /// # Returns
    /// - Ok(count): Total frames written
    /// - Err: The first failure; the sink is left with a truncated
    ///   sequence that cannot be decoded past the failed index
    pub fn encode_all<S: FrameSink>(&mut self, sink: &mut S) -> Result<usize, StreamErrors> {
        if self.layout.capacity_bytes() == 0 {
            return Err(StreamErrors::ZeroCapacity(self.layout.block_count()));
        }

        for chunk in ChunkSequencer::new(self.data, self.layout) {
            let raster = FrameEncoder::new(chunk.bytes, self.layout)
                .encode()
                .map_err(|error| StreamErrors::FrameEncode(chunk.index, error))?;

            sink.write_frame(chunk.index, &raster)?;

            trace!("wrote frame {} ({} payload bytes)", chunk.index, chunk.bytes.len());
            self.frames_written += 1;
        }

        info!("{} frames written", self.frames_written);
        Ok(self.frames_written)
    }
}

/// Decodes an ordered sequence of rasters back into the payload.
pub struct StreamDecoder {
    layout:      RasterLayout,
    frames_read: usize
}

impl StreamDecoder {
    /// Create a decoder for rasters shaped by `layout`.
    pub const fn new(layout: RasterLayout) -> StreamDecoder {
        StreamDecoder {
            layout,
            frames_read: 0
        }
    }

    /// Number of frames consumed so far
    pub const fn frames_read(&self) -> usize {
        self.frames_read
    }

    /// Drain `source` frame by frame until the sentinel, returning the
    /// reassembled payload.
    ///
    /// Frames after the sentinel-bearing one are never requested. A
    /// source that runs out before any sentinel is an error, since the
    /// encoder always terminates the stream with one.
    pub fn decode_all<S: FrameSource>(&mut self, source: &mut S) -> Result<Vec<u8>, StreamErrors> {
        let decoder = FrameDecoder::new_with_channels(self.layout, source.channels());
        let mut output = Vec::new();

        loop {
            let index = self.frames_read;

            let raster = match source.read_frame(index)? {
                Some(raster) => raster,
                None => return Err(StreamErrors::MissingSentinel(index))
            };

            let frame = decoder
                .decode(&raster)
                .map_err(|error| StreamErrors::FrameDecode(index, error))?;

            trace!("read frame {} ({} payload bytes)", index, frame.bytes.len());

            output.extend_from_slice(&frame.bytes);
            self.frames_read += 1;

            if frame.reached_sentinel {
                break;
            }
        }

        info!("{} frames read, {} bytes recovered", self.frames_read, output.len());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use bytereel_core::layout::RasterLayout;

    use crate::errors::StreamErrors;
    use crate::sequencer::{StreamDecoder, StreamEncoder};
    use crate::traits::{FrameSink, FrameSource};

    #[derive(Default)]
    struct MemoryStore {
        frames: Vec<Vec<u8>>
    }

    impl FrameSink for MemoryStore {
        fn write_frame(&mut self, index: usize, raster: &[u8]) -> Result<(), StreamErrors> {
            assert_eq!(index, self.frames.len());
            self.frames.push(raster.to_vec());
            Ok(())
        }
    }

    impl FrameSource for MemoryStore {
        fn read_frame(&mut self, index: usize) -> Result<Option<Vec<u8>>, StreamErrors> {
            Ok(self.frames.get(index).cloned())
        }
    }

    fn tiny_layout() -> RasterLayout {
        // 2x2 block grid, one byte per raster
        RasterLayout::new(4, 4, 2).unwrap()
    }

    #[test]
    fn test_two_byte_scenario() {
        // [0x00, 0xFF] over a one-byte raster: all-black frame,
        // all-blue frame, then a sentinel-only terminator
        let layout = tiny_layout();
        let mut store = MemoryStore::default();

        let written = StreamEncoder::new(&[0x00, 0xFF], layout)
            .encode_all(&mut store)
            .unwrap();
        assert_eq!(written, 3);

        for pixel in store.frames[0].chunks_exact(4) {
            assert_eq!(pixel, &[0, 0, 0, 255]);
        }
        for pixel in store.frames[1].chunks_exact(4) {
            assert_eq!(pixel, &[0, 0, 255, 255]);
        }
        for pixel in store.frames[2].chunks_exact(4) {
            assert_eq!(pixel, &[255, 255, 255, 255]);
        }

        let payload = StreamDecoder::new(layout).decode_all(&mut store).unwrap();
        assert_eq!(payload, &[0x00, 0xFF]);
    }

    #[test]
    fn test_decoder_ignores_frames_after_sentinel() {
        let layout = tiny_layout();
        let mut store = MemoryStore::default();

        StreamEncoder::new(&[0x42], layout)
            .encode_all(&mut store)
            .unwrap();

        // garbage after the sentinel frame must never be read
        store.frames.push(vec![0xAA; layout.rgba_len()]);

        let mut decoder = StreamDecoder::new(layout);
        let payload = decoder.decode_all(&mut store).unwrap();

        assert_eq!(payload, &[0x42]);
        assert_eq!(decoder.frames_read(), 2);
    }

    #[test]
    fn test_truncated_stream_is_an_error() {
        let layout = tiny_layout();
        let mut store = MemoryStore::default();

        StreamEncoder::new(&[1, 2, 3], layout)
            .encode_all(&mut store)
            .unwrap();

        // drop the sentinel-only terminator
        store.frames.pop();

        let result = StreamDecoder::new(layout).decode_all(&mut store);
        assert!(matches!(result, Err(StreamErrors::MissingSentinel(_))));
    }

    #[test]
    fn test_zero_capacity_layout_is_rejected() {
        // a single-block grid cannot hold one byte
        let layout = RasterLayout::new(2, 2, 2).unwrap();
        let mut store = MemoryStore::default();

        let result = StreamEncoder::new(&[1], layout).encode_all(&mut store);
        assert!(matches!(result, Err(StreamErrors::ZeroCapacity(1))));
    }
}
