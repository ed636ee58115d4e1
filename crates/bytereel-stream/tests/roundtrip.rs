/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whole-payload round trips across the frame boundary lengths.

use bytereel_core::layout::RasterLayout;
use bytereel_stream::errors::StreamErrors;
use bytereel_stream::sequencer::{StreamDecoder, StreamEncoder};
use bytereel_stream::traits::{FrameSink, FrameSource};

#[derive(Default)]
struct MemoryStore {
    frames: Vec<Vec<u8>>
}

impl FrameSink for MemoryStore {
    fn write_frame(&mut self, _index: usize, raster: &[u8]) -> Result<(), StreamErrors> {
        self.frames.push(raster.to_vec());
        Ok(())
    }
}

impl FrameSource for MemoryStore {
    fn read_frame(&mut self, index: usize) -> Result<Option<Vec<u8>>, StreamErrors> {
        Ok(self.frames.get(index).cloned())
    }
}

/// RGB variant of the store, emulating a demuxer that drops alpha.
struct RgbStore(MemoryStore);

impl FrameSource for RgbStore {
    fn read_frame(&mut self, index: usize) -> Result<Option<Vec<u8>>, StreamErrors> {
        Ok(self.0.frames.get(index).map(|rgba| {
            rgba.chunks_exact(4)
                .flat_map(|p| [p[0], p[1], p[2]])
                .collect()
        }))
    }

    fn channels(&self) -> usize {
        3
    }
}

fn round_trip(payload: &[u8], layout: RasterLayout) -> (Vec<u8>, usize) {
    let mut store = MemoryStore::default();

    let frames = StreamEncoder::new(payload, layout)
        .encode_all(&mut store)
        .unwrap();
    let recovered = StreamDecoder::new(layout).decode_all(&mut store).unwrap();

    (recovered, frames)
}

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

#[test]
fn round_trip_empty_payload() {
    let layout = RasterLayout::new(32, 16, 4).unwrap();

    let (recovered, frames) = round_trip(&[], layout);

    assert!(recovered.is_empty());
    // a zero-length payload still produces exactly one frame,
    // entirely sentinel
    assert_eq!(frames, 1);
}

#[test]
fn round_trip_one_byte_short_of_capacity() {
    let layout = RasterLayout::new(32, 16, 4).unwrap();
    let payload = patterned(layout.capacity_bytes() - 1);

    let (recovered, frames) = round_trip(&payload, layout);

    assert_eq!(recovered, payload);
    // the sentinel fits in the data raster, no terminator needed
    assert_eq!(frames, 1);
}

#[test]
fn round_trip_exact_capacity() {
    let layout = RasterLayout::new(32, 16, 4).unwrap();
    let payload = patterned(layout.capacity_bytes());

    let (recovered, frames) = round_trip(&payload, layout);

    assert_eq!(recovered, payload);
    // full raster plus the sentinel-only terminator
    assert_eq!(frames, 2);
}

#[test]
fn round_trip_three_rasters() {
    let layout = RasterLayout::new(32, 16, 4).unwrap();
    let payload = patterned(layout.capacity_bytes() * 3);

    let (recovered, frames) = round_trip(&payload, layout);

    assert_eq!(recovered, payload);
    assert_eq!(frames, 4);
}

#[test]
fn round_trip_every_length_on_a_tiny_grid() {
    // 4x2 block grid, two bytes per raster; sweep lengths across
    // several frame boundaries
    let layout = RasterLayout::new(8, 4, 2).unwrap();

    for len in 0..=9 {
        let payload = patterned(len);
        let (recovered, _) = round_trip(&payload, layout);

        assert_eq!(recovered, payload, "length {len}");
    }
}

#[test]
fn round_trip_through_rgb_frames() {
    let layout = RasterLayout::new(32, 16, 4).unwrap();
    let payload = patterned(layout.capacity_bytes() + 17);

    let mut store = MemoryStore::default();
    StreamEncoder::new(&payload, layout)
        .encode_all(&mut store)
        .unwrap();

    let recovered = StreamDecoder::new(layout)
        .decode_all(&mut RgbStore(store))
        .unwrap();

    assert_eq!(recovered, payload);
}

#[test]
fn round_trip_default_layout_partial_frame() {
    // the 1920x1080 deployment geometry with a payload far smaller
    // than one raster
    let layout = RasterLayout::default();
    let payload = patterned(1000);

    let (recovered, frames) = round_trip(&payload, layout);

    assert_eq!(recovered, payload);
    assert_eq!(frames, 1);
}
