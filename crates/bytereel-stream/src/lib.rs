/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Sequencing a whole payload across many raster frames
//!
//! This crate splits a file's bytes into ordered chunks sized to one
//! raster each, drives [`bytereel_frame`] to paint them, and on the way
//! back concatenates decoded chunks until the end-of-data sentinel.
//!
//! Frame persistence lives behind the [`FrameSink`](traits::FrameSink)
//! and [`FrameSource`](traits::FrameSource) seams so the same
//! sequencing logic runs against a PNG directory, a demuxed video or
//! an in-memory store.

pub use bytereel_core;
pub use bytereel_frame;

pub mod chunk;
pub mod errors;
pub mod sequencer;
pub mod traits;
