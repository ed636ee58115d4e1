/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoding and decoding of single raster frames
//!
//! One frame carries one chunk of payload bytes as a grid of uniformly
//! colored blocks, two bits per block, with white blocks marking the
//! end of the payload.
//!
//! # Features
//! - Encoding and decoding
//! - `no_std`
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use bytereel_core;

mod decoder;
mod encoder;
mod errors;
