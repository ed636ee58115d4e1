//! Core routines shared by the bytereel crates
//!
//! This crate provides the primitives every other crate in the
//! family builds on
//!
//! It currently contains
//!
//! - The 2-bit [`Symbol`](symbol::Symbol) alphabet, its color table and the
//!   priority classifier used when reading pixels back
//! - [`RasterLayout`](layout::RasterLayout), the validated block-grid geometry
//!   of one raster
//! - Bit-pair packing and unpacking between bytes and symbols
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing packed symbols.
//!
//! # Features
//!  - `std`: Enables `std::error::Error` on the error types.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!    present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod layout;
pub mod log;
pub mod pack;
pub mod symbol;
