/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raster geometry
//!
//! A raster is partitioned into a grid of square blocks, each painted
//! with a single color. [`RasterLayout`] owns that geometry: pixel
//! dimensions, block size, and the row-major mapping between block
//! indices and pixel coordinates.

use core::fmt::{Debug, Display, Formatter};

/// Pixel dimensions of the default deployment raster
pub const DEFAULT_WIDTH: usize = 1920;
/// Pixel height of the default deployment raster
pub const DEFAULT_HEIGHT: usize = 1080;
/// Side length of one block in the default deployment raster
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// Errors possible when constructing a layout.
///
/// These are configuration errors, fatal before any processing starts.
pub enum LayoutErrors {
    /// A pixel dimension or the block size was zero
    ZeroDimension,
    /// Width is not divisible by the block size
    ///
    /// # Arguments
    /// - 1st argument is the width
    /// - 2nd argument is the block size
    IndivisibleWidth(usize, usize),
    /// Height is not divisible by the block size
    ///
    /// # Arguments
    /// - 1st argument is the height
    /// - 2nd argument is the block size
    IndivisibleHeight(usize, usize)
}

impl Debug for LayoutErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutErrors::ZeroDimension => {
                writeln!(f, "Raster dimensions and block size must be non-zero")
            }
            LayoutErrors::IndivisibleWidth(width, block) => {
                writeln!(f, "Width {width} is not divisible by block size {block}")
            }
            LayoutErrors::IndivisibleHeight(height, block) => {
                writeln!(f, "Height {height} is not divisible by block size {block}")
            }
        }
    }
}

impl Display for LayoutErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutErrors {}

/// Validated geometry of one raster.
///
/// Width and height are pixel counts; `block_size` is the side length
/// of one square block carrying a single symbol. Construction fails
/// unless both dimensions divide evenly into blocks.
///
/// # Example
/// ```
/// use bytereel_core::layout::RasterLayout;
///
/// let layout = RasterLayout::new(1920, 1080, 4).unwrap();
/// // 480 * 270 blocks, 4 symbols to a byte
/// assert_eq!(layout.capacity_bytes(), 32_400);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RasterLayout {
    width:      usize,
    height:     usize,
    block_size: usize
}

impl RasterLayout {
    /// Create a layout, validating that `width` and `height` are each
    /// divisible by `block_size`.
    ///
    /// # Arguments
    /// - width: Raster width in pixels
    /// - height: Raster height in pixels
    /// - block_size: Side length of one block, in pixels
    ///
    /// # Returns
    /// - Ok(layout): The validated layout
    /// - Err: The dimensions cannot form a whole block grid
    pub const fn new(width: usize, height: usize, block_size: usize) -> Result<RasterLayout, LayoutErrors> {
        if width == 0 || height == 0 || block_size == 0 {
            return Err(LayoutErrors::ZeroDimension);
        }
        if width % block_size != 0 {
            return Err(LayoutErrors::IndivisibleWidth(width, block_size));
        }
        if height % block_size != 0 {
            return Err(LayoutErrors::IndivisibleHeight(height, block_size));
        }
        Ok(RasterLayout {
            width,
            height,
            block_size
        })
    }

    /// Raster width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Side length of one block in pixels
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks in one row
    pub const fn blocks_per_row(&self) -> usize {
        self.width / self.block_size
    }

    /// Number of block rows
    pub const fn blocks_per_col(&self) -> usize {
        self.height / self.block_size
    }

    /// Total number of blocks in the grid
    pub const fn block_count(&self) -> usize {
        self.blocks_per_row() * self.blocks_per_col()
    }

    /// Number of payload bytes one raster can carry.
    ///
    /// Four 2-bit symbols pack into one byte; a trailing group of fewer
    /// than four blocks cannot hold data.
    pub const fn capacity_bytes(&self) -> usize {
        self.block_count() / 4
    }

    /// Number of pixels in the raster
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Length in bytes of an RGBA buffer holding the raster
    pub const fn rgba_len(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Map a row-major block index to its `(column, row)` position in
    /// the block grid
    pub const fn block_coords(&self, index: usize) -> (usize, usize) {
        (index % self.blocks_per_row(), index / self.blocks_per_row())
    }

    /// Pixel coordinate of the center of a block.
    ///
    /// Blocks are filled uniformly, so any interior pixel is a valid
    /// sample point; the center keeps the sample farthest from block
    /// edges.
    pub const fn block_center(&self, index: usize) -> (usize, usize) {
        let (bx, by) = self.block_coords(index);
        let half = self.block_size / 2;

        (bx * self.block_size + half, by * self.block_size + half)
    }
}

impl Default for RasterLayout {
    /// The deployment default: 1920x1080 pixels in 4-pixel blocks,
    /// 32 400 payload bytes per raster
    fn default() -> Self {
        match RasterLayout::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_BLOCK_SIZE) {
            Ok(layout) => layout,
            Err(_) => unreachable!()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let layout = RasterLayout::default();

        assert_eq!(layout.block_count(), 129_600);
        assert_eq!(layout.capacity_bytes(), 32_400);
    }

    #[test]
    fn test_rejects_indivisible() {
        assert!(RasterLayout::new(1921, 1080, 4).is_err());
        assert!(RasterLayout::new(1920, 1081, 4).is_err());
        assert!(RasterLayout::new(0, 1080, 4).is_err());
        assert!(RasterLayout::new(1920, 1080, 0).is_err());
    }

    #[test]
    fn test_block_coords_row_major() {
        // 8x4 pixels in 2-pixel blocks, a 4x2 grid
        let layout = RasterLayout::new(8, 4, 2).unwrap();

        assert_eq!(layout.block_coords(0), (0, 0));
        assert_eq!(layout.block_coords(3), (3, 0));
        assert_eq!(layout.block_coords(4), (0, 1));
        assert_eq!(layout.block_center(0), (1, 1));
        assert_eq!(layout.block_center(5), (3, 3));
    }
}
