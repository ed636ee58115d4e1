/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Payload chunks
//!
//! A chunk is the byte range of the source payload mapped to exactly
//! one raster. Chunks are produced in order by
//! [`ChunkSequencer`](crate::sequencer::ChunkSequencer) and consumed
//! immediately; they never outlive the encode loop.

use bytereel_core::layout::RasterLayout;

/// One ordered slice of the payload, sized to a single raster.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Chunk<'a> {
    /// 0-based sequence position, also the frame index this chunk
    /// lands in
    pub index:    usize,
    /// The payload bytes, at most `capacity_bytes` long
    pub bytes:    &'a [u8],
    /// True for the last chunk of the payload.
    ///
    /// The final chunk is always shorter than the raster capacity;
    /// when the payload divides evenly an explicit empty chunk is
    /// emitted so the decoder can observe a sentinel-only raster.
    pub is_final: bool
}

/// Splits a payload into ordered chunks, one per raster.
///
/// Every chunk holds exactly `capacity_bytes` except the last, which
/// holds the remainder. When the payload length is an exact multiple
/// of the capacity (including the empty payload) a trailing empty
/// chunk is still produced, so every encoded stream terminates in a
/// raster that carries a sentinel.
///
/// # Example
/// ```
/// use bytereel_core::layout::RasterLayout;
/// use bytereel_stream::chunk::ChunkSequencer;
///
/// // 2x2 block grid, one byte per raster
/// let layout = RasterLayout::new(4, 4, 2).unwrap();
/// let chunks: Vec<_> = ChunkSequencer::new(&[0x00, 0xFF], layout).collect();
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].bytes, &[0x00]);
/// assert_eq!(chunks[1].bytes, &[0xFF]);
/// assert!(chunks[2].bytes.is_empty() && chunks[2].is_final);
/// ```
pub struct ChunkSequencer<'a> {
    data:     &'a [u8],
    capacity: usize,
    index:    usize,
    done:     bool
}

impl<'a> ChunkSequencer<'a> {
    /// Create a sequencer over `data` producing chunks sized for
    /// `layout`.
    pub fn new(data: &'a [u8], layout: RasterLayout) -> ChunkSequencer<'a> {
        ChunkSequencer {
            data,
            capacity: layout.capacity_bytes(),
            index: 0,
            done: false
        }
    }

    /// Number of chunks this sequencer will produce in total
    pub const fn chunk_count(&self) -> usize {
        self.data.len() / self.capacity + 1
    }
}

impl<'a> Iterator for ChunkSequencer<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        if self.done || self.capacity == 0 {
            return None;
        }

        let start = self.index * self.capacity;
        let take = (self.data.len() - start).min(self.capacity);
        let is_final = take < self.capacity;

        if is_final {
            self.done = true;
        }

        let chunk = Chunk {
            index:    self.index,
            bytes:    &self.data[start..start + take],
            is_final
        };

        self.index += 1;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use bytereel_core::layout::RasterLayout;

    use super::ChunkSequencer;

    fn one_byte_layout() -> RasterLayout {
        RasterLayout::new(4, 4, 2).unwrap()
    }

    #[test]
    fn test_empty_payload_still_terminates() {
        let chunks: Vec<_> = ChunkSequencer::new(&[], one_byte_layout()).collect();

        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].bytes.is_empty());
        assert!(chunks[0].is_final);
    }

    #[test]
    fn test_exact_multiple_gets_empty_terminator() {
        let chunks: Vec<_> = ChunkSequencer::new(&[1, 2, 3], one_byte_layout()).collect();

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[2].bytes, &[3]);
        assert!(!chunks[2].is_final);
        assert!(chunks[3].bytes.is_empty());
        assert!(chunks[3].is_final);
    }

    #[test]
    fn test_remainder_lands_in_final_chunk() {
        // 4x2 block grid, two bytes per raster
        let layout = RasterLayout::new(8, 4, 2).unwrap();
        let chunks: Vec<_> = ChunkSequencer::new(&[1, 2, 3], layout).collect();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].bytes, &[1, 2]);
        assert_eq!(chunks[1].bytes, &[3]);
        assert!(chunks[1].is_final);
    }

    #[test]
    fn test_indices_are_sequential() {
        let chunks: Vec<_> = ChunkSequencer::new(&[9; 5], one_byte_layout()).collect();

        for (position, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, position);
        }
    }

    #[test]
    fn test_chunk_count_matches_iteration() {
        for len in 0..9 {
            let data = vec![0xEE; len];
            let sequencer = ChunkSequencer::new(&data, one_byte_layout());

            assert_eq!(sequencer.chunk_count(), len + 1);
            assert_eq!(ChunkSequencer::new(&data, one_byte_layout()).count(), len + 1);
        }
    }
}
