//! Chunk partitioning arithmetic for N-way task splits.
//!
//! Pure index arithmetic: no allocation, no error conditions. Callers
//! guarantee `n_chunks >= 1`.

/// Number of elements in a full chunk, given `n_chunks` across `n_elements`.
///
/// Integer ceiling, so the union of all chunks always reaches `n_elements`.
pub fn chunk_size(n_chunks: usize, n_elements: usize) -> usize {
    n_elements.div_ceil(n_chunks)
}

/// Half-open range `[start, end)` assigned to `chunk` of `n_chunks` chunks
/// over `n_elements` elements.
///
/// Both bounds are clamped to `n_elements`: when the element count does not
/// divide evenly, trailing chunks are shorter or empty, never longer and
/// never inverted. The union over all chunk indices is exactly
/// `[0, n_elements)` with no overlap.
pub fn chunk_range(chunk: usize, n_chunks: usize, n_elements: usize) -> (usize, usize) {
    let size = chunk_size(n_chunks, n_elements);
    let start = std::cmp::min(chunk.saturating_mul(size), n_elements);
    let end = std::cmp::min(start + size, n_elements);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_size_is_ceiling() {
        assert_eq!(chunk_size(2, 10), 5);
        assert_eq!(chunk_size(3, 10), 4);
        assert_eq!(chunk_size(4, 2), 1);
        assert_eq!(chunk_size(1, 0), 0);
    }

    #[test]
    fn test_even_division() {
        assert_eq!(chunk_range(0, 2, 10), (0, 5));
        assert_eq!(chunk_range(1, 2, 10), (5, 10));
    }

    #[test]
    fn test_uneven_division_shortens_last_chunk() {
        // 10 elements over 3 chunks: sizes 4, 4, 2
        assert_eq!(chunk_range(0, 3, 10), (0, 4));
        assert_eq!(chunk_range(1, 3, 10), (4, 8));
        assert_eq!(chunk_range(2, 3, 10), (8, 10));
    }

    #[test]
    fn test_more_chunks_than_elements() {
        // 2 elements over 4 chunks: sizes 1, 1, 0, 0
        assert_eq!(chunk_range(0, 4, 2), (0, 1));
        assert_eq!(chunk_range(1, 4, 2), (1, 2));
        assert_eq!(chunk_range(2, 4, 2), (2, 2));
        assert_eq!(chunk_range(3, 4, 2), (2, 2));
    }

    #[test]
    fn test_union_covers_exactly_once() {
        for n_chunks in 1..=8 {
            for n_elements in 0..=40 {
                let mut next_start = 0;
                let full = chunk_size(n_chunks, n_elements);
                for chunk in 0..n_chunks {
                    let (start, end) = chunk_range(chunk, n_chunks, n_elements);
                    assert_eq!(start, next_start, "gap or overlap at chunk {chunk}");
                    assert!(end >= start);
                    assert!(end - start <= full, "chunk longer than ceil size");
                    next_start = end;
                }
                assert_eq!(next_start, n_elements);
            }
        }
    }

    #[test]
    fn test_zero_elements() {
        for chunk in 0..4 {
            assert_eq!(chunk_range(chunk, 4, 0), (0, 0));
        }
    }
}
