//! Scanline alignment arithmetic.
//!
//! BMP scanlines are always padded to a multiple of 4 bytes.

const ROW_ALIGN: usize = 4;

/// Smallest multiple of 4 that is >= `row_bytes`.
pub(crate) const fn aligned_stride(row_bytes: usize) -> usize {
    row_bytes.div_ceil(ROW_ALIGN) * ROW_ALIGN
}

/// Stored bytes per row for `width` pixels of `bytes_per_pixel`, or `None`
/// if the row size overflows.
pub(crate) fn checked_stride(width: usize, bytes_per_pixel: usize) -> Option<usize> {
    width
        .checked_mul(bytes_per_pixel)?
        .checked_next_multiple_of(ROW_ALIGN)
}

/// Filler bytes that follow `row_bytes` of pixel data in each stored row.
pub(crate) const fn row_padding(row_bytes: usize) -> usize {
    aligned_stride(row_bytes) - row_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_rounds_up_to_four() {
        assert_eq!(aligned_stride(0), 0);
        assert_eq!(aligned_stride(1), 4);
        assert_eq!(aligned_stride(4), 4);
        assert_eq!(aligned_stride(5), 8);
        assert_eq!(aligned_stride(12), 12);
        assert_eq!(aligned_stride(13), 16);
    }

    #[test]
    fn padding_law_holds_for_both_depths() {
        for width in 1..64usize {
            for bytes_per_pixel in [1usize, 4] {
                let row = width * bytes_per_pixel;
                let pad = row_padding(row);
                assert!(pad < 4);
                assert_eq!((row + pad) % 4, 0, "width {width} bpp {bytes_per_pixel}");
            }
            assert_eq!(row_padding(width), (4 - width % 4) % 4);
            assert_eq!(row_padding(width * 4), 0);
        }
    }

    #[test]
    fn checked_stride_matches_and_detects_overflow() {
        assert_eq!(checked_stride(3, 1), Some(4));
        assert_eq!(checked_stride(3, 4), Some(12));
        assert_eq!(checked_stride(usize::MAX / 2, 4), None);
        assert_eq!(checked_stride(usize::MAX - 1, 1), None);
    }
}
