//! Pixel decoders for 8-bit indexed and 32-bit BGRA scanlines.
//!
//! Both read bottom-up storage and write top-down BGRA: stored row `i`
//! lands in output row `height - 1 - i`.

use enough::Stop;

use super::cursor::Cursor;
use super::palette::Palette;
use super::utils::row_padding;
use crate::error::BitmapError;

/// Output bytes per pixel for both depths.
pub(crate) const OUT_BPP: usize = 4;

/// Expand palette indices into BGRA with opaque alpha.
pub(crate) fn decode_indexed(
    c: &mut Cursor<'_>,
    offset_data: usize,
    width: usize,
    palette: &Palette,
    buf: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    c.set_position(offset_data)?;
    let padding = row_padding(width);

    for (row_idx, out_row) in buf.rchunks_exact_mut(width * OUT_BPP).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let indices = c.read_slice(width)?;
        for (&idx, px) in indices.iter().zip(out_row.chunks_exact_mut(OUT_BPP)) {
            let entry = palette.get(idx)?;
            px[0] = entry.blue;
            px[1] = entry.green;
            px[2] = entry.red;
            px[3] = 255;
        }
        c.skip(padding)?;
    }
    Ok(())
}

/// Copy stored BGRA pixels verbatim.
///
/// A row of 4-byte pixels is already 4-aligned, so stored rows carry no
/// padding and the pixel region is one contiguous block of `buf.len()` bytes.
pub(crate) fn decode_bgra(
    c: &mut Cursor<'_>,
    offset_data: usize,
    width: usize,
    buf: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    c.set_position(offset_data)?;
    let row_bytes = width * OUT_BPP;
    debug_assert_eq!(row_padding(row_bytes), 0);

    let block = c.read_slice(buf.len())?;
    for (row_idx, (out_row, in_row)) in buf
        .rchunks_exact_mut(row_bytes)
        .zip(block.chunks_exact(row_bytes))
        .enumerate()
    {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out_row.copy_from_slice(in_row);
    }
    Ok(())
}
