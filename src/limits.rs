//! Caller-imposed bounds, and the input-size check every decode runs
//! before it allocates the output buffer.

use alloc::format;

use crate::error::BitmapError;

/// Bounds on what a decode may read or allocate.
///
/// All fields default to `None` (no limit). Independently of these, a
/// declared image whose stored rows do not fit in the input is rejected
/// before its output buffer exists.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded 4-byte-per-pixel buffer.
    pub max_output_bytes: Option<u64>,
    /// Maximum size of the encoded file. [`crate::decode_reader`] stops
    /// reading one byte past this.
    pub max_input_bytes: Option<u64>,
}

impl Limits {
    /// Check declared dimensions and the output buffer they need.
    pub(crate) fn check_frame(
        &self,
        width: u32,
        height: u32,
        out_bytes: usize,
    ) -> Result<(), BitmapError> {
        bound("width", u64::from(width), self.max_width.map(u64::from))?;
        bound("height", u64::from(height), self.max_height.map(u64::from))?;
        bound(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;
        bound("output size", out_bytes as u64, self.max_output_bytes)
    }

    pub(crate) fn check_input(&self, len: u64) -> Result<(), BitmapError> {
        bound("input size", len, self.max_input_bytes)
    }
}

fn bound(what: &str, value: u64, limit: Option<u64>) -> Result<(), BitmapError> {
    match limit {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

/// Reject a header whose stored rows run past the end of the input.
///
/// `stride` is the stored bytes per row, padding included. Overflow while
/// sizing the region is `DimensionsTooLarge`.
pub(crate) fn check_pixel_region(
    input_len: usize,
    offset_data: u32,
    stride: usize,
    width: u32,
    height: u32,
) -> Result<(), BitmapError> {
    let end = stride
        .checked_mul(height as usize)
        .and_then(|rows| rows.checked_add(offset_data as usize))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if input_len < end {
        return Err(BitmapError::UnexpectedEof);
    }
    Ok(())
}
