//! Uncompressed BMP decoding (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::DecodeRequest`], etc.
//!
//! Pass order: file header, info header, structural validation, color
//! header (32-bit) or palette (8-bit), limits, pixel region size against
//! the input, pixels. The first failing step ends the decode. Nothing is
//! allocated for pixels until every check has passed.

mod cursor;
mod decode;
pub mod headers;
mod palette;
mod utils;

pub use palette::PaletteEntry;

use crate::decode::DecodeOutput;
use crate::error::BitmapError;
use crate::limits::{Limits, check_pixel_region};
use crate::pixel::{PixelLayout, swap_red_blue};
use alloc::vec;
use cursor::Cursor;
use enough::Stop;
use headers::{BitDepth, BmpHeaders, ColorHeader, FileHeader, InfoHeader};
use palette::Palette;

/// What the pixel decoder needs beyond the headers.
enum Source {
    Indexed(Palette),
    Bgra,
}

impl Source {
    fn depth(&self) -> BitDepth {
        match self {
            Self::Indexed(_) => BitDepth::Indexed8,
            Self::Bgra => BitDepth::Bgra32,
        }
    }
}

struct Parsed<'a> {
    cursor: Cursor<'a>,
    headers: BmpHeaders,
    source: Source,
}

fn parse(data: &[u8]) -> Result<Parsed<'_>, BitmapError> {
    let mut cursor = Cursor::new(data);
    let file = FileHeader::parse(&mut cursor)?;
    let info = InfoHeader::parse(&mut cursor)?;
    let depth = info.validate()?;

    let (color, source) = match depth {
        BitDepth::Bgra32 => (
            Some(ColorHeader::read_validated(&mut cursor, &info)?),
            Source::Bgra,
        ),
        BitDepth::Indexed8 => (
            None,
            Source::Indexed(Palette::load(&mut cursor, &file, &info)?),
        ),
    };

    let palette_len = match &source {
        Source::Indexed(palette) => palette.len(),
        Source::Bgra => 0,
    };
    let headers = BmpHeaders {
        file,
        info,
        color,
        palette_len,
    };
    Ok(Parsed {
        cursor,
        headers,
        source,
    })
}

/// Parse and validate everything ahead of the pixel data.
pub(crate) fn parse_headers(data: &[u8]) -> Result<(BmpHeaders, BitDepth), BitmapError> {
    let parsed = parse(data)?;
    let depth = parsed.source.depth();
    Ok((parsed.headers, depth))
}

/// Decode to top-down pixels in `layout` order.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<DecodeOutput, BitmapError> {
    let Parsed {
        mut cursor,
        headers,
        source,
    } = parse(data)?;

    let width = headers.info.width_px();
    let height = headers.info.height_px();
    let out_bytes = output_buf_size(width, height)?;
    check_limits(limits, data.len(), width, height, out_bytes)?;
    let stride = utils::checked_stride(width as usize, source.depth().bytes_per_pixel())
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    check_pixel_region(data.len(), headers.file.offset_data, stride, width, height)?;
    stop.check()?;

    let mut buf = vec![0u8; out_bytes];
    let offset_data = headers.file.offset_data as usize;
    match &source {
        Source::Indexed(palette) => decode::decode_indexed(
            &mut cursor,
            offset_data,
            width as usize,
            palette,
            &mut buf,
            stop,
        )?,
        Source::Bgra => {
            decode::decode_bgra(&mut cursor, offset_data, width as usize, &mut buf, stop)?
        }
    }

    if layout == PixelLayout::Rgba8 {
        swap_red_blue(&mut buf);
    }

    Ok(DecodeOutput::new(
        buf,
        width,
        height,
        source.depth(),
        layout,
        headers,
    ))
}

/// Output bytes for `width * height` pixels. Anything a `Vec` cannot hold
/// is `DimensionsTooLarge`.
fn output_buf_size(width: u32, height: u32) -> Result<usize, BitmapError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(decode::OUT_BPP))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}

fn check_limits(
    limits: Option<&Limits>,
    input_len: usize,
    width: u32,
    height: u32,
    out_bytes: usize,
) -> Result<(), BitmapError> {
    if let Some(limits) = limits {
        limits.check_input(input_len as u64)?;
        limits.check_frame(width, height, out_bytes)?;
    }
    Ok(())
}
