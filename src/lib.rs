//! # zenbmp
//!
//! Strict decoder for uncompressed Windows bitmaps.
//!
//! ## Supported Input
//!
//! - **8-bit palette-indexed** BMP, `BITMAPINFOHEADER` or later, with the
//!   palette length derived from the pixel data offset
//! - **32-bit BGRA** BMP with a `BITMAPV5HEADER`-sized info header whose
//!   channel masks are B, G, R, A and whose color space is sRGB
//!
//! Only bottom-up storage (positive height) and compression 0 are accepted.
//!
//! ## Output
//!
//! Every decode produces `width * height * 4` bytes, rows top-down, in
//! BGRA order by default (or RGBA on request). Palette pixels get alpha 255;
//! 32-bit pixels keep their stored alpha.
//!
//! ## Non-Goals
//!
//! - RLE compression, bit depths other than 8 and 32
//! - Encoding
//! - Color management beyond requiring sRGB
//! - Top-down (negative height) files
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{BmpInfo, Unstoppable, decode_bmp};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Read the headers without decoding pixels
//! let info = BmpInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.bit_depth);
//!
//! let decoded = decode_bmp(data, Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), decoded.width as usize * decoded.height as usize * 4);
//! println!("{}", decoded.summary());
//! # Ok::<(), zenbmp::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod limits;
mod pixel;
mod report;

pub mod bmp;

mod decode;
#[cfg(feature = "std")]
mod io;

// Re-exports
pub use bmp::PaletteEntry;
pub use bmp::headers::{BitDepth, BmpHeaders, ColorHeader, FileHeader, InfoHeader};
pub use decode::{BmpInfo, DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::{BitmapError, ErrorKind};
#[cfg(feature = "std")]
pub use io::{decode_file, decode_reader};
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::PixelLayout;
pub use report::BmpSummary;

/// Decode a BMP file to top-down BGRA pixels.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode a BMP file to top-down RGBA pixels.
pub fn decode_bmp_rgba(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, BitmapError> {
    DecodeRequest::new(data)
        .with_layout(PixelLayout::Rgba8)
        .decode(stop)
}
