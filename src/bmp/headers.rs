//! Fixed-layout BMP headers: file header, info header, and the extended
//! color header carried by 32-bit images.
//!
//! All multi-byte fields are little-endian and packed without padding.

use super::cursor::Cursor;
use crate::error::BitmapError;

/// Size of the file header on disk.
pub const FILE_HEADER_SIZE: u32 = 14;
/// Size of the `BITMAPINFOHEADER` layout this decoder reads.
pub const INFO_HEADER_SIZE: u32 = 40;
/// Masks, color-space tag and 64 reserved bytes.
pub const COLOR_HEADER_SIZE: u32 = 84;

const SIGNATURE: [u8; 2] = *b"BM";

/// `BI_RGB`, the only accepted compression code.
const COMPRESSION_NONE: u32 = 0;

/// The 14-byte header that opens every BMP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset from the start of the file to the first pixel byte.
    pub offset_data: u32,
}

impl FileHeader {
    /// Read the file header. The signature is checked before any other
    /// field is touched.
    pub(crate) fn parse(c: &mut Cursor<'_>) -> Result<Self, BitmapError> {
        let signature = c.read_fixed_bytes::<2>()?;
        if signature != SIGNATURE {
            return Err(BitmapError::UnrecognizedFormat);
        }
        Ok(Self {
            signature,
            file_size: c.get_u32_le()?,
            reserved1: c.get_u16_le()?,
            reserved2: c.get_u16_le()?,
            offset_data: c.get_u32_le()?,
        })
    }

    /// Signature as the little-endian `u16` BMP tools usually print (`0x4D42`).
    pub fn file_type(&self) -> u16 {
        u16::from_le_bytes(self.signature)
    }
}

/// Source pixel depths this decoder accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    /// One palette index per pixel.
    Indexed8,
    /// Four bytes per pixel, B G R A.
    Bgra32,
}

impl BitDepth {
    pub fn bits(self) -> u16 {
        match self {
            Self::Indexed8 => 8,
            Self::Bgra32 => 32,
        }
    }

    /// Stored bytes per pixel, before row padding.
    pub fn bytes_per_pixel(self) -> usize {
        usize::from(self.bits() / 8)
    }
}

/// The `BITMAPINFOHEADER` fields. Later header versions extend this layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    /// Declared size of the whole info header, extensions included.
    pub size: u32,
    pub width: i32,
    /// Positive for bottom-up storage, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    /// Not trusted: the palette length is derived from the data offset.
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub(crate) fn parse(c: &mut Cursor<'_>) -> Result<Self, BitmapError> {
        Ok(Self {
            size: c.get_u32_le()?,
            width: c.get_i32_le()?,
            height: c.get_i32_le()?,
            planes: c.get_u16_le()?,
            bit_count: c.get_u16_le()?,
            compression: c.get_u32_le()?,
            size_image: c.get_u32_le()?,
            x_pixels_per_meter: c.get_i32_le()?,
            y_pixels_per_meter: c.get_i32_le()?,
            colors_used: c.get_u32_le()?,
            colors_important: c.get_u32_le()?,
        })
    }

    /// Structural checks that must pass before any palette or pixel read.
    pub(crate) fn validate(&self) -> Result<BitDepth, BitmapError> {
        if self.size < INFO_HEADER_SIZE {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "BMP info header size {} is smaller than {INFO_HEADER_SIZE}",
                self.size
            )));
        }
        let depth = match self.bit_count {
            8 => BitDepth::Indexed8,
            32 => BitDepth::Bgra32,
            other => {
                return Err(BitmapError::UnsupportedVariant(alloc::format!(
                    "BMP bit depth {other} unsupported (expected 8 or 32)"
                )));
            }
        };
        if self.compression != COMPRESSION_NONE {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "BMP compression {} unsupported (only uncompressed)",
                self.compression
            )));
        }
        if self.height < 0 {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "top-down BMP (height {}) unsupported, origin must be bottom-left",
                self.height
            )));
        }
        if self.height == 0 {
            return Err(BitmapError::InvalidHeader("BMP height is zero".into()));
        }
        if self.width <= 0 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP width {} is not positive",
                self.width
            )));
        }
        if self.planes != 1 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP planes field is {}, expected 1",
                self.planes
            )));
        }
        Ok(depth)
    }

    /// Width as validated. Only meaningful after [`Self::validate`].
    pub(crate) fn width_px(&self) -> u32 {
        self.width.unsigned_abs()
    }

    pub(crate) fn height_px(&self) -> u32 {
        self.height.unsigned_abs()
    }
}

/// Channel masks and color-space tag following the info header of a
/// 32-bit image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorHeader {
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
    pub color_space_type: u32,
}

impl ColorHeader {
    /// B, G, R, A byte order, sRGB.
    pub const BGRA_SRGB: Self = Self {
        red_mask: 0x00FF_0000,
        green_mask: 0x0000_FF00,
        blue_mask: 0x0000_00FF,
        alpha_mask: 0xFF00_0000,
        color_space_type: 0x7352_4742,
    };

    /// Read the color header directly after the info header and require it
    /// to equal [`Self::BGRA_SRGB`].
    pub(crate) fn read_validated(
        c: &mut Cursor<'_>,
        info: &InfoHeader,
    ) -> Result<Self, BitmapError> {
        if info.size < INFO_HEADER_SIZE + COLOR_HEADER_SIZE {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "missing bit-mask information (info header size {})",
                info.size
            )));
        }
        c.set_position((FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize)?;
        let header = Self {
            red_mask: c.get_u32_le()?,
            green_mask: c.get_u32_le()?,
            blue_mask: c.get_u32_le()?,
            alpha_mask: c.get_u32_le()?,
            color_space_type: c.get_u32_le()?,
        };
        // Endpoints, gamma, intent and ICC fields are not interpreted.
        c.skip(64)?;
        header.check()?;
        Ok(header)
    }

    fn check(&self) -> Result<(), BitmapError> {
        let expected = Self::BGRA_SRGB;
        let masks = [
            self.red_mask,
            self.green_mask,
            self.blue_mask,
            self.alpha_mask,
        ];
        let expected_masks = [
            expected.red_mask,
            expected.green_mask,
            expected.blue_mask,
            expected.alpha_mask,
        ];
        if masks != expected_masks {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "unexpected channel layout: masks R={:#010X} G={:#010X} B={:#010X} A={:#010X}, expected BGRA",
                self.red_mask,
                self.green_mask,
                self.blue_mask,
                self.alpha_mask
            )));
        }
        if self.color_space_type != expected.color_space_type {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "unexpected color space {:#010X}, expected sRGB",
                self.color_space_type
            )));
        }
        Ok(())
    }
}

/// Everything parsed ahead of the pixel data, kept for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
    /// Present for 32-bit images.
    pub color: Option<ColorHeader>,
    /// Number of palette entries, 0 for 32-bit images.
    pub palette_len: usize,
}
