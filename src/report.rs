//! Header report for callers that want to print or log what was decoded.
//!
//! Nothing in the decode path writes diagnostics; callers opt in after a
//! successful decode through [`crate::DecodeOutput::summary`] or
//! [`crate::BmpInfo`].

use core::fmt;

use crate::bmp::headers::BmpHeaders;

/// Multi-line description of a file's headers.
///
/// The first line is a compact `key=value` summary; the rest lists the
/// individual fields in decimal and hex.
#[derive(Clone, Copy, Debug)]
pub struct BmpSummary<'a> {
    headers: &'a BmpHeaders,
}

impl<'a> BmpSummary<'a> {
    pub fn new(headers: &'a BmpHeaders) -> Self {
        Self { headers }
    }
}

impl fmt::Display for BmpSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = &self.headers.file;
        let info = &self.headers.info;
        let [c0, c1] = file.signature;

        writeln!(
            f,
            "bpp={} dib={} off={} palette_entries={}",
            info.bit_count, info.size, file.offset_data, self.headers.palette_len
        )?;
        writeln!(f, "DIB header size: {0} ({0:#010X})", info.size)?;
        writeln!(f, "Planes: {0} ({0:#06X})", info.planes)?;
        writeln!(f, "Bit count: {0} ({0:#06X})", info.bit_count)?;
        writeln!(f, "File type: {:#06X} ({} {})", file.file_type(), c0 as char, c1 as char)?;
        writeln!(f, "File size: {0} bytes ({0:#010X})", file.file_size)?;
        writeln!(f, "Width: {}", info.width)?;
        write!(f, "Height: {}", info.height)?;
        if let Some(color) = &self.headers.color {
            write!(
                f,
                "\nMasks: R={:#010X} G={:#010X} B={:#010X} A={:#010X} color space={:#010X}",
                color.red_mask,
                color.green_mask,
                color.blue_mask,
                color.alpha_mask,
                color.color_space_type
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::headers::{FileHeader, InfoHeader};
    use alloc::string::ToString;

    #[test]
    fn summary_lists_key_fields() {
        let headers = BmpHeaders {
            file: FileHeader {
                signature: *b"BM",
                file_size: 1086,
                reserved1: 0,
                reserved2: 0,
                offset_data: 1078,
            },
            info: InfoHeader {
                size: 40,
                width: 4,
                height: 2,
                planes: 1,
                bit_count: 8,
                compression: 0,
                size_image: 8,
                x_pixels_per_meter: 0,
                y_pixels_per_meter: 0,
                colors_used: 256,
                colors_important: 0,
            },
            color: None,
            palette_len: 256,
        };
        let text = BmpSummary::new(&headers).to_string();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("bpp=8 dib=40 off=1078 palette_entries=256")
        );
        assert!(text.contains("File type: 0x4D42 (B M)"));
        assert!(text.contains("File size: 1086 bytes (0x0000043E)"));
        assert!(text.ends_with("Height: 2"));
    }
}
