//! Color table of 8-bit images.

use alloc::vec::Vec;

use super::cursor::Cursor;
use super::headers::{FILE_HEADER_SIZE, FileHeader, InfoHeader};
use crate::error::BitmapError;

const ENTRY_SIZE: i64 = 4;

/// One color table entry as stored on disk: B, G, R, reserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaletteEntry {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

#[derive(Debug)]
pub(crate) struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Load the table that sits between the info header and the pixel data.
    ///
    /// The entry count comes from the gap between those two offsets; the
    /// `colors_used` field is ignored.
    pub(crate) fn load(
        c: &mut Cursor<'_>,
        file: &FileHeader,
        info: &InfoHeader,
    ) -> Result<Self, BitmapError> {
        let palette_bytes = i64::from(file.offset_data)
            - i64::from(info.size)
            - i64::from(FILE_HEADER_SIZE);
        if palette_bytes <= 0 || palette_bytes % ENTRY_SIZE != 0 {
            return Err(BitmapError::InvalidData(alloc::format!(
                "invalid palette size {palette_bytes} bytes (data offset {}, info header size {})",
                file.offset_data,
                info.size
            )));
        }
        let count = (palette_bytes / ENTRY_SIZE) as usize;

        c.set_position(FILE_HEADER_SIZE as usize + info.size as usize)?;
        let raw = c.read_slice(count * ENTRY_SIZE as usize)?;
        let entries = raw
            .chunks_exact(ENTRY_SIZE as usize)
            .map(|e| PaletteEntry {
                blue: e[0],
                green: e[1],
                red: e[2],
                reserved: e[3],
            })
            .collect();
        Ok(Self { entries })
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Bounds-checked lookup.
    pub(crate) fn get(&self, index: u8) -> Result<PaletteEntry, BitmapError> {
        self.entries
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| {
                BitmapError::InvalidData(alloc::format!(
                    "palette index {index} out of range (palette has {} entries)",
                    self.entries.len()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn headers(offset_data: u32, info_size: u32) -> (FileHeader, InfoHeader) {
        let file = FileHeader {
            signature: *b"BM",
            file_size: 0,
            reserved1: 0,
            reserved2: 0,
            offset_data,
        };
        let info = InfoHeader {
            size: info_size,
            width: 1,
            height: 1,
            planes: 1,
            bit_count: 8,
            compression: 0,
            size_image: 0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        };
        (file, info)
    }

    #[test]
    fn loads_entries_in_file_order() {
        let mut data = vec![0u8; 54];
        data.extend_from_slice(&[1, 2, 3, 0, 4, 5, 6, 0]);
        let (file, info) = headers(62, 40);
        let pal = Palette::load(&mut Cursor::new(&data), &file, &info).unwrap();
        assert_eq!(pal.len(), 2);
        assert_eq!(
            pal.get(1).unwrap(),
            PaletteEntry {
                blue: 4,
                green: 5,
                red: 6,
                reserved: 0
            }
        );
        assert!(matches!(pal.get(2), Err(BitmapError::InvalidData(_))));
    }

    #[test]
    fn size_not_multiple_of_four_is_corrupt() {
        let data = vec![0u8; 64];
        let (file, info) = headers(59, 40);
        let err = Palette::load(&mut Cursor::new(&data), &file, &info).unwrap_err();
        assert!(matches!(err, BitmapError::InvalidData(_)));
    }

    #[test]
    fn negative_or_empty_region_is_corrupt() {
        let data = vec![0u8; 64];
        for offset in [10, 54] {
            let (file, info) = headers(offset, 40);
            let err = Palette::load(&mut Cursor::new(&data), &file, &info).unwrap_err();
            assert!(matches!(err, BitmapError::InvalidData(_)), "{offset}");
        }
    }

    #[test]
    fn truncated_table_is_eof() {
        let data = vec![0u8; 58];
        let (file, info) = headers(62, 40);
        let err = Palette::load(&mut Cursor::new(&data), &file, &info).unwrap_err();
        assert!(matches!(err, BitmapError::UnexpectedEof));
    }
}
