//! Hand-built BMP byte streams for tests.

#![allow(dead_code)]

pub const BGRA_MASKS: [u32; 4] = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000];
pub const SRGB: u32 = 0x7352_4742;

/// Builder for the on-disk layout: file header, info header, optional
/// color header, optional palette, then rows exactly as given.
#[derive(Clone)]
pub struct BmpBuilder {
    pub width: i32,
    pub height: i32,
    pub bit_count: u16,
    pub compression: u32,
    pub planes: u16,
    pub info_size: u32,
    pub masks: [u32; 4],
    pub color_space: u32,
    pub palette: Vec<[u8; 4]>,
    /// Extra bytes between the palette and the pixels. Counted in the
    /// palette region when computing the data offset.
    pub palette_slack: usize,
    /// Stored rows in file order, padding included.
    pub rows: Vec<Vec<u8>>,
}

impl BmpBuilder {
    pub fn indexed(width: i32, height: i32, palette: Vec<[u8; 4]>) -> Self {
        Self {
            width,
            height,
            bit_count: 8,
            compression: 0,
            planes: 1,
            info_size: 40,
            masks: BGRA_MASKS,
            color_space: SRGB,
            palette,
            palette_slack: 0,
            rows: Vec::new(),
        }
    }

    pub fn bgra(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            bit_count: 32,
            compression: 0,
            planes: 1,
            info_size: 124,
            masks: BGRA_MASKS,
            color_space: SRGB,
            palette: Vec::new(),
            palette_slack: 0,
            rows: Vec::new(),
        }
    }

    /// Append a row of 8-bit indices, adding zero padding to 4 bytes.
    pub fn index_row(mut self, indices: &[u8]) -> Self {
        let mut row = indices.to_vec();
        while row.len() % 4 != 0 {
            row.push(0);
        }
        self.rows.push(row);
        self
    }

    /// Append a row of BGRA pixels.
    pub fn bgra_row(mut self, pixels: &[[u8; 4]]) -> Self {
        self.rows.push(pixels.concat());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let palette_bytes = self.palette.len() * 4 + self.palette_slack;
        let offset = 14 + self.info_size as usize + palette_bytes;
        let pixel_bytes: usize = self.rows.iter().map(Vec::len).sum();

        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&((offset + pixel_bytes) as u32).to_le_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&(offset as u32).to_le_bytes());

        out.extend_from_slice(&self.info_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&(pixel_bytes as u32).to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&(self.palette.len() as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());

        let extension = (self.info_size as usize).saturating_sub(40);
        if extension > 0 {
            let mut ext = Vec::new();
            for m in self.masks {
                ext.extend_from_slice(&m.to_le_bytes());
            }
            ext.extend_from_slice(&self.color_space.to_le_bytes());
            ext.resize(extension, 0);
            out.extend_from_slice(&ext[..extension]);
        }

        for entry in &self.palette {
            out.extend_from_slice(entry);
        }
        out.resize(offset, 0);
        for row in &self.rows {
            out.extend_from_slice(row);
        }
        out
    }
}

pub const BLACK: [u8; 4] = [0, 0, 0, 0];
pub const WHITE: [u8; 4] = [255, 255, 255, 0];
