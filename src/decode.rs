use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use enough::Stop;

use crate::bmp::headers::{BitDepth, BmpHeaders};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::report::BmpSummary;

/// Decoded image. Rows are top-down, 4 bytes per pixel.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Depth of the source pixels, not of the output.
    pub bit_depth: BitDepth,
    pub layout: PixelLayout,
    headers: BmpHeaders,
}

impl DecodeOutput {
    pub(crate) fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        bit_depth: BitDepth,
        layout: PixelLayout,
        headers: BmpHeaders,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            bit_depth,
            layout,
            headers,
        }
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per output row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.layout.bytes_per_pixel()
    }

    /// Headers as parsed from the file.
    pub fn headers(&self) -> &BmpHeaders {
        &self.headers
    }

    /// Human-readable header report. See [`BmpSummary`].
    pub fn summary(&self) -> BmpSummary<'_> {
        BmpSummary::new(&self.headers)
    }

    /// Emit [`Self::summary`] at debug level through the `log` facade.
    #[cfg(feature = "log")]
    pub fn log_summary(&self) {
        log::debug!("{}", self.summary());
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`crate::BitmapError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], crate::BitmapError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(crate::BitmapError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Returns [`crate::BitmapError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(
        &self,
    ) -> Result<imgref::ImgRef<'_, P>, crate::BitmapError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    ///
    /// Returns [`crate::BitmapError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, crate::BitmapError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Decode configuration: resource limits and output channel order.
///
/// ```no_run
/// use zenbmp::{DecodeRequest, Limits, PixelLayout, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(64 << 20), ..Limits::default() };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_layout(PixelLayout::Rgba8)
///     .decode(Unstoppable)?;
/// # Ok::<(), zenbmp::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    layout: PixelLayout,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            layout: PixelLayout::Bgra8,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Output channel order. Defaults to [`PixelLayout::Bgra8`].
    pub fn with_layout(mut self, layout: PixelLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, BitmapError> {
        crate::bmp::decode(self.data, self.limits, self.layout, &stop)
    }
}

/// Header-level facts about a BMP file, available without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: BitDepth,
    pub palette_len: usize,
    pub headers: BmpHeaders,
}

impl BmpInfo {
    /// Parse and validate all headers, the palette and the color header.
    /// Pixel data is not read.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let (headers, bit_depth) = crate::bmp::parse_headers(data)?;
        Ok(Self {
            width: headers.info.width_px(),
            height: headers.info.height_px(),
            bit_depth,
            palette_len: headers.palette_len,
            headers,
        })
    }
}
