use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Coarse classification of a [`BitmapError`].
///
/// Every decode failure is permanent: the same input fails the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input could not be read, or ended early.
    Io,
    /// The input is not a BMP file.
    Format,
    /// A BMP file this decoder does not handle.
    Unsupported,
    /// A BMP file whose structure contradicts itself.
    Corrupt,
    /// A caller-imposed resource limit was hit.
    Limit,
    /// The caller's stop token fired.
    Cancelled,
}

impl BitmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedEof => ErrorKind::Io,
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorKind::Io,
            Self::UnrecognizedFormat => ErrorKind::Format,
            Self::UnsupportedVariant(_) => ErrorKind::Unsupported,
            Self::InvalidHeader(_) | Self::InvalidData(_) => ErrorKind::Corrupt,
            Self::DimensionsTooLarge { .. } | Self::LimitExceeded(_) => ErrorKind::Limit,
            Self::LayoutMismatch { .. } => ErrorKind::Unsupported,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
