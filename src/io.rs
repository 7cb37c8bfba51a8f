//! Decoding from readers and files.

use std::io::Read;
use std::path::Path;
use std::vec::Vec;

use enough::Stop;

use crate::decode::{DecodeOutput, DecodeRequest};
use crate::error::BitmapError;
use crate::limits::Limits;

/// Decode a BMP stream to BGRA.
///
/// The two signature bytes are read and checked first; non-BMP input is
/// rejected without reading further. With `Limits::max_input_bytes` set,
/// reading stops one byte past the limit.
pub fn decode_reader<R: Read>(
    mut reader: R,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<DecodeOutput, BitmapError> {
    let max_input = limits.and_then(|l| l.max_input_bytes);
    let data = read_checked(&mut reader, max_input)?;
    let mut request = DecodeRequest::new(&data);
    if let Some(limits) = limits {
        request = request.with_limits(limits);
    }
    request.decode(stop)
}

/// Open `path` and decode it to BGRA. The file is closed on return.
pub fn decode_file(
    path: impl AsRef<Path>,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<DecodeOutput, BitmapError> {
    let file = std::fs::File::open(path)?;
    decode_reader(std::io::BufReader::new(file), limits, stop)
}

/// Read a whole stream after confirming it starts with the BMP signature.
pub(crate) fn read_checked<R: Read>(
    reader: &mut R,
    max_input: Option<u64>,
) -> Result<Vec<u8>, BitmapError> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => BitmapError::UnexpectedEof,
        _ => BitmapError::Io(e),
    })?;
    if &magic != b"BM" {
        return Err(BitmapError::UnrecognizedFormat);
    }
    let mut data = Vec::from(magic);
    match max_input {
        Some(max) => {
            let rest = max.saturating_sub(data.len() as u64).saturating_add(1);
            reader.take(rest).read_to_end(&mut data)?;
            if data.len() as u64 > max {
                return Err(BitmapError::LimitExceeded(format!(
                    "input size exceeds limit {max}"
                )));
            }
        }
        None => {
            reader.read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Counts bytes handed out.
    struct Counting<R> {
        inner: R,
        read: usize,
    }

    impl<R: Read> Read for Counting<R> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.inner.read(buf)?;
            self.read += n;
            Ok(n)
        }
    }

    #[test]
    fn wrong_magic_reads_two_bytes() {
        let mut reader = Counting {
            inner: Cursor::new(b"GIF89a........".to_vec()),
            read: 0,
        };
        let err = read_checked(&mut reader, None).unwrap_err();
        assert!(matches!(err, BitmapError::UnrecognizedFormat));
        assert_eq!(reader.read, 2);
    }

    #[test]
    fn input_limit_bounds_the_read() {
        let mut stream = b"BM".to_vec();
        stream.resize(100, 0);
        let mut reader = Counting {
            inner: Cursor::new(stream),
            read: 0,
        };
        let err = read_checked(&mut reader, Some(10)).unwrap_err();
        assert!(matches!(err, BitmapError::LimitExceeded(_)));
        assert_eq!(reader.read, 11);

        let data = read_checked(&mut Cursor::new(b"BM\x01\x02".to_vec()), Some(4)).unwrap();
        assert_eq!(data, b"BM\x01\x02");
    }

    #[test]
    fn empty_stream_is_eof() {
        let err = read_checked(&mut Cursor::new(Vec::<u8>::new()), None).unwrap_err();
        assert!(matches!(err, BitmapError::UnexpectedEof));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = decode_file("/nonexistent/zenbmp/missing.bmp", None, enough::Unstoppable).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Io);
    }
}
