//! Transparent pass-through detection.
//!
//! [`DetectionStream`] buffers the first `sample_size` bytes of a source,
//! runs detection against that prefix, then replays the prefix followed by
//! the rest of the source. Callers get the detection verdict out-of-band and
//! an intact byte stream to keep processing.

use crate::catalog::FileTypeResult;
use crate::detector::FormatDetector;
use crate::error::Result;
use std::io::{self, Read};

/// A [`Read`] that yields the original bytes unchanged, with the detected
/// file type attached.
pub struct DetectionStream<R: Read> {
    prefix: Vec<u8>,
    prefix_pos: usize,
    inner: R,
    file_type: Option<FileTypeResult>,
}

impl<R: Read> DetectionStream<R> {
    /// Buffer and detect with default options.
    pub fn new(inner: R) -> Result<Self> {
        Self::with_detector(&FormatDetector::default(), inner)
    }

    /// Buffer and detect with the given detector's options and registry.
    ///
    /// Running out of source during the prefix read is not an error; the
    /// detection simply sees the bytes that exist.
    pub fn with_detector(detector: &FormatDetector, mut inner: R) -> Result<Self> {
        let sample_size = detector.options().effective_sample_size();
        let mut prefix = Vec::with_capacity(sample_size);
        let mut chunk = [0u8; 4096];
        while prefix.len() < sample_size {
            let step = chunk.len().min(sample_size - prefix.len());
            let got = inner.read(&mut chunk[..step])?;
            if got == 0 {
                break;
            }
            prefix.extend_from_slice(&chunk[..got]);
        }

        let file_type = detector.from_buffer(&prefix)?;
        Ok(Self { prefix, prefix_pos: 0, inner, file_type })
    }

    /// The detection verdict for this stream, if any.
    pub fn file_type(&self) -> Option<&FileTypeResult> {
        self.file_type.as_ref()
    }
}

impl<R: Read> Read for DetectionStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.prefix_pos < self.prefix.len() {
            let n = buf.len().min(self.prefix.len() - self.prefix_pos);
            buf[..n].copy_from_slice(&self.prefix[self.prefix_pos..self.prefix_pos + n]);
            self.prefix_pos += n;
            return Ok(n);
        }
        self.inner.read(buf)
    }
}
