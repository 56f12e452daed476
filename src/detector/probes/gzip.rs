//! Transparent gzip descent.
//!
//! A gzip member may wrap anything; the one distinction the catalogue makes
//! is a gzipped TAR. The probe inflates the stream and runs a full nested
//! detection over the decompressed bytes: `tar` inside upgrades the verdict
//! to `tar.gz`, anything else (including inflate trouble) stays plain `gz`.

use crate::catalog::FileTypeResult;
use crate::detector::FormatDetector;
use crate::error::{DetectError, Result};
use crate::tokenizer::{ReadTokenizer, Tokenizer};
use flate2::read::GzDecoder;
use std::io;
use tracing::debug;

/// Adapt a tokenizer to [`io::Read`] so decompressors can consume it.
/// Cancellation surfaces as `ErrorKind::Interrupted` and is restored to
/// [`DetectError::Aborted`] on the way back out.
pub(crate) struct TokenizerReader<'a> {
    tok: &'a mut dyn Tokenizer,
}

impl<'a> TokenizerReader<'a> {
    pub(crate) fn new(tok: &'a mut dyn Tokenizer) -> Self {
        Self { tok }
    }
}

impl io::Read for TokenizerReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.tok.read(buf, true) {
            Ok(n) => Ok(n),
            Err(DetectError::Io(e)) => Err(e),
            Err(DetectError::Aborted) => {
                Err(io::Error::new(io::ErrorKind::Interrupted, "detection aborted"))
            }
            Err(DetectError::EndOfSource) => {
                Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of source"))
            }
        }
    }
}

fn plain_gz() -> FileTypeResult {
    FileTypeResult::new("gz", "application/gzip")
}

/// Inflate the gzip stream and detect what it contains.
pub(crate) fn probe(
    detector: &FormatDetector,
    tok: &mut dyn Tokenizer,
) -> Result<FileTypeResult> {
    debug!("gzip signature, descending into inflated stream");
    let decoder = GzDecoder::new(TokenizerReader::new(tok));
    let mut inner = ReadTokenizer::new(decoder);

    match detector.from_tokenizer(&mut inner) {
        Ok(Some(inner_type)) if inner_type.ext == "tar" => {
            Ok(FileTypeResult::new("tar.gz", "application/gzip"))
        }
        Ok(_) => Ok(plain_gz()),
        Err(DetectError::Aborted) => Err(DetectError::Aborted),
        // Corrupt deflate data or truncation: the member framing matched.
        Err(_) => Ok(plain_gz()),
    }
}
