//! byteprint - Detect the file type of a byte buffer, file or stream by
//! inspecting its magic numbers and container metadata.
//!
//! Detection starts from an ordered battery of byte-pattern signatures and
//! drops into structured container probes (ZIP central walk, ISO-BMFF
//! brands, OGG codec headers, EBML DocType, TIFF IFD tags, ASF GUIDs, PNG
//! chunks) where a prefix alone cannot settle the format. The result is an
//! `{extension, media type}` pair from a closed catalogue, or `None` when
//! nothing matches.
//!
//! # Example
//!
//! ```
//! let data = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\
//! \x00\x00\x00\x01\x00\x00\x00\x01\x08\x06\x00\x00\x00\x1f\x15\xc4\x89\
//! \x00\x00\x00\x00IDAT\x00\x00\x00\x00";
//! let file_type = byteprint::from_buffer(data).unwrap().unwrap();
//! assert_eq!(file_type.ext, "png");
//! assert_eq!(file_type.mime, "image/png");
//! ```
//!
//! Sources that cannot be held in memory go through [`from_file`],
//! [`from_read`], or the pass-through [`DetectionStream`], which buffers
//! only a bounded prefix.

pub mod catalog;
mod detector;
mod error;
pub mod matchers;
mod mime_map;
mod stream;
pub mod tokenizer;

pub use catalog::{
    is_supported_extension, is_supported_mime_type, supported_extensions, supported_mime_types,
    FileTypeResult,
};
pub use detector::{
    DetectOptions, Detector, FormatDetector, CORE_DETECTOR_ID, IMPRECISE_DETECTOR_ID,
};
pub use error::{DetectError, Result};
pub use stream::DetectionStream;
pub use tokenizer::{BufferTokenizer, CancelToken, ReadTokenizer, TokenReadExt, Tokenizer};

use std::io::Read;
use std::path::Path;

/// Detect from an in-memory buffer with default options.
pub fn from_buffer(buf: &[u8]) -> Result<Option<FileTypeResult>> {
    FormatDetector::default().from_buffer(buf)
}

/// Detect from a file on disk with default options.
pub fn from_file(path: impl AsRef<Path>) -> Result<Option<FileTypeResult>> {
    FormatDetector::default().from_file(path.as_ref())
}

/// Detect from a sequential byte source with default options.
pub fn from_read<R: Read>(reader: R) -> Result<Option<FileTypeResult>> {
    FormatDetector::default().from_read(reader)
}

/// Detect from a caller-managed tokenizer with default options.
pub fn from_tokenizer(tok: &mut dyn Tokenizer) -> Result<Option<FileTypeResult>> {
    FormatDetector::default().from_tokenizer(tok)
}
