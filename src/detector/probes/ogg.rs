//! OGG container: codec dispatch from the first page's payload.

use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::tokenizer::Tokenizer;

/// After an `OggS` capture pattern, skip the rest of the page header and
/// dispatch on the codec identifier that opens the payload.
pub(crate) fn probe(tok: &mut dyn Tokenizer) -> Result<FileTypeResult> {
    tok.skip(28)?;
    let mut id = [0u8; 8];
    tok.read(&mut id, false)?;

    let ft = if id.starts_with(b"OpusHead") {
        FileTypeResult::new("opus", "audio/opus")
    } else if id.starts_with(b"\x80theora") {
        FileTypeResult::new("ogv", "video/ogg")
    } else if id.starts_with(b"\x01video\x00") {
        FileTypeResult::new("ogm", "video/ogg")
    } else if id.starts_with(b"\x7FFLAC") {
        FileTypeResult::new("oga", "audio/ogg")
    } else if id.starts_with(b"Speex\x20\x20") {
        FileTypeResult::new("spx", "audio/ogg")
    } else if id.starts_with(b"\x01vorbis") {
        FileTypeResult::new("ogg", "audio/ogg")
    } else {
        // Unrecognized codec, still an OGG container.
        FileTypeResult::new("ogx", "application/ogg")
    };
    Ok(ft)
}
