//! TIFF and TIFF-framed camera raw formats.

use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::matchers::Sample;
use crate::tokenizer::{TokenReadExt, Tokenizer};

/// Sony ARW marker tag (SonyRawFileType).
const TAG_ARW: u16 = 50341;
/// Adobe DNG marker tag (DNGVersion).
const TAG_DNG: u16 = 50706;

fn classic_tiff() -> FileTypeResult {
    FileTypeResult::new("tif", "image/tiff")
}

/// Inspect a `II`/`MM` header. Returns `None` when the version field says
/// this is not TIFF at all (Olympus ORF and Panasonic RW2 share the byte
/// order mark and are matched by their own signatures further down the
/// battery).
pub(crate) fn probe(
    tok: &mut dyn Tokenizer,
    sample: &Sample,
    big_endian: bool,
) -> Result<Option<FileTypeResult>> {
    let version = sample.u16_at(2, big_endian);
    let ifd_offset = sample.u32_at(4, big_endian);

    if version == 43 {
        // BigTIFF
        return Ok(Some(classic_tiff()));
    }
    if version != 42 {
        return Ok(None);
    }

    // Canon CR2 and Nikon NEF carry distinctive bytes right after the header.
    if ifd_offset >= 6 && sample.check_ascii("CR", 8) {
        return Ok(Some(FileTypeResult::new("cr2", "image/x-canon-cr2")));
    }
    if ifd_offset >= 8
        && (sample.check(&[0x1C, 0x00, 0xFE, 0x00], 8, None)
            || sample.check(&[0x1F, 0x00, 0x0B, 0x00], 8, None))
    {
        return Ok(Some(FileTypeResult::new("nef", "image/x-nikon-nef")));
    }

    match scan_ifd(tok, ifd_offset, big_endian) {
        Ok(Some(ft)) => Ok(Some(ft)),
        Ok(None) => Ok(Some(classic_tiff())),
        // A truncated IFD is still recognizably TIFF.
        Err(e) if e.is_end_of_source() => Ok(Some(classic_tiff())),
        Err(e) => Err(e),
    }
}

/// Walk the first IFD's entries looking for raw-format marker tags.
fn scan_ifd(
    tok: &mut dyn Tokenizer,
    ifd_offset: u32,
    big_endian: bool,
) -> Result<Option<FileTypeResult>> {
    tok.skip(u64::from(ifd_offset))?;
    let entries = tok.read_u16(big_endian)?;
    for _ in 0..entries {
        let tag = tok.read_u16(big_endian)?;
        match tag {
            TAG_ARW => return Ok(Some(FileTypeResult::new("arw", "image/x-sony-arw"))),
            TAG_DNG => return Ok(Some(FileTypeResult::new("dng", "image/x-adobe-dng"))),
            _ => tok.skip(10)?,
        }
    }
    Ok(None)
}
