//! PNG chunk walk: tell animated PNG from still PNG.

use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::tokenizer::{TokenReadExt, Tokenizer};

/// After the 8-byte PNG signature, walk `(length, type, data, crc)` chunks.
/// An `acTL` chunk ahead of the image data marks an APNG; reaching `IDAT`
/// first settles on plain PNG. A negative chunk length is malformed input
/// and yields `None`.
pub(crate) fn probe(tok: &mut dyn Tokenizer) -> Result<Option<FileTypeResult>> {
    tok.skip(8)?;
    loop {
        let length = tok.read_u32_be()? as i32;
        if length < 0 {
            return Ok(None);
        }
        let mut chunk_type = [0u8; 4];
        tok.read(&mut chunk_type, false)?;
        match &chunk_type {
            b"IDAT" => return Ok(Some(FileTypeResult::new("png", "image/png"))),
            b"acTL" => return Ok(Some(FileTypeResult::new("apng", "image/apng"))),
            _ => tok.skip(u64::from(length as u32) + 4)?, // data + crc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::BufferTokenizer;

    const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn chunk(chunk_type: &[u8; 4], data: &[u8]) -> Vec<u8> {
        let mut out = (data.len() as u32).to_be_bytes().to_vec();
        out.extend_from_slice(chunk_type);
        out.extend_from_slice(data);
        out.extend_from_slice(&[0u8; 4]); // crc, not validated here
        out
    }

    fn png_with_chunks(chunks: &[Vec<u8>]) -> Vec<u8> {
        let mut data = SIGNATURE.to_vec();
        for c in chunks {
            data.extend_from_slice(c);
        }
        data
    }

    #[test]
    fn idat_after_ihdr_is_png() {
        let data = png_with_chunks(&[chunk(b"IHDR", &[0u8; 13]), chunk(b"IDAT", &[])]);
        let ft = probe(&mut BufferTokenizer::new(&data)).unwrap().unwrap();
        assert_eq!(ft.ext, "png");
    }

    #[test]
    fn actl_before_idat_is_apng() {
        let data = png_with_chunks(&[
            chunk(b"IHDR", &[0u8; 13]),
            chunk(b"acTL", &[0u8; 8]),
            chunk(b"IDAT", &[]),
        ]);
        let ft = probe(&mut BufferTokenizer::new(&data)).unwrap().unwrap();
        assert_eq!(ft.ext, "apng");
        assert_eq!(ft.mime, "image/apng");
    }

    #[test]
    fn negative_chunk_length_is_unknown() {
        let mut data = SIGNATURE.to_vec();
        data.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        data.extend_from_slice(b"IHDR");
        assert!(probe(&mut BufferTokenizer::new(&data)).unwrap().is_none());
    }

    #[test]
    fn truncated_walk_is_end_of_source() {
        let data = png_with_chunks(&[chunk(b"IHDR", &[0u8; 13])]);
        assert!(probe(&mut BufferTokenizer::new(&data)).is_err());
    }
}
