//! JPEG-2000 family: brand dispatch after the signature box.

use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::matchers::Encoding;
use crate::tokenizer::{TokenReadExt, Tokenizer};

/// After the 12-byte signature box, the `ftyp` box's brand names the family
/// member. Unrecognized brands yield `None`.
pub(crate) fn probe(tok: &mut dyn Tokenizer) -> Result<Option<FileTypeResult>> {
    tok.skip(20)?;
    let brand = tok.read_fixed_string(4, Encoding::Ascii)?;
    Ok(match brand.trim() {
        "jp2" => Some(FileTypeResult::new("jp2", "image/jp2")),
        "jpx" => Some(FileTypeResult::new("jpx", "image/jpx")),
        "jpm" => Some(FileTypeResult::new("jpm", "image/jpm")),
        "mjp2" => Some(FileTypeResult::new("mj2", "video/mj2")),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::BufferTokenizer;

    fn jp2_family(brand: &[u8; 4]) -> Vec<u8> {
        let mut data = vec![
            0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
        ];
        data.extend_from_slice(&[0x00, 0x00, 0x00, 0x14]);
        data.extend_from_slice(b"ftyp");
        data.extend_from_slice(brand);
        data
    }

    #[test]
    fn family_brands() {
        for (brand, ext, mime) in [
            (b"jp2 ", "jp2", "image/jp2"),
            (b"jpx ", "jpx", "image/jpx"),
            (b"jpm ", "jpm", "image/jpm"),
            (b"mjp2", "mj2", "video/mj2"),
        ] {
            let data = jp2_family(brand);
            let ft = probe(&mut BufferTokenizer::new(&data)).unwrap().unwrap();
            assert_eq!(ft.ext, ext);
            assert_eq!(ft.mime, mime);
        }
    }

    #[test]
    fn unknown_brand_is_unknown() {
        let data = jp2_family(b"zzzz");
        assert!(probe(&mut BufferTokenizer::new(&data)).unwrap().is_none());
    }
}
