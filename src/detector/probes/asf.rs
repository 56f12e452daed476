//! ASF (Advanced Systems Format): header object walk.

use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::tokenizer::{TokenReadExt, Tokenizer};

/// Stream Properties Object, B7DC0791-A9B7-11CF-8EE6-00C00C205365.
const STREAM_PROPERTIES: [u8; 16] = [
    0x91, 0x07, 0xDC, 0xB7, 0xB7, 0xA9, 0xCF, 0x11, 0x8E, 0xE6, 0x00, 0xC0, 0x0C, 0x20, 0x53,
    0x65,
];

/// Audio media stream type, F8699E40-5B4D-11CF-A8FD-00805F5C442B.
const AUDIO_MEDIA: [u8; 16] = [
    0x40, 0x9E, 0x69, 0xF8, 0x4D, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44,
    0x2B,
];

/// Video media stream type, BC19EFC0-5B4D-11CF-A8FD-00805F5C442B.
const VIDEO_MEDIA: [u8; 16] = [
    0xC0, 0xEF, 0x19, 0xBC, 0x4D, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44,
    0x2B,
];

/// How far into the file the Stream Properties Object is expected.
const SEARCH_WINDOW: u64 = 1024;

fn generic_asf() -> FileTypeResult {
    FileTypeResult::new("asf", "application/vnd.ms-asf")
}

/// After the 16-byte ASF header GUID, skip the remaining header-object
/// preamble and walk `(guid, size)` objects until the Stream Properties
/// Object tells audio from video. Anything else stays generic ASF.
pub(crate) fn probe(tok: &mut dyn Tokenizer) -> Result<FileTypeResult> {
    tok.skip(30)?;

    let limit = tok.size().unwrap_or(u64::MAX).min(SEARCH_WINDOW);
    while tok.position() + 24 < limit {
        let mut guid = [0u8; 16];
        tok.read(&mut guid, false)?;
        let object_size = tok.read_u64_le()?;
        let payload = object_size.saturating_sub(24);

        if guid == STREAM_PROPERTIES {
            let mut stream_type = [0u8; 16];
            tok.read(&mut stream_type, false)?;
            if stream_type == AUDIO_MEDIA {
                return Ok(FileTypeResult::new("wma", "audio/x-ms-wma"));
            }
            if stream_type == VIDEO_MEDIA {
                return Ok(FileTypeResult::new("wmv", "video/x-ms-asf"));
            }
            break;
        }
        tok.skip(payload)?;
    }
    Ok(generic_asf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::BufferTokenizer;

    const ASF_HEADER_GUID: [u8; 16] = [
        0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE,
        0x6C,
    ];

    fn asf_with_stream_type(stream_type: Option<[u8; 16]>) -> Vec<u8> {
        let mut data = ASF_HEADER_GUID.to_vec();
        data.resize(30, 0);
        match stream_type {
            Some(st) => {
                data.extend_from_slice(&STREAM_PROPERTIES);
                data.extend_from_slice(&(16 + 8 + 16u64).to_le_bytes());
                data.extend_from_slice(&st);
            }
            None => {
                // a single non-stream object covering the rest
                data.extend_from_slice(&[0xAA; 16]);
                data.extend_from_slice(&24u64.to_le_bytes());
            }
        }
        data
    }

    #[test]
    fn audio_stream_is_wma() {
        let data = asf_with_stream_type(Some(AUDIO_MEDIA));
        let ft = probe(&mut BufferTokenizer::new(&data)).unwrap();
        assert_eq!(ft.ext, "wma");
        assert_eq!(ft.mime, "audio/x-ms-wma");
    }

    #[test]
    fn video_stream_is_wmv() {
        let data = asf_with_stream_type(Some(VIDEO_MEDIA));
        let ft = probe(&mut BufferTokenizer::new(&data)).unwrap();
        assert_eq!(ft.ext, "wmv");
        assert_eq!(ft.mime, "video/x-ms-asf");
    }

    #[test]
    fn no_stream_properties_is_generic_asf() {
        let data = asf_with_stream_type(None);
        let ft = probe(&mut BufferTokenizer::new(&data)).unwrap();
        assert_eq!(ft.ext, "asf");
    }

    #[test]
    fn unknown_stream_type_is_generic_asf() {
        let data = asf_with_stream_type(Some([0x55; 16]));
        let ft = probe(&mut BufferTokenizer::new(&data)).unwrap();
        assert_eq!(ft.ext, "asf");
    }
}
