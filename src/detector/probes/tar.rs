//! TAR header recognition.
//!
//! Modern archives carry `ustar` at offset 257; pre-POSIX ones leave the
//! magic slot zeroed, so those are validated through the header checksum:
//! the sum of all 512 header bytes with the checksum slot itself counted as
//! eight spaces, stored at offset 148 as octal ASCII.

use crate::catalog::FileTypeResult;
use crate::matchers::Sample;

const CHECKSUM_OFFSET: usize = 148;
const CHECKSUM_LEN: usize = 8;
const MAGIC_OFFSET: usize = 257;
const HEADER_LEN: usize = 512;

/// Validate the declared header checksum of a 512-byte TAR block.
pub(crate) fn checksum_matches(header: &[u8]) -> bool {
    if header.len() < HEADER_LEN {
        return false;
    }

    let declared = {
        let field = &header[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 6];
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        let text = std::str::from_utf8(&field[..end]).unwrap_or("");
        match u32::from_str_radix(text.trim(), 8) {
            Ok(v) => v,
            Err(_) => return false,
        }
    };

    let mut sum = 8 * u32::from(b' ');
    for (i, &b) in header[..HEADER_LEN].iter().enumerate() {
        if !(CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN).contains(&i) {
            sum += u32::from(b);
        }
    }
    declared == sum
}

/// Match a TAR header at the start of the sample.
pub(crate) fn probe(sample: &Sample) -> Option<FileTypeResult> {
    let ustar = sample.check_ascii("ustar", MAGIC_OFFSET)
        && matches!(sample.get(MAGIC_OFFSET + 5), 0 | b' ');
    let legacy = (MAGIC_OFFSET..MAGIC_OFFSET + 5).all(|i| sample.get(i) == 0)
        && sample.len() >= HEADER_LEN
        && checksum_matches(sample.bytes());

    if ustar || legacy {
        Some(FileTypeResult::new("tar", "application/x-tar"))
    } else {
        None
    }
}
