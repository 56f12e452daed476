//! ISO Base Media File Format: brand-major dispatch from the `ftyp` box.

use crate::catalog::FileTypeResult;
use crate::matchers::Sample;

/// Dispatch on the 4-byte brand major at offset 8, NULs stripped and
/// whitespace trimmed. Unrecognized brands fall back to plain MP4.
pub(crate) fn brand_dispatch(sample: &Sample) -> FileTypeResult {
    let raw: String = (8..12)
        .map(|i| sample.get(i))
        .filter(|&b| b != 0)
        .map(|b| b as char)
        .collect();
    let brand = raw.trim();

    match brand {
        "avif" | "avis" => FileTypeResult::new("avif", "image/avif"),
        "mif1" => FileTypeResult::new("heic", "image/heif"),
        "msf1" => FileTypeResult::new("heic", "image/heif-sequence"),
        "heic" | "heix" => FileTypeResult::new("heic", "image/heic"),
        "hevc" | "hevx" => FileTypeResult::new("heic", "image/heic-sequence"),
        "qt" => FileTypeResult::new("mov", "video/quicktime"),
        "M4V" | "M4VH" | "M4VP" => FileTypeResult::new("m4v", "video/x-m4v"),
        "M4P" => FileTypeResult::new("m4p", "video/mp4"),
        "M4B" => FileTypeResult::new("m4b", "audio/mp4"),
        "M4A" => FileTypeResult::new("m4a", "audio/x-m4a"),
        "F4V" => FileTypeResult::new("f4v", "video/mp4"),
        "F4P" => FileTypeResult::new("f4p", "video/mp4"),
        "F4A" => FileTypeResult::new("f4a", "audio/mp4"),
        "F4B" => FileTypeResult::new("f4b", "audio/mp4"),
        "crx" => FileTypeResult::new("cr3", "image/x-canon-cr3"),
        _ => {
            if brand.starts_with("3g2") {
                FileTypeResult::new("3g2", "video/3gpp2")
            } else if brand.starts_with("3g") {
                FileTypeResult::new("3gp", "video/3gpp")
            } else {
                FileTypeResult::new("mp4", "video/mp4")
            }
        }
    }
}
