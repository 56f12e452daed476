//! The imprecise detector: ambiguous short signatures.
//!
//! These patterns are too weak to trust ahead of the confident battery (a
//! handful of near-zero bytes, or a two-byte sync word that occurs freely in
//! binary data), so they only run once everything else has come up empty.

use super::FormatDetector;
use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::matchers::Sample;
use crate::tokenizer::Tokenizer;

fn found(ext: &'static str, mime: &'static str) -> Result<Option<FileTypeResult>> {
    Ok(Some(FileTypeResult::new(ext, mime)))
}

impl FormatDetector {
    /// The `"core.imprecise"` pass.
    pub(crate) fn detect_imprecise(
        &self,
        tok: &mut dyn Tokenizer,
    ) -> Result<Option<FileTypeResult>> {
        let tolerance = usize::from(self.options().mpeg_offset_tolerance);
        let mut s = Sample::new();
        s.fill(tok, 8)?;

        if s.check(&[0x00, 0x00, 0x01, 0xBA], 0, None) || s.check(&[0x00, 0x00, 0x01, 0xB3], 0, None)
        {
            return found("mpg", "video/mpeg");
        }
        if s.check(&[0x00, 0x01, 0x00, 0x00, 0x00], 0, None) {
            return found("ttf", "font/ttf");
        }
        if s.check(&[0x00, 0x00, 0x01, 0x00], 0, None) {
            return found("ico", "image/x-icon");
        }
        if s.check(&[0x00, 0x00, 0x02, 0x00], 0, None) {
            return found("cur", "image/x-icon");
        }

        s.fill(tok, 8 + 2 + tolerance)?;

        for depth in 0..=tolerance {
            // 11-bit frame sync: 0xFF then the top three bits of the next
            // byte set.
            if !s.check(&[0xFF, 0xE0], depth, Some(&[0xFF, 0xE0])) {
                continue;
            }
            if s.check(&[0x10], depth + 1, Some(&[0x16])) {
                // ADTS framing; MPEG-2 and MPEG-4 variants both carry AAC,
                // so the version bit makes no difference here.
                return found("aac", "audio/aac");
            }
            if s.check(&[0x02], depth + 1, Some(&[0x06])) {
                return found("mp3", "audio/mpeg");
            }
            if s.check(&[0x04], depth + 1, Some(&[0x06])) {
                return found("mp2", "audio/mpeg");
            }
            if s.check(&[0x06], depth + 1, Some(&[0x06])) {
                return found("mp1", "audio/mpeg");
            }
        }

        Ok(None)
    }
}
