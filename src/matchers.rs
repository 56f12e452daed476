//! Byte-pattern predicates over a sampled prefix.
//!
//! Detection never matches against the raw source directly; it peeks a prefix
//! into a [`Sample`] and runs pure predicates over it. Indices past the end of
//! the sampled bytes read as zero, so short files compare naturally against
//! longer patterns without bounds juggling at every call site.

use crate::error::Result;
use crate::tokenizer::Tokenizer;

/// Upper bound on how much of a source detection will ever sample.
pub const REASONABLE_DETECTION_SIZE: usize = 4100;

/// String encodings understood by [`check_string`] and the fixed-string
/// token reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Ascii,
    Latin1,
    Utf16Le,
    Utf16Be,
}

/// Encode `text` to bytes under `encoding`.
///
/// ASCII and latin-1 map code points to single bytes; the UTF-16 variants
/// emit 16-bit code units (surrogate pairs become two units) in the given
/// byte order.
pub fn string_to_bytes(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Ascii | Encoding::Latin1 => text.chars().map(|c| c as u32 as u8).collect(),
        Encoding::Utf16Le => text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect(),
        Encoding::Utf16Be => text.encode_utf16().flat_map(|u| u.to_be_bytes()).collect(),
    }
}

/// Decode `bytes` under `encoding`. Unpaired surrogates become replacement
/// characters; ASCII/latin-1 decode byte-for-byte.
pub fn bytes_to_string(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Ascii | Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        Encoding::Utf16Le => {
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        Encoding::Utf16Be => {
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
    }
}

/// A staged prefix of the source under inspection.
///
/// The buffer grows through a detection pass (32, 256, 512 bytes) so short
/// signatures resolve without deep reads. Filling peeks; the tokenizer
/// position never moves.
pub(crate) struct Sample {
    buf: Vec<u8>,
    len: usize,
}

impl Sample {
    pub(crate) fn new() -> Self {
        Self { buf: vec![0; REASONABLE_DETECTION_SIZE], len: 0 }
    }

    /// Grow the sampled prefix to at least `want` bytes, or as many as the
    /// source has.
    pub(crate) fn fill(&mut self, tok: &mut dyn Tokenizer, want: usize) -> Result<()> {
        let want = want.min(self.buf.len());
        if want <= self.len {
            return Ok(());
        }
        let actual = tok.peek(&mut self.buf[..want], true)?;
        self.len = self.len.max(actual);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Byte at `index`, or zero past the sampled end.
    pub(crate) fn get(&self, index: usize) -> u8 {
        if index < self.len {
            self.buf[index]
        } else {
            0
        }
    }

    /// All-or-nothing comparison of `pattern` against the sample at `offset`,
    /// with an optional per-byte mask applied to the sample side.
    pub(crate) fn check(&self, pattern: &[u8], offset: usize, mask: Option<&[u8]>) -> bool {
        match mask {
            Some(mask) => pattern
                .iter()
                .enumerate()
                .all(|(i, &p)| p == (mask[i] & self.get(offset + i))),
            None => pattern
                .iter()
                .enumerate()
                .all(|(i, &p)| p == self.get(offset + i)),
        }
    }

    /// [`Sample::check`] against `text` encoded under `encoding`.
    pub(crate) fn check_string(&self, text: &str, offset: usize, encoding: Encoding) -> bool {
        self.check(&string_to_bytes(text, encoding), offset, None)
    }

    /// ASCII shorthand for the common case.
    pub(crate) fn check_ascii(&self, text: &str, offset: usize) -> bool {
        self.check_string(text, offset, Encoding::Ascii)
    }

    pub(crate) fn u16_at(&self, offset: usize, big_endian: bool) -> u16 {
        let b = [self.get(offset), self.get(offset + 1)];
        if big_endian {
            u16::from_be_bytes(b)
        } else {
            u16::from_le_bytes(b)
        }
    }

    pub(crate) fn u32_at(&self, offset: usize, big_endian: bool) -> u32 {
        let b = [
            self.get(offset),
            self.get(offset + 1),
            self.get(offset + 2),
            self.get(offset + 3),
        ];
        if big_endian {
            u32::from_be_bytes(b)
        } else {
            u32::from_le_bytes(b)
        }
    }
}
