//! Positioned byte cursors over detection sources.
//!
//! Everything the detection engine reads goes through the [`Tokenizer`]
//! trait: a forward-only cursor with peek/read/skip semantics and optional
//! knowledge of the source size. [`BufferTokenizer`] serves contiguous
//! in-memory bytes, [`ReadTokenizer`] adapts any [`std::io::Read`] with an
//! internal lookahead buffer for peeking.
//!
//! Cancellation is observed here and nowhere else: every I/O operation checks
//! the caller's [`CancelToken`] first, so a cancelled detection fails fast
//! with [`DetectError::Aborted`] no matter how deep in a container probe it
//! was.

mod buffer;
mod reader;

pub use buffer::BufferTokenizer;
pub use reader::ReadTokenizer;

use crate::error::{DetectError, Result};
use crate::matchers::{bytes_to_string, Encoding};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between a caller and the tokenizer.
///
/// Cloning is cheap; all clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. The next tokenizer I/O operation fails with
    /// [`DetectError::Aborted`].
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(DetectError::Aborted)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn check_cancel(cancel: &Option<CancelToken>) -> Result<()> {
    match cancel {
        Some(token) => token.check(),
        None => Ok(()),
    }
}

/// A positioned, forward-only byte cursor.
///
/// `position` is monotonically non-decreasing across `read`/`skip`; `peek`
/// never moves it. A `None` size means the bound is unknown and callers that
/// need one treat the source as effectively infinite.
pub trait Tokenizer {
    /// Fill `buf` from the current position without advancing.
    ///
    /// Returns the number of bytes provided. With `may_be_less` unset, a
    /// short source fails with [`DetectError::EndOfSource`] instead.
    fn peek(&mut self, buf: &mut [u8], may_be_less: bool) -> Result<usize>;

    /// Fill `buf` from the current position, advancing by the bytes served.
    fn read(&mut self, buf: &mut [u8], may_be_less: bool) -> Result<usize>;

    /// Advance by exactly `n` bytes or fail with [`DetectError::EndOfSource`].
    fn skip(&mut self, n: u64) -> Result<()>;

    /// Current offset from the start of the source.
    fn position(&self) -> u64;

    /// Total source length, if known.
    fn size(&self) -> Option<u64>;
}

/// Fixed-token readers layered over any [`Tokenizer`].
///
/// These are the only structured reads the container probes need: unsigned
/// integers in both byte orders, fixed-length strings in a named encoding,
/// and the ID3v2 sync-safe length.
pub trait TokenReadExt: Tokenizer {
    fn read_u8(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.read(&mut b, false)?;
        Ok(b[0])
    }

    /// Look at the next byte without advancing.
    fn peek_u8(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.peek(&mut b, false)?;
        Ok(b[0])
    }

    fn read_u16_be(&mut self) -> Result<u16> {
        let mut b = [0u8; 2];
        self.read(&mut b, false)?;
        Ok(u16::from_be_bytes(b))
    }

    fn read_u16_le(&mut self) -> Result<u16> {
        let mut b = [0u8; 2];
        self.read(&mut b, false)?;
        Ok(u16::from_le_bytes(b))
    }

    fn read_u32_be(&mut self) -> Result<u32> {
        let mut b = [0u8; 4];
        self.read(&mut b, false)?;
        Ok(u32::from_be_bytes(b))
    }

    fn read_u32_le(&mut self) -> Result<u32> {
        let mut b = [0u8; 4];
        self.read(&mut b, false)?;
        Ok(u32::from_le_bytes(b))
    }

    fn read_u64_be(&mut self) -> Result<u64> {
        let mut b = [0u8; 8];
        self.read(&mut b, false)?;
        Ok(u64::from_be_bytes(b))
    }

    fn read_u64_le(&mut self) -> Result<u64> {
        let mut b = [0u8; 8];
        self.read(&mut b, false)?;
        Ok(u64::from_le_bytes(b))
    }

    /// Read an endian-selected `u16`; `big_endian` picks the byte order.
    fn read_u16(&mut self, big_endian: bool) -> Result<u16> {
        if big_endian {
            self.read_u16_be()
        } else {
            self.read_u16_le()
        }
    }

    /// Read `n` bytes and decode them under `encoding`.
    fn read_fixed_string(&mut self, n: usize, encoding: Encoding) -> Result<String> {
        let mut bytes = vec![0u8; n];
        self.read(&mut bytes, false)?;
        Ok(bytes_to_string(&bytes, encoding))
    }

    /// Read the ID3v2 sync-safe 28-bit length: four bytes, the high bit of
    /// each cleared, seven payload bits apiece.
    fn read_id3_syncsafe_u32(&mut self) -> Result<u32> {
        let mut b = [0u8; 4];
        self.read(&mut b, false)?;
        Ok(u32::from(b[0] & 0x7F) << 21
            | u32::from(b[1] & 0x7F) << 14
            | u32::from(b[2] & 0x7F) << 7
            | u32::from(b[3] & 0x7F))
    }
}

impl<T: Tokenizer + ?Sized> TokenReadExt for T {}
