use super::{check_cancel, CancelToken, Tokenizer};
use crate::error::{DetectError, Result};
use std::collections::VecDeque;
use std::io::Read;

/// Tokenizer over a sequential [`Read`] source.
///
/// Peeking pulls bytes from the source into a lookahead queue; reads drain
/// the queue before touching the source again. The size is unknown unless
/// the caller provides one (e.g. from file metadata).
pub struct ReadTokenizer<R: Read> {
    inner: R,
    lookahead: VecDeque<u8>,
    pos: u64,
    size: Option<u64>,
    cancel: Option<CancelToken>,
}

impl<R: Read> ReadTokenizer<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, lookahead: VecDeque::new(), pos: 0, size: None, cancel: None }
    }

    /// A tokenizer whose total source length is known up front.
    pub fn with_size(inner: R, size: u64) -> Self {
        Self { size: Some(size), ..Self::new(inner) }
    }

    pub fn with_cancel(mut self, cancel: Option<CancelToken>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Pull from the source until the lookahead holds `want` bytes or the
    /// source is exhausted.
    fn fill_lookahead(&mut self, want: usize) -> Result<()> {
        let mut chunk = [0u8; 4096];
        while self.lookahead.len() < want {
            let step = chunk.len().min(want - self.lookahead.len());
            let got = self.inner.read(&mut chunk[..step]).map_err(DetectError::from_io)?;
            if got == 0 {
                break;
            }
            self.lookahead.extend(&chunk[..got]);
        }
        Ok(())
    }
}

impl<R: Read> Tokenizer for ReadTokenizer<R> {
    fn peek(&mut self, buf: &mut [u8], may_be_less: bool) -> Result<usize> {
        check_cancel(&self.cancel)?;
        self.fill_lookahead(buf.len())?;
        let actual = buf.len().min(self.lookahead.len());
        if actual < buf.len() && !may_be_less {
            return Err(DetectError::EndOfSource);
        }
        for (dst, src) in buf.iter_mut().zip(self.lookahead.iter()) {
            *dst = *src;
        }
        Ok(actual)
    }

    fn read(&mut self, buf: &mut [u8], may_be_less: bool) -> Result<usize> {
        let actual = self.peek(buf, may_be_less)?;
        self.lookahead.drain(..actual);
        self.pos += actual as u64;
        Ok(actual)
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        check_cancel(&self.cancel)?;
        let mut remaining = n;

        let from_lookahead = (self.lookahead.len() as u64).min(remaining);
        self.lookahead.drain(..from_lookahead as usize);
        remaining -= from_lookahead;

        let mut chunk = [0u8; 4096];
        while remaining > 0 {
            let step = (chunk.len() as u64).min(remaining) as usize;
            let got = self.inner.read(&mut chunk[..step]).map_err(DetectError::from_io)?;
            if got == 0 {
                self.pos += n - remaining;
                return Err(DetectError::EndOfSource);
            }
            remaining -= got as u64;
        }
        self.pos += n;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.pos
    }

    fn size(&self) -> Option<u64> {
        self.size
    }
}
