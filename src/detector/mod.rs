//! Detection pipeline and detector registry.
//!
//! A [`FormatDetector`] holds the configuration and any user-supplied
//! detectors, and runs them in order ahead of the two built-in passes:
//! `"core"` (the confident signature battery) and `"core.imprecise"` (the
//! ambiguous short signatures and the MPEG sync scan). The first detector to
//! produce a result wins; a detector that consumes bytes without producing
//! one halts the pipeline with "unknown".

mod confident;
mod imprecise;
pub(crate) mod probes;

use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::tokenizer::{BufferTokenizer, CancelToken, ReadTokenizer, Tokenizer};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Id of the built-in confident detector.
pub const CORE_DETECTOR_ID: &str = "core";
/// Id of the built-in imprecise detector.
pub const IMPRECISE_DETECTOR_ID: &str = "core.imprecise";

/// A pluggable detector.
///
/// `prior` is reserved for chaining and is currently always `None`; it is
/// part of the contract so implementations written today keep working when
/// results start flowing between detectors.
pub trait Detector: Send + Sync {
    /// Identity of this detector, used for diagnostics and ordering checks.
    fn id(&self) -> &str;

    /// Inspect the source. `Ok(None)` defers to the next detector, provided
    /// the tokenizer was left where it started.
    fn detect(
        &self,
        tok: &mut dyn Tokenizer,
        prior: Option<&FileTypeResult>,
    ) -> Result<Option<FileTypeResult>>;
}

/// Detection configuration.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// How many bytes past offset zero the MPEG audio sync scan may search.
    /// Values above ~10 are pointless but harmless.
    pub mpeg_offset_tolerance: u8,
    /// Prefix buffered by [`crate::DetectionStream`]. Zero falls back to
    /// [`crate::matchers::REASONABLE_DETECTION_SIZE`], which is also the
    /// default.
    pub sample_size: usize,
    /// Cancellation observed by tokenizers this detector constructs.
    pub cancel: Option<CancelToken>,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            mpeg_offset_tolerance: 0,
            sample_size: crate::matchers::REASONABLE_DETECTION_SIZE,
            cancel: None,
        }
    }
}

impl DetectOptions {
    pub(crate) fn effective_sample_size(&self) -> usize {
        if self.sample_size == 0 {
            crate::matchers::REASONABLE_DETECTION_SIZE
        } else {
            self.sample_size
        }
    }
}

/// The detection engine: options plus the detector registry.
///
/// Construction is cheap and the detector is immutable afterwards, so one
/// instance may serve concurrent detections on independent tokenizers.
#[derive(Default)]
pub struct FormatDetector {
    options: DetectOptions,
    custom: Vec<Box<dyn Detector>>,
}

impl FormatDetector {
    pub fn new(options: DetectOptions) -> Self {
        Self { options, custom: Vec::new() }
    }

    /// Register a custom detector. Custom detectors run before the built-in
    /// ones, in registration order.
    pub fn with_detector(mut self, detector: Box<dyn Detector>) -> Self {
        self.custom.push(detector);
        self
    }

    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    /// Effective detector order: custom ids first, then the built-ins.
    pub fn detector_ids(&self) -> Vec<&str> {
        self.custom
            .iter()
            .map(|d| d.id())
            .chain([CORE_DETECTOR_ID, IMPRECISE_DETECTOR_ID])
            .collect()
    }

    /// Run the pipeline against a tokenizer.
    ///
    /// Returns the first detector's result, `Ok(None)` when nothing matched,
    /// and `Ok(None)` when a detector consumed bytes without settling on a
    /// result (the source can no longer be handed to the next detector).
    pub fn from_tokenizer(&self, tok: &mut dyn Tokenizer) -> Result<Option<FileTypeResult>> {
        match self.run_detectors(tok) {
            Err(e) if e.is_end_of_source() => Ok(None),
            other => other,
        }
    }

    fn run_detectors(&self, tok: &mut dyn Tokenizer) -> Result<Option<FileTypeResult>> {
        let start = tok.position();

        for detector in &self.custom {
            if let Some(ft) = detector.detect(tok, None)? {
                debug!(id = detector.id(), ext = ft.ext, "custom detector matched");
                return Ok(Some(ft));
            }
            if tok.position() != start {
                debug!(id = detector.id(), "detector consumed input without result");
                return Ok(None);
            }
        }

        if let Some(ft) = self.detect_confident(tok)? {
            return Ok(Some(ft));
        }
        if tok.position() != start {
            return Ok(None);
        }

        self.detect_imprecise(tok)
    }

    /// Detect from a contiguous in-memory buffer.
    pub fn from_buffer(&self, buf: &[u8]) -> Result<Option<FileTypeResult>> {
        let mut tok = BufferTokenizer::with_cancel(buf, self.options.cancel.clone());
        self.from_tokenizer(&mut tok)
    }

    /// Detect from a sequential byte source of unknown length.
    pub fn from_read<R: Read>(&self, reader: R) -> Result<Option<FileTypeResult>> {
        let mut tok = ReadTokenizer::new(reader).with_cancel(self.options.cancel.clone());
        self.from_tokenizer(&mut tok)
    }

    /// Detect from a file on disk. The file length bounds lenient probes
    /// like the ID3 tag skip.
    pub fn from_file(&self, path: &Path) -> Result<Option<FileTypeResult>> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        let mut tok =
            ReadTokenizer::with_size(file, size).with_cancel(self.options.cancel.clone());
        self.from_tokenizer(&mut tok)
    }
}
