//! ZIP local-file-header walk with per-entry decisions.
//!
//! ZIP frames a whole family of formats (OOXML, ODF, JAR, APK, XPI, 3MF);
//! telling them apart means walking entry headers and, for a few well-known
//! filenames, inflating the entry body and reading the media type out of it.
//! The walk is strictly forward so it works over seekless stream tokenizers.

use crate::catalog::FileTypeResult;
use crate::error::{DetectError, Result};
use crate::mime_map;
use crate::tokenizer::{TokenReadExt, Tokenizer};
use flate2::read::DeflateDecoder;
use regex::Regex;
use std::cell::Cell;
use std::io::Read;
use std::sync::OnceLock;
use tracing::trace;

const LOCAL_FILE_HEADER: u32 = 0x0403_4B50;

/// Compression methods the body inspector understands.
const METHOD_STORED: u16 = 0;
const METHOD_DEFLATED: u16 = 8;

/// Largest entry body worth inflating for inspection.
const MAX_INSPECT_BYTES: u32 = 1024 * 1024;

fn dex_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"classes\d*\.dex").expect("valid regex"))
}

/// One parsed local file header.
pub(crate) struct EntryHeader {
    pub filename: String,
    flags: u16,
    method: u16,
    compressed_size: u32,
}

/// What the walk should do with an entry.
pub(crate) struct EntryDecision<'a> {
    /// Inflate the entry body and hand it over. Absent means skip the body.
    pub handler: Option<Box<dyn FnMut(&[u8]) + 'a>>,
    /// Terminate the walk after this entry.
    pub stop: bool,
}

impl<'a> EntryDecision<'a> {
    pub fn skip() -> Self {
        Self { handler: None, stop: false }
    }

    pub fn stop() -> Self {
        Self { handler: None, stop: true }
    }

    pub fn inspect(handler: impl FnMut(&[u8]) + 'a, stop: bool) -> Self {
        Self { handler: Some(Box::new(handler)), stop }
    }
}

/// Walk local file headers, consulting `decide` for each entry.
///
/// The walk ends at the central directory, at any unrecognized framing, or
/// when a decision says stop.
pub(crate) fn walk_entries<'a>(
    tok: &mut dyn Tokenizer,
    mut decide: impl FnMut(&EntryHeader) -> EntryDecision<'a>,
) -> Result<()> {
    loop {
        let signature = tok.read_u32_le()?;
        if signature != LOCAL_FILE_HEADER {
            // Central directory or garbage: entries are over either way.
            return Ok(());
        }
        tok.skip(2)?; // version needed to extract
        let flags = tok.read_u16_le()?;
        let method = tok.read_u16_le()?;
        tok.skip(8)?; // mod time/date, crc32
        let compressed_size = tok.read_u32_le()?;
        tok.skip(4)?; // uncompressed size
        let filename_len = tok.read_u16_le()?;
        let extra_len = tok.read_u16_le()?;

        let mut name_bytes = vec![0u8; usize::from(filename_len)];
        tok.read(&mut name_bytes, false)?;
        let header = EntryHeader {
            filename: String::from_utf8_lossy(&name_bytes).into_owned(),
            flags,
            method,
            compressed_size,
        };
        tok.skip(u64::from(extra_len))?;
        trace!(filename = %header.filename, "zip entry");

        let mut decision = decide(&header);
        if let Some(handler) = decision.handler.as_mut() {
            inspect_body(tok, &header, &mut **handler)?;
        } else {
            skip_body(tok, &header)?;
        }
        if decision.stop {
            return Ok(());
        }
    }
}

/// Read and (if deflated) decompress an entry body, then hand it over.
fn inspect_body(
    tok: &mut dyn Tokenizer,
    header: &EntryHeader,
    handler: &mut dyn FnMut(&[u8]),
) -> Result<()> {
    if header.compressed_size == 0 || header.compressed_size > MAX_INSPECT_BYTES {
        return skip_body(tok, header);
    }
    let mut compressed = vec![0u8; header.compressed_size as usize];
    tok.read(&mut compressed, false)?;

    match header.method {
        METHOD_STORED => handler(&compressed),
        METHOD_DEFLATED => {
            let mut body = Vec::new();
            let mut decoder = DeflateDecoder::new(compressed.as_slice());
            if decoder.read_to_end(&mut body).is_ok() {
                handler(&body);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Skip an entry body. A zero compressed size either marks a directory or a
/// streamed entry with a data descriptor; both cases resynchronize by
/// scanning for the next local header signature.
fn skip_body(tok: &mut dyn Tokenizer, header: &EntryHeader) -> Result<()> {
    let streamed = header.flags & 0x08 != 0;
    if header.compressed_size > 0 {
        return tok.skip(u64::from(header.compressed_size));
    }
    if !streamed {
        // Directory entry: the next header follows immediately.
        return Ok(());
    }
    resync_to_next_header(tok)
}

fn resync_to_next_header(tok: &mut dyn Tokenizer) -> Result<()> {
    let needle = LOCAL_FILE_HEADER.to_le_bytes();
    let mut window = [0u8; 512];
    loop {
        let got = tok.peek(&mut window, true)?;
        if got < needle.len() {
            return Err(DetectError::EndOfSource);
        }
        if let Some(idx) = window[..got]
            .windows(needle.len())
            .position(|w| w == needle)
        {
            return tok.skip(idx as u64);
        }
        // Keep three bytes so a signature straddling the window survives.
        tok.skip((got - (needle.len() - 1)) as u64)?;
    }
}

/// The detection decision tree over a ZIP stream.
///
/// Well-known filenames settle the verdict outright or via their inflated
/// body; everything else falls through to plain ZIP at the end of the walk.
/// A truncated archive is still reported as ZIP: the frame itself matched.
pub(crate) fn probe(tok: &mut dyn Tokenizer) -> Result<Option<FileTypeResult>> {
    let found: Cell<Option<FileTypeResult>> = Cell::new(None);

    let walk = walk_entries(tok, |header| match header.filename.as_str() {
        "META-INF/mozilla.rsa" => {
            found.set(Some(FileTypeResult::new("xpi", "application/x-xpinstall")));
            EntryDecision::stop()
        }
        "META-INF/MANIFEST.MF" => {
            found.set(Some(FileTypeResult::new("jar", "application/java-archive")));
            EntryDecision::stop()
        }
        "mimetype" => EntryDecision::inspect(
            |body| {
                let text = String::from_utf8_lossy(body);
                found.set(mime_map::from_archive_media_type(text.trim()));
            },
            true,
        ),
        "[Content_Types].xml" => EntryDecision::inspect(
            |body| {
                let xml = String::from_utf8_lossy(body);
                found.set(main_part_media_type(&xml));
            },
            true,
        ),
        name if dex_name_re().is_match(name) => {
            found.set(Some(FileTypeResult::new(
                "apk",
                "application/vnd.android.package-archive",
            )));
            EntryDecision::stop()
        }
        _ => EntryDecision::skip(),
    });

    match walk {
        Ok(()) => {}
        Err(e) if e.is_end_of_source() => {}
        Err(e) => return Err(e),
    }
    Ok(Some(found.get().unwrap_or(FileTypeResult::new("zip", "application/zip"))))
}

/// Pull the main-part media type out of `[Content_Types].xml`: the quoted
/// string ending in `.main+xml`. 3MF declares its model part without the
/// suffix, so it gets its own containment check.
fn main_part_media_type(xml: &str) -> Option<FileTypeResult> {
    match xml.find(".main+xml\"") {
        Some(end) => {
            let head = &xml[..end];
            let start = head.rfind('"')? + 1;
            mime_map::from_archive_media_type(&head[start..])
        }
        None => {
            if xml.contains("application/vnd.ms-package.3dmanufacturing-3dmodel+xml") {
                Some(FileTypeResult::new("3mf", "model/3mf"))
            } else {
                None
            }
        }
    }
}
