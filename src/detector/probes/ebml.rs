//! EBML (Matroska/WebM): variable-length integers and DocType extraction.

use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::tokenizer::{TokenReadExt, Tokenizer};
use tracing::trace;

/// EBML element id of DocType.
const DOC_TYPE_ID: u64 = 0x4282;

/// Longest DocType payload worth reading; real ones are a dozen bytes.
const MAX_DOC_TYPE_LEN: u64 = 4096;

/// An EBML field: the marker-carrying bytes of a variable-length integer.
///
/// The position of the leading 1-bit in the first byte gives the width (up to
/// eight bytes). Ids keep the marker; lengths clear it.
fn read_field(tok: &mut dyn Tokenizer) -> Result<Option<Vec<u8>>> {
    let msb = tok.peek_u8()?;
    if msb == 0 {
        // No marker bit in the first byte: width over 8, malformed for our
        // purposes.
        return Ok(None);
    }
    let extra = msb.leading_zeros() as usize;
    let mut field = vec![0u8; extra + 1];
    tok.read(&mut field, false)?;
    Ok(Some(field))
}

fn field_value(field: &[u8]) -> u64 {
    field.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// An element header: id (marker kept) and payload length (marker cleared).
fn read_element(tok: &mut dyn Tokenizer) -> Result<Option<(u64, u64)>> {
    let Some(id_field) = read_field(tok)? else { return Ok(None) };
    let Some(mut len_field) = read_field(tok)? else { return Ok(None) };
    len_field[0] ^= 0x80 >> (len_field.len() - 1);
    Ok(Some((field_value(&id_field), field_value(&len_field))))
}

/// After the `1A 45 DF A3` magic, read the root element and scan its
/// children for DocType. Structural trouble yields `None` ("unknown").
pub(crate) fn probe(tok: &mut dyn Tokenizer) -> Result<Option<FileTypeResult>> {
    let Some((_, root_len)) = read_element(tok)? else { return Ok(None) };

    let size = tok.size().unwrap_or(u64::MAX);
    if root_len > size.saturating_sub(tok.position()) {
        // Element claims more payload than the source holds.
        return Ok(None);
    }

    let end = tok.position() + root_len;
    while tok.position() < end {
        let Some((id, len)) = read_element(tok)? else { return Ok(None) };
        if id == DOC_TYPE_ID {
            if len > MAX_DOC_TYPE_LEN || len > size.saturating_sub(tok.position()) {
                return Ok(None);
            }
            let mut raw = vec![0u8; len as usize];
            tok.read(&mut raw, false)?;
            let decoded = String::from_utf8_lossy(&raw);
            let doc_type = decoded.trim_end_matches('\0');
            trace!(doc_type, "EBML DocType");
            return Ok(match doc_type {
                "webm" => Some(FileTypeResult::new("webm", "video/webm")),
                "matroska" => Some(FileTypeResult::new("mkv", "video/x-matroska")),
                _ => None,
            });
        }
        if len > size.saturating_sub(tok.position()) {
            return Ok(None);
        }
        tok.skip(len)?;
    }
    Ok(None)
}
