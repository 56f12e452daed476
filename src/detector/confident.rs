//! The confident detector: the ordered signature battery.
//!
//! Arms are ordered shortest signature first, and within that, so that
//! overlapping signatures resolve correctly: JPEG-LS is a fourth-byte test
//! nested inside the JPEG prefix, OGG dispatches by codec before any generic
//! fallback, ZIP-framed document formats are probed before plain ZIP, and
//! the `II`/`MM` TIFF arm declines non-TIFF versions so Olympus and
//! Panasonic raws reach their own signatures further down. Reordering arms
//! breaks those subset relationships.

use super::probes;
use super::FormatDetector;
use crate::catalog::FileTypeResult;
use crate::error::Result;
use crate::matchers::{Encoding, Sample};
use crate::tokenizer::{TokenReadExt, Tokenizer};
use tracing::trace;

fn found(ext: &'static str, mime: &'static str) -> Result<Option<FileTypeResult>> {
    Ok(Some(FileTypeResult::new(ext, mime)))
}

impl FormatDetector {
    /// The `"core"` battery. Leaves the tokenizer untouched on a
    /// non-matching exit; nested descents (BOM strip, ID3 skip, gzip
    /// inflate) consume and resolve to a result or an explicit unknown.
    pub(crate) fn detect_confident(
        &self,
        tok: &mut dyn Tokenizer,
    ) -> Result<Option<FileTypeResult>> {
        let mut s = Sample::new();
        s.fill(tok, 32)?;
        if s.len() == 0 {
            return Ok(None);
        }

        // -- 2-byte signatures --

        if s.check(b"BM", 0, None) {
            return found("bmp", "image/bmp");
        }
        if s.check(&[0x0B, 0x77], 0, None) {
            return found("ac3", "audio/vnd.dolby.dd-raw");
        }
        if s.check(&[0x78, 0x01], 0, None) {
            return found("dmg", "application/x-apple-diskimage");
        }
        if s.check(b"MZ", 0, None) {
            return found("exe", "application/x-msdownload");
        }
        if s.check(&[0x25, 0x21], 0, None) {
            if s.check_ascii("PS-Adobe-", 2) && s.check_ascii(" EPSF-", 14) {
                return found("eps", "application/eps");
            }
            return found("ps", "application/postscript");
        }
        if s.check(&[0x1F, 0xA0], 0, None) || s.check(&[0x1F, 0x9D], 0, None) {
            return found("Z", "application/x-compress");
        }
        if s.check(&[0xC7, 0x71], 0, None) {
            return found("cpio", "application/x-cpio");
        }
        if s.check(&[0x60, 0xEA], 0, None) {
            return found("arj", "application/x-arj");
        }

        // -- 3-byte signatures --

        if s.check(&[0xEF, 0xBB, 0xBF], 0, None) {
            // Strip the UTF-8 BOM and look at what follows it.
            trace!("UTF-8 BOM, re-detecting past it");
            tok.skip(3)?;
            return self.detect_confident(tok);
        }
        if s.check(&[0x47, 0x49, 0x46], 0, None) {
            return found("gif", "image/gif");
        }
        if s.check(&[0x49, 0x49, 0xBC], 0, None) {
            return found("jxr", "image/vnd.ms-photo");
        }
        if s.check(&[0x1F, 0x8B, 0x08], 0, None) {
            return probes::gzip::probe(self, tok).map(Some);
        }
        if s.check(&[0x42, 0x5A, 0x68], 0, None) {
            return found("bz2", "application/x-bzip2");
        }
        if s.check_ascii("ID3", 0) {
            trace!("ID3v2 tag, skipping to the framed stream");
            tok.skip(6)?;
            let tag_len = tok.read_id3_syncsafe_u32()?;
            let size = tok.size().unwrap_or(u64::MAX);
            if tok.position() + u64::from(tag_len) >= size {
                // Tag claims to cover the whole file; assume corrupted
                // metadata on an MP3 stream rather than giving up.
                return found("mp3", "audio/mpeg");
            }
            tok.skip(u64::from(tag_len))?;
            // Full pipeline, so custom detectors see the framed stream too.
            return self.from_tokenizer(tok);
        }
        if s.check_ascii("MP+", 0) {
            return found("mpc", "audio/x-musepack");
        }
        if matches!(s.get(0), 0x43 | 0x46) && s.check(&[0x57, 0x53], 1, None) {
            return found("swf", "application/x-shockwave-flash");
        }

        // -- 4-byte signatures --

        if s.check(&[0xFF, 0xD8, 0xFF], 0, None) {
            if s.get(3) == 0xF7 {
                return found("jls", "image/jls");
            }
            return found("jpg", "image/jpeg");
        }
        if s.check_ascii("OTTO", 0) {
            return found("otf", "font/otf");
        }
        if s.check_ascii("FLIF", 0) {
            return found("flif", "image/flif");
        }
        if s.check_ascii("8BPS", 0) {
            return found("psd", "image/vnd.adobe.photoshop");
        }
        if s.check_ascii("MPCK", 0) {
            return found("mpc", "audio/x-musepack");
        }
        if s.check_ascii("FORM", 0) {
            return found("aif", "audio/aiff");
        }
        if s.check_ascii("icns", 0) {
            return found("icns", "image/icns");
        }
        if s.check(&[0x50, 0x4B, 0x03, 0x04], 0, None) {
            return probes::zip::probe(tok);
        }
        if s.check_ascii("OggS", 0) {
            return probes::ogg::probe(tok).map(Some);
        }
        if s.check_ascii("MThd", 0) {
            return found("mid", "audio/midi");
        }
        if s.check_ascii("wOFF", 0)
            && (s.check(&[0x00, 0x01, 0x00, 0x00], 4, None) || s.check_ascii("OTTO", 4))
        {
            return found("woff", "font/woff");
        }
        if s.check_ascii("wOF2", 0)
            && (s.check(&[0x00, 0x01, 0x00, 0x00], 4, None) || s.check_ascii("OTTO", 4))
        {
            return found("woff2", "font/woff2");
        }
        if s.check(&[0xD4, 0xC3, 0xB2, 0xA1], 0, None) || s.check(&[0xA1, 0xB2, 0xC3, 0xD4], 0, None)
        {
            return found("pcap", "application/vnd.tcpdump.pcap");
        }
        if s.check_ascii("DSD ", 0) {
            return found("dsf", "audio/x-dsf");
        }
        if s.check_ascii("LZIP", 0) {
            return found("lz", "application/x-lzip");
        }
        if s.check_ascii("fLaC", 0) {
            return found("flac", "audio/flac");
        }
        if s.check(&[0x42, 0x50, 0x47, 0xFB], 0, None) {
            return found("bpg", "image/bpg");
        }
        if s.check_ascii("wvpk", 0) {
            return found("wv", "audio/wavpack");
        }
        if s.check_ascii("%PDF", 0) {
            return found("pdf", "application/pdf");
        }
        if s.check(&[0x00, 0x61, 0x73, 0x6D], 0, None) {
            return found("wasm", "application/wasm");
        }
        if s.check_ascii("II", 0) {
            if let Some(ft) = probes::tiff::probe(tok, &s, false)? {
                return Ok(Some(ft));
            }
        }
        if s.check_ascii("MM", 0) {
            if let Some(ft) = probes::tiff::probe(tok, &s, true)? {
                return Ok(Some(ft));
            }
        }
        if s.check_ascii("MAC ", 0) {
            return found("ape", "audio/ape");
        }
        if s.check(&[0x1A, 0x45, 0xDF, 0xA3], 0, None) {
            return probes::ebml::probe(tok);
        }
        if s.check_ascii("SQLi", 0) {
            return found("sqlite", "application/x-sqlite3");
        }
        if s.check(&[0x4E, 0x45, 0x53, 0x1A], 0, None) {
            return found("nes", "application/x-nintendo-nes-rom");
        }
        if s.check_ascii("Cr24", 0) {
            return found("crx", "application/x-google-chrome-extension");
        }
        if s.check_ascii("MSCF", 0) || s.check_ascii("ISc(", 0) {
            return found("cab", "application/vnd.ms-cab-compressed");
        }
        if s.check(&[0xED, 0xAB, 0xEE, 0xDB], 0, None) {
            return found("rpm", "application/x-rpm");
        }
        if s.check(&[0xC5, 0xD0, 0xD3, 0xC6], 0, None) {
            return found("eps", "application/eps");
        }
        if s.check(&[0x28, 0xB5, 0x2F, 0xFD], 0, None) {
            return found("zst", "application/zstd");
        }
        if s.check(&[0x7F, 0x45, 0x4C, 0x46], 0, None) {
            return found("elf", "application/x-elf");
        }
        if s.check_ascii("!BDN", 0) {
            return found("pst", "application/vnd.ms-outlook");
        }
        if s.check_ascii("PAR1", 0) || s.check_ascii("PARE", 0) {
            return found("parquet", "application/x-parquet");
        }
        if s.check_ascii("ttcf", 0) {
            return found("ttc", "font/collection");
        }
        if s.check(&[0xCF, 0xFA, 0xED, 0xFE], 0, None) {
            return found("macho", "application/x-mach-binary");
        }
        if s.check(&[0x04, 0x22, 0x4D, 0x18], 0, None) {
            return found("lz4", "application/x-lz4");
        }
        if s.check_ascii("regf", 0) {
            return found("regf", "application/x-ms-regf");
        }

        // -- 5-byte signatures --

        if s.check_ascii("#!AMR", 0) {
            return found("amr", "audio/amr");
        }
        if s.check_ascii("{\\rtf", 0) {
            return found("rtf", "application/rtf");
        }
        if s.check(&[0x46, 0x4C, 0x56, 0x01], 0, None) {
            return found("flv", "video/x-flv");
        }
        if s.check_ascii("IMPM", 0) {
            return found("it", "audio/x-it");
        }
        const LZH_METHODS: [&str; 12] = [
            "-lh0-", "-lh1-", "-lh2-", "-lh3-", "-lh4-", "-lh5-", "-lh6-", "-lh7-", "-lzs-",
            "-lz4-", "-lz5-", "-lhd-",
        ];
        if LZH_METHODS.iter().any(|&m| s.check_ascii(m, 2)) {
            return found("lzh", "application/x-lzh-compressed");
        }
        if s.check(&[0x00, 0x00, 0x01, 0xBA], 0, None) {
            if s.check(&[0x21], 4, Some(&[0xF1])) {
                return found("mpg", "video/MP1S");
            }
            if s.check(&[0x44], 4, Some(&[0xC4])) {
                return found("mpg", "video/MP2P");
            }
            // Program streams without a recognizable pack header fall
            // through to the imprecise pass.
        }
        if s.check_ascii("ITSF", 0) {
            return found("chm", "application/vnd.ms-htmlhelp");
        }
        if s.check(&[0xCA, 0xFE, 0xBA, 0xBE], 0, None) {
            return found("class", "application/java-vm");
        }
        if s.check_ascii(".RMF", 0) {
            return found("rm", "application/vnd.rn-realmedia");
        }
        if s.check_ascii("DRACO", 0) {
            return found("drc", "application/vnd.google.draco");
        }

        // -- 6-byte signatures --

        if s.check(&[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00], 0, None) {
            return found("xz", "application/x-xz");
        }
        if s.check_ascii("<?xml ", 0) {
            return found("xml", "application/xml");
        }
        if s.check(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C], 0, None) {
            return found("7z", "application/x-7z-compressed");
        }
        if s.check(&[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07], 0, None) && matches!(s.get(6), 0 | 1) {
            return found("rar", "application/x-rar-compressed");
        }
        if s.check_ascii("solid ", 0) {
            return found("stl", "model/stl");
        }
        if s.check_ascii("AC", 0) {
            let digits = [s.get(2), s.get(3), s.get(4), s.get(5)];
            if digits.iter().all(u8::is_ascii_digit) {
                let version: u32 = digits.iter().fold(0, |acc, &d| acc * 10 + u32::from(d - b'0'));
                if (1000..=1050).contains(&version) {
                    return found("dwg", "image/vnd.dwg");
                }
            }
        }
        if s.check_ascii("070707", 0) {
            return found("cpio", "application/x-cpio");
        }

        // -- 7-byte signatures --

        if s.check_ascii("BLENDER", 0) {
            return found("blend", "application/x-blender");
        }
        if s.check_ascii("!<arch>", 0) {
            tok.skip(8)?;
            let member = tok.read_fixed_string(13, Encoding::Ascii)?;
            if member == "debian-binary" {
                return found("deb", "application/x-deb");
            }
            return found("ar", "application/x-unix-archive");
        }
        if s.check_ascii("WEBVTT", 0)
            && (s.len() == 6 || matches!(s.get(6), b'\n' | b'\r' | b'\t' | b' '))
        {
            return found("vtt", "text/vtt");
        }

        // -- 8-byte signatures --

        if s.check(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], 0, None) {
            return probes::png::probe(tok);
        }
        if s.check_ascii("ARROW1", 0) {
            return found("arrow", "application/x-apache-arrow");
        }
        if s.check(&[0x67, 0x6C, 0x54, 0x46, 0x02, 0x00, 0x00, 0x00], 0, None) {
            return found("glb", "model/gltf-binary");
        }
        if ["free", "mdat", "moov", "wide"].iter().any(|&t| s.check_ascii(t, 4)) {
            return found("mov", "video/quicktime");
        }

        // -- 9-byte signatures --

        if s.check(&[0x49, 0x49, 0x52, 0x4F, 0x08, 0x00, 0x00, 0x00, 0x18], 0, None) {
            return found("orf", "image/x-olympus-orf");
        }
        if s.check_ascii("gimp xcf ", 0) {
            return found("xcf", "image/x-xcf");
        }
        // ISO-BMFF: `ftyp` box with an ASCII-printable brand major.
        if s.check_ascii("ftyp", 4) && s.get(8) & 0x60 != 0 {
            return Ok(Some(probes::bmff::brand_dispatch(&s)));
        }

        // -- 10-byte signatures --

        if s.check_ascii("REGEDIT4\r\n", 0) {
            return found("reg", "application/x-ms-regedit");
        }

        // -- 12-byte signatures --

        if s.check_ascii("RIFF", 0) {
            if s.check_ascii("WEBP", 8) {
                return found("webp", "image/webp");
            }
            if s.check_ascii("AVI ", 8) {
                return found("avi", "video/vnd.avi");
            }
            if s.check_ascii("WAVE", 8) {
                return found("wav", "audio/vnd.wave");
            }
            // QLCM, RIFF-based
            if s.check_ascii("QLCM", 8) {
                return found("qcp", "audio/qcelp");
            }
        }
        if s.check(
            &[0x49, 0x49, 0x55, 0x00, 0x18, 0x00, 0x00, 0x00, 0x88, 0xE7, 0x74, 0xD8],
            0,
            None,
        ) {
            return found("rw2", "image/x-panasonic-rw2");
        }
        if s.check(
            &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9],
            0,
            None,
        ) {
            return probes::asf::probe(tok).map(Some);
        }
        if s.check(
            &[0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A],
            0,
            None,
        ) {
            return found("ktx", "image/ktx");
        }
        if (s.check(&[0x7E, 0x10, 0x04], 0, None) || s.check(&[0x7E, 0x18, 0x04], 0, None))
            && s.check_ascii("MIE", 4)
        {
            return found("mie", "application/x-mie");
        }
        if s.check(&[0x00, 0x00, 0x27, 0x0A], 0, None) {
            return found("shp", "application/x-esri-shape");
        }
        if s.check(&[0xFF, 0x4F, 0xFF, 0x51], 0, None) {
            return found("j2c", "image/j2c");
        }
        if s.check(
            &[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A],
            0,
            None,
        ) {
            return probes::jp2::probe(tok);
        }
        if s.check(&[0xFF, 0x0A], 0, None)
            || s.check(
                &[0x00, 0x00, 0x00, 0x0C, 0x4A, 0x58, 0x4C, 0x20, 0x0D, 0x0A, 0x87, 0x0A],
                0,
                None,
            )
        {
            return found("jxl", "image/jxl");
        }
        if s.check(&[0xFE, 0xFF], 0, None) {
            // UTF-16 BE byte order mark
            if s.check_string("<?xml ", 2, Encoding::Utf16Be) {
                return found("xml", "application/xml");
            }
            // Some other big-endian UTF-16 text; nothing below applies.
            return Ok(None);
        }
        if s.check(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1], 0, None) {
            return found("cfb", "application/x-cfb");
        }

        // Signatures deeper in the header.
        s.fill(tok, 256)?;

        if s.check_ascii("acsp", 36) {
            return found("icc", "application/vnd.iccprofile");
        }
        if s.check_ascii("**ACE", 7) && s.check_ascii("**", 12) {
            return found("ace", "application/x-ace-compressed");
        }
        if s.check_ascii("BEGIN:", 0) {
            if s.check_ascii("VCARD", 6) {
                return found("vcf", "text/vcard");
            }
            if s.check_ascii("VCALENDAR", 6) {
                return found("ics", "text/calendar");
            }
        }
        if s.check_ascii("FUJIFILMCCD-RAW", 0) {
            return found("raf", "image/x-fujifilm-raf");
        }
        if s.check_ascii("Extended Module:", 0) {
            return found("xm", "audio/x-xm");
        }
        if s.check_ascii("Creative Voice File", 0) {
            return found("voc", "audio/x-voc");
        }
        if s.check(&[0x04, 0x00, 0x00, 0x00], 0, None) && s.len() >= 16 {
            // Chromium Pickle framing; ASAR archives put a JSON index with a
            // `files` key in it.
            let json_size = s.u32_at(12, false) as usize;
            if json_size > 12 && s.len() >= json_size + 16 {
                let header = &s.bytes()[16..16 + json_size];
                if let Ok(json) = serde_json::from_slice::<serde_json::Value>(header) {
                    if json.get("files").is_some() {
                        return found("asar", "application/x-asar");
                    }
                }
            }
        }
        if s.check(
            &[0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x02],
            0,
            None,
        ) {
            return found("mxf", "application/mxf");
        }
        if s.check_ascii("SCRM", 44) {
            return found("s3m", "audio/x-s3m");
        }
        // MPEG transport streams: sync bytes one packet apart, raw and BDAV.
        if s.get(0) == 0x47 && s.get(188) == 0x47 {
            return found("mts", "video/mp2t");
        }
        if s.get(4) == 0x47 && s.get(196) == 0x47 {
            return found("mts", "video/mp2t");
        }
        if s.check_ascii("BOOKMOBI", 60) {
            return found("mobi", "application/x-mobipocket-ebook");
        }
        if s.check_ascii("DICM", 128) {
            return found("dcm", "application/dicom");
        }
        if s.check(
            &[
                0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
            ],
            0,
            None,
        ) {
            return found("lnk", "application/x.ms.shortcut");
        }
        if s.check(b"book\0\0\0\0mark\0\0\0\0", 0, None) {
            return found("alias", "application/x.apple.alias");
        }
        if s.check(b"Kaydara FBX Binary\x20\x20\x00", 0, None) {
            return found("fbx", "application/x.autodesk.fbx");
        }
        if s.check_ascii("LP", 34)
            && (s.check(&[0x00, 0x00, 0x01], 8, None)
                || s.check(&[0x01, 0x00, 0x02], 8, None)
                || s.check(&[0x02, 0x00, 0x02], 8, None))
        {
            return found("eot", "application/vnd.ms-fontobject");
        }
        if s.check(
            &[
                0x06, 0x06, 0xED, 0xF5, 0xD8, 0x1D, 0x46, 0xE5, 0xBD, 0x31, 0xEF, 0xE7, 0xFE,
                0x74, 0xB7, 0x1D,
            ],
            0,
            None,
        ) {
            return found("indd", "application/x-indesign");
        }

        // Signatures needing a full first block.
        s.fill(tok, 512)?;

        if let Some(ft) = probes::tar::probe(&s) {
            return Ok(Some(ft));
        }
        if s.check(&[0xFF, 0xFE], 0, None) {
            // UTF-16 LE byte order mark
            if s.check_string("<?xml ", 2, Encoding::Utf16Le) {
                return found("xml", "application/xml");
            }
            if s.check(&[0xFF, 0x0E], 2, None)
                && s.check_string("SketchUp Model", 4, Encoding::Utf16Le)
            {
                return found("skp", "application/vnd.sketchup.skp");
            }
            if s.check_string("Windows Registry Editor Version 5.00", 2, Encoding::Utf16Le) {
                return found("reg", "application/x-ms-regedit");
            }
            // Some other little-endian UTF-16 text.
            return Ok(None);
        }
        if s.check_ascii("-----BEGIN PGP MESSAGE-----", 0) {
            return found("pgp", "application/pgp-encrypted");
        }

        Ok(None)
    }
}
