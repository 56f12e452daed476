//! End-to-end coverage of the detection catalogue.
//!
//! Every extension the crate can report gets at least one synthesized
//! fixture here, and detection of that fixture must produce the extension
//! plus a media type from the published catalogue. This is the closure
//! property: no dead catalogue entries, no results outside the catalogue.

use byteprint::{from_buffer, is_supported_mime_type, supported_extensions};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, body) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(body).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn zip_with_content_types(content_type_xml: &str) -> Vec<u8> {
    zip_with(&[("[Content_Types].xml", content_type_xml.as_bytes())])
}

fn ooxml(main_part: &str) -> Vec<u8> {
    zip_with_content_types(&format!(
        r#"<?xml version="1.0"?><Types><Override PartName="/main" ContentType="{main_part}.main+xml"/></Types>"#
    ))
}

fn gzip_of(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn ustar_header(name: &str) -> Vec<u8> {
    let mut header = vec![0u8; 512];
    header[..name.len()].copy_from_slice(name.as_bytes());
    header[100..107].copy_from_slice(b"0000644");
    header[124..135].copy_from_slice(b"00000000000");
    header[257..262].copy_from_slice(b"ustar");
    let mut sum = 8 * u32::from(b' ');
    for (i, &b) in header.iter().enumerate() {
        if !(148..156).contains(&i) {
            sum += u32::from(b);
        }
    }
    header[148..154].copy_from_slice(format!("{sum:06o}").as_bytes());
    header[154] = 0;
    header[155] = b' ';
    header
}

fn png_with_chunks(chunks: &[(&[u8; 4], usize)]) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    for (chunk_type, payload_len) in chunks {
        data.extend_from_slice(&(*payload_len as u32).to_be_bytes());
        data.extend_from_slice(*chunk_type);
        data.extend(std::iter::repeat(0).take(payload_len + 4));
    }
    data
}

fn ftyp(brand: &[u8; 4]) -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x00, 0x18];
    data.extend_from_slice(b"ftyp");
    data.extend_from_slice(brand);
    data.resize(24, 0);
    data
}

fn ogg_page(codec: &[u8]) -> Vec<u8> {
    let mut data = b"OggS".to_vec();
    data.resize(28, 0);
    data.extend_from_slice(codec);
    data.resize(36, 0);
    data
}

fn ebml(doc_type: &[u8]) -> Vec<u8> {
    let mut data = vec![0x1A, 0x45, 0xDF, 0xA3];
    data.push(0x80 | (3 + doc_type.len() as u8));
    data.extend_from_slice(&[0x42, 0x82]);
    data.push(0x80 | doc_type.len() as u8);
    data.extend_from_slice(doc_type);
    data
}

fn jp2_family(brand: &[u8; 4]) -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A];
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x14]);
    data.extend_from_slice(b"ftyp");
    data.extend_from_slice(brand);
    data
}

fn riff(form: &[u8; 4]) -> Vec<u8> {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&[0x20, 0x00, 0x00, 0x00]);
    data.extend_from_slice(form);
    data
}

fn tiff_le(ifd_offset: u32, tail: &[u8]) -> Vec<u8> {
    let mut data = vec![0x49, 0x49, 0x2A, 0x00];
    data.extend_from_slice(&ifd_offset.to_le_bytes());
    data.extend_from_slice(tail);
    data
}

fn tiff_with_tag(tag: u16) -> Vec<u8> {
    let mut tail = 1u16.to_le_bytes().to_vec();
    tail.extend_from_slice(&tag.to_le_bytes());
    tail.extend_from_slice(&[0u8; 10]);
    tiff_le(8, &tail)
}

const ASF_HEADER: [u8; 16] = [
    0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE,
    0x6C,
];
const ASF_STREAM_PROPERTIES: [u8; 16] = [
    0x91, 0x07, 0xDC, 0xB7, 0xB7, 0xA9, 0xCF, 0x11, 0x8E, 0xE6, 0x00, 0xC0, 0x0C, 0x20, 0x53,
    0x65,
];
const ASF_AUDIO_MEDIA: [u8; 16] = [
    0x40, 0x9E, 0x69, 0xF8, 0x4D, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44,
    0x2B,
];
const ASF_VIDEO_MEDIA: [u8; 16] = [
    0xC0, 0xEF, 0x19, 0xBC, 0x4D, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44,
    0x2B,
];

fn asf(stream_type: Option<[u8; 16]>) -> Vec<u8> {
    let mut data = ASF_HEADER.to_vec();
    data.resize(30, 0);
    if let Some(st) = stream_type {
        data.extend_from_slice(&ASF_STREAM_PROPERTIES);
        data.extend_from_slice(&(16 + 8 + 16u64).to_le_bytes());
        data.extend_from_slice(&st);
    }
    data
}

fn at_offset(offset: usize, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; offset];
    data.extend_from_slice(payload);
    data
}

fn id3_wrapping(inner: &[u8]) -> Vec<u8> {
    let mut data = b"ID3\x04\x00\x00".to_vec();
    // sync-safe tag length of 10, then 10 bytes of padding
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x0A]);
    data.extend_from_slice(&[0u8; 10]);
    data.extend_from_slice(inner);
    data
}

fn fixtures() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("3g2", ftyp(b"3g2a")),
        ("3gp", ftyp(b"3gp5")),
        (
            "3mf",
            zip_with_content_types(
                r#"<Types><Default Extension="model" ContentType="application/vnd.ms-package.3dmanufacturing-3dmodel+xml"/></Types>"#,
            ),
        ),
        ("7z", vec![0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, 0x00, 0x04]),
        ("Z", vec![0x1F, 0xA0, 0x00]),
        ("aac", vec![0xFF, 0xF1, 0x50, 0x80, 0x00, 0x1F]),
        ("ac3", vec![0x0B, 0x77, 0x00, 0x00]),
        ("ace", at_offset(7, b"**ACE**")),
        ("aif", b"FORM\x00\x00\x00\x00AIFF".to_vec()),
        ("alias", b"book\0\0\0\0mark\0\0\0\0".to_vec()),
        ("amr", b"#!AMR\n".to_vec()),
        ("ape", b"MAC \x96\x0F".to_vec()),
        ("apk", zip_with(&[("AndroidManifest.xml", b"m"), ("classes.dex", b"dex\n")])),
        ("apng", png_with_chunks(&[(b"IHDR", 13), (b"acTL", 8), (b"IDAT", 0)])),
        ("ar", b"!<arch>\nsomefile.txt/".to_vec()),
        ("arj", vec![0x60, 0xEA, 0x00]),
        ("arrow", b"ARROW1\x00\x00".to_vec()),
        ("arw", tiff_with_tag(50341)),
        ("asar", {
            let mut data = vec![0x04, 0x00, 0x00, 0x00];
            data.extend_from_slice(&[0u8; 8]);
            let json = br#"{"files": {}}"#;
            data.extend_from_slice(&(json.len() as u32).to_le_bytes());
            data.extend_from_slice(json);
            data
        }),
        ("asf", asf(None)),
        ("avi", riff(b"AVI ")),
        ("avif", ftyp(b"avif")),
        ("blend", b"BLENDER-v293".to_vec()),
        ("bmp", vec![0x42, 0x4D, 0x00, 0x00]),
        ("bpg", vec![0x42, 0x50, 0x47, 0xFB]),
        ("bz2", b"BZh91AY".to_vec()),
        ("cab", b"MSCF\x00\x00\x00\x00".to_vec()),
        ("cfb", vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
        ("chm", b"ITSF\x03\x00\x00\x00".to_vec()),
        ("class", vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x41]),
        ("cpio", vec![0xC7, 0x71, 0x00]),
        ("cr2", tiff_le(16, b"CR\x02\x00")),
        ("cr3", ftyp(b"crx ")),
        ("crx", b"Cr24\x03\x00\x00\x00".to_vec()),
        ("cur", vec![0x00, 0x00, 0x02, 0x00, 0x01, 0x00]),
        ("dcm", at_offset(128, b"DICM")),
        ("deb", b"!<arch>\ndebian-binary".to_vec()),
        ("dmg", vec![0x78, 0x01, 0x73, 0x0D]),
        ("dng", tiff_with_tag(50706)),
        ("docm", ooxml("application/vnd.ms-word.document.macroEnabled")),
        (
            "docx",
            ooxml("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        ),
        ("dotm", ooxml("application/vnd.ms-word.template.macroEnabledTemplate")),
        (
            "dotx",
            ooxml("application/vnd.openxmlformats-officedocument.wordprocessingml.template"),
        ),
        ("drc", b"DRACO\x02\x02".to_vec()),
        ("dsf", b"DSD \x1C\x00\x00\x00".to_vec()),
        ("dwg", b"AC1021".to_vec()),
        ("elf", vec![0x7F, 0x45, 0x4C, 0x46, 0x02]),
        ("eot", {
            let mut data = vec![0u8; 64];
            data[8] = 0x02;
            data[10] = 0x02;
            data[34] = b'L';
            data[35] = b'P';
            data
        }),
        ("eps", b"%!PS-Adobe-3.0 EPSF-3.0\n".to_vec()),
        ("epub", zip_with(&[("mimetype", b"application/epub+zip")])),
        ("exe", b"MZ\x90\x00".to_vec()),
        ("f4a", ftyp(b"F4A ")),
        ("f4b", ftyp(b"F4B ")),
        ("f4p", ftyp(b"F4P ")),
        ("f4v", ftyp(b"F4V ")),
        ("fbx", b"Kaydara FBX Binary\x20\x20\x00".to_vec()),
        ("flac", b"fLaC\x00\x00\x00\x22".to_vec()),
        ("flif", b"FLIF\x44".to_vec()),
        ("flv", vec![0x46, 0x4C, 0x56, 0x01, 0x05]),
        ("gif", b"GIF89a".to_vec()),
        ("glb", b"glTF\x02\x00\x00\x00".to_vec()),
        ("gz", gzip_of(b"just some text, not a tar archive")),
        ("heic", ftyp(b"heic")),
        ("icc", at_offset(36, b"acsp")),
        ("icns", b"icns\x00\x00\x01\x00".to_vec()),
        ("ico", vec![0x00, 0x00, 0x01, 0x00, 0x01, 0x00]),
        ("ics", b"BEGIN:VCALENDAR\r\n".to_vec()),
        (
            "indd",
            vec![
                0x06, 0x06, 0xED, 0xF5, 0xD8, 0x1D, 0x46, 0xE5, 0xBD, 0x31, 0xEF, 0xE7, 0xFE,
                0x74, 0xB7, 0x1D,
            ],
        ),
        ("it", b"IMPM songname".to_vec()),
        ("j2c", vec![0xFF, 0x4F, 0xFF, 0x51]),
        ("jar", zip_with(&[("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n")])),
        ("jls", vec![0xFF, 0xD8, 0xFF, 0xF7]),
        ("jp2", jp2_family(b"jp2 ")),
        ("jpg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F']),
        ("jpm", jp2_family(b"jpm ")),
        ("jpx", jp2_family(b"jpx ")),
        ("jxl", vec![0xFF, 0x0A, 0x00]),
        ("jxr", vec![0x49, 0x49, 0xBC, 0x01]),
        (
            "ktx",
            vec![0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A],
        ),
        ("lnk", {
            let mut data = vec![
                0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
            ];
            data.resize(76, 0);
            data
        }),
        ("lz", b"LZIP\x01\x0C".to_vec()),
        ("lz4", vec![0x04, 0x22, 0x4D, 0x18]),
        ("lzh", {
            let mut data = vec![0x26, 0x01];
            data.extend_from_slice(b"-lh5-");
            data
        }),
        ("m4a", ftyp(b"M4A ")),
        ("m4b", ftyp(b"M4B ")),
        ("m4p", ftyp(b"M4P ")),
        ("m4v", ftyp(b"M4V ")),
        ("macho", vec![0xCF, 0xFA, 0xED, 0xFE]),
        ("mid", b"MThd\x00\x00\x00\x06".to_vec()),
        ("mie", vec![0x7E, 0x10, 0x04, 0x00, b'M', b'I', b'E']),
        ("mj2", jp2_family(b"mjp2")),
        ("mkv", ebml(b"matroska")),
        ("mobi", at_offset(60, b"BOOKMOBI")),
        ("mov", b"\x00\x00\x00\x08free".to_vec()),
        ("mp1", vec![0xFF, 0xE6, 0x10, 0x00]),
        ("mp2", vec![0xFF, 0xE4, 0x10, 0x00]),
        ("mp3", vec![0xFF, 0xE2, 0x10, 0x00]),
        ("mp4", ftyp(b"isom")),
        ("mpc", b"MP+\x07".to_vec()),
        ("mpg", vec![0x00, 0x00, 0x01, 0xB3, 0x14, 0x00]),
        ("mts", {
            let mut data = vec![0u8; 189];
            data[0] = 0x47;
            data[188] = 0x47;
            data
        }),
        (
            "mxf",
            vec![
                0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01,
                0x02,
            ],
        ),
        ("nef", tiff_le(8, &[0x1C, 0x00, 0xFE, 0x00])),
        ("nes", vec![0x4E, 0x45, 0x53, 0x1A]),
        ("odp", zip_with(&[("mimetype", b"application/vnd.oasis.opendocument.presentation")])),
        ("ods", zip_with(&[("mimetype", b"application/vnd.oasis.opendocument.spreadsheet")])),
        ("odt", zip_with(&[("mimetype", b"application/vnd.oasis.opendocument.text")])),
        ("oga", ogg_page(b"\x7FFLAC\x01\x00\x00")),
        ("ogg", ogg_page(b"\x01vorbis\x00")),
        ("ogm", ogg_page(b"\x01video\x00")),
        ("ogv", ogg_page(b"\x80theora\x00")),
        ("ogx", ogg_page(b"????????")),
        ("opus", ogg_page(b"OpusHead")),
        (
            "orf",
            vec![0x49, 0x49, 0x52, 0x4F, 0x08, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00],
        ),
        ("otf", b"OTTO\x00".to_vec()),
        ("parquet", b"PAR1\x15\x00".to_vec()),
        ("pcap", vec![0xD4, 0xC3, 0xB2, 0xA1, 0x02, 0x00]),
        ("pdf", b"%PDF-1.7\n".to_vec()),
        ("pgp", b"-----BEGIN PGP MESSAGE-----\n".to_vec()),
        ("png", png_with_chunks(&[(b"IHDR", 13), (b"IDAT", 0)])),
        ("potm", ooxml("application/vnd.ms-powerpoint.template.macroEnabled")),
        (
            "potx",
            ooxml("application/vnd.openxmlformats-officedocument.presentationml.template"),
        ),
        ("ppsm", ooxml("application/vnd.ms-powerpoint.slideshow.macroEnabled")),
        (
            "ppsx",
            ooxml("application/vnd.openxmlformats-officedocument.presentationml.slideshow"),
        ),
        ("pptm", ooxml("application/vnd.ms-powerpoint.presentation.macroEnabled")),
        (
            "pptx",
            ooxml("application/vnd.openxmlformats-officedocument.presentationml.presentation"),
        ),
        ("ps", b"%! plain postscript\n".to_vec()),
        ("psd", b"8BPS\x00\x01".to_vec()),
        ("pst", b"!BDN\x00".to_vec()),
        ("qcp", riff(b"QLCM")),
        ("raf", b"FUJIFILMCCD-RAW ".to_vec()),
        ("rar", vec![0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00]),
        ("reg", b"REGEDIT4\r\n".to_vec()),
        ("regf", b"regf\x01\x00\x00\x00".to_vec()),
        ("rm", b".RMF\x00\x00\x00\x12".to_vec()),
        ("rpm", vec![0xED, 0xAB, 0xEE, 0xDB, 0x03]),
        ("rtf", b"{\\rtf1\\ansi".to_vec()),
        (
            "rw2",
            vec![0x49, 0x49, 0x55, 0x00, 0x18, 0x00, 0x00, 0x00, 0x88, 0xE7, 0x74, 0xD8],
        ),
        ("s3m", at_offset(44, b"SCRM")),
        ("shp", vec![0x00, 0x00, 0x27, 0x0A, 0x00, 0x00]),
        ("skp", {
            let mut data = vec![0xFF, 0xFE, 0xFF, 0x0E];
            for unit in "SketchUp Model".encode_utf16() {
                data.extend_from_slice(&unit.to_le_bytes());
            }
            data
        }),
        ("spx", ogg_page(b"Speex\x20\x20\x31")),
        ("sqlite", b"SQLi".to_vec()),
        ("stl", b"solid cube\n".to_vec()),
        ("swf", b"FWS\x06".to_vec()),
        ("tar", ustar_header("hello.txt")),
        ("tar.gz", {
            let mut tar = ustar_header("inner.txt");
            tar.extend_from_slice(&[0u8; 512]);
            gzip_of(&tar)
        }),
        ("tif", tiff_with_tag(0x0100)),
        ("ttc", b"ttcf\x00\x01\x00\x00".to_vec()),
        ("ttf", vec![0x00, 0x01, 0x00, 0x00, 0x00, 0x0F]),
        ("vcf", b"BEGIN:VCARD\r\n".to_vec()),
        ("voc", b"Creative Voice File\x1A".to_vec()),
        ("vtt", b"WEBVTT\n\n00:00.000 --> 00:01.000\nhi\n".to_vec()),
        ("wasm", vec![0x00, 0x61, 0x73, 0x6D, 0x01]),
        ("wav", riff(b"WAVE")),
        ("webm", ebml(b"webm")),
        ("webp", riff(b"WEBP")),
        ("wma", asf(Some(ASF_AUDIO_MEDIA))),
        ("wmv", asf(Some(ASF_VIDEO_MEDIA))),
        ("woff", b"wOFF\x00\x01\x00\x00".to_vec()),
        ("woff2", b"wOF2\x00\x01\x00\x00".to_vec()),
        ("wv", b"wvpk\x20\x00".to_vec()),
        ("xcf", b"gimp xcf v011".to_vec()),
        ("xlsm", ooxml("application/vnd.ms-excel.sheet.macroEnabled")),
        (
            "xlsx",
            ooxml("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        ),
        ("xltm", ooxml("application/vnd.ms-excel.template.macroEnabled")),
        (
            "xltx",
            ooxml("application/vnd.openxmlformats-officedocument.spreadsheetml.template"),
        ),
        ("xm", b"Extended Module: song".to_vec()),
        ("xml", b"<?xml version=\"1.0\"?>".to_vec()),
        ("xpi", zip_with(&[("META-INF/mozilla.rsa", b"\x30\x82")])),
        ("xz", vec![0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00]),
        ("zip", zip_with(&[("hello.txt", b"hello")])),
        ("zst", vec![0x28, 0xB5, 0x2F, 0xFD]),
    ]
}

#[test]
fn every_fixture_detects_its_extension() {
    for (expected_ext, data) in fixtures() {
        let ft = from_buffer(&data)
            .unwrap_or_else(|e| panic!("{expected_ext}: detection failed: {e}"))
            .unwrap_or_else(|| panic!("{expected_ext}: no result"));
        assert_eq!(ft.ext, expected_ext, "fixture for {expected_ext} detected as {}", ft.ext);
        assert!(
            is_supported_mime_type(ft.mime),
            "{expected_ext} produced uncatalogued mime {}",
            ft.mime
        );
    }
}

#[test]
fn every_catalogue_extension_is_covered() {
    let covered: BTreeSet<&str> = fixtures().iter().map(|(ext, _)| *ext).collect();
    for ext in supported_extensions() {
        assert!(covered.contains(ext), "no fixture for catalogue extension {ext}");
    }
}

#[test]
fn id3_wrapped_flac_detects_the_framed_stream() {
    let data = id3_wrapping(b"fLaC\x00\x00\x00\x22");
    let ft = from_buffer(&data).unwrap().unwrap();
    assert_eq!(ft.ext, "flac");
    assert_eq!(ft.mime, "audio/flac");
}

#[test]
fn id3_tag_covering_the_whole_file_is_lenient_mp3() {
    let mut data = b"ID3\x04\x00\x00".to_vec();
    data.extend_from_slice(&[0x00, 0x00, 0x07, 0x76]); // far larger than the file
    data.extend_from_slice(&[0u8; 10]);
    let ft = from_buffer(&data).unwrap().unwrap();
    assert_eq!(ft.ext, "mp3");
    assert_eq!(ft.mime, "audio/mpeg");
}

#[test]
fn gzip_of_non_tar_is_plain_gz() {
    let ft = from_buffer(&gzip_of(b"<?xml version=\"1.0\"?>")).unwrap().unwrap();
    assert_eq!(ft.ext, "gz");
    assert_eq!(ft.mime, "application/gzip");
}

#[test]
fn corrupt_gzip_is_still_gz() {
    let data = vec![0x1F, 0x8B, 0x08, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
    let ft = from_buffer(&data).unwrap().unwrap();
    assert_eq!(ft.ext, "gz");
}

#[test]
fn mime_values_match_expected_pairs() {
    let expectations: &[(&[u8], &str, &str)] = &[
        (&[0x42, 0x4D, 0x00, 0x00], "bmp", "image/bmp"),
        (b"fLaC\x00\x00", "flac", "audio/flac"),
        (&[0xFF, 0xD8, 0xFF, 0xE0], "jpg", "image/jpeg"),
        (b"%PDF-", "pdf", "application/pdf"),
        (b"<?xml ", "xml", "application/xml"),
    ];
    for (data, ext, mime) in expectations {
        let ft = from_buffer(data).unwrap().unwrap();
        assert_eq!(&ft.ext, ext);
        assert_eq!(&ft.mime, mime);
    }
}
