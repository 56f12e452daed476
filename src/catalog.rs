//! The closed catalogue of detectable file types.
//!
//! Detection only ever produces `{extension, media type}` pairs listed here.
//! The tables are sorted so membership queries are a binary search and so the
//! published lists read in a stable order.

use serde::Serialize;
use std::fmt;

/// A detected file type: an extension and a media type, both drawn from the
/// catalogue. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTypeResult {
    /// Canonical extension, without the leading dot (e.g. `"png"`).
    pub ext: &'static str,
    /// Media type (e.g. `"image/png"`).
    pub mime: &'static str,
}

impl FileTypeResult {
    /// Pair an extension with a media type. Built-in detection only ever
    /// produces catalogue pairs; custom detectors may mint their own.
    pub const fn new(ext: &'static str, mime: &'static str) -> Self {
        Self { ext, mime }
    }
}

impl fmt::Display for FileTypeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ext, self.mime)
    }
}

/// Every extension detection can report, sorted lexicographically.
pub const EXTENSIONS: &[&str] = &[
    "3g2", "3gp", "3mf", "7z", "Z", "aac", "ac3", "ace", "aif", "alias", "amr", "ape", "apk",
    "apng", "ar", "arj", "arrow", "arw", "asar", "asf", "avi", "avif", "blend", "bmp", "bpg",
    "bz2", "cab", "cfb", "chm", "class", "cpio", "cr2", "cr3", "crx", "cur", "dcm", "deb", "dmg",
    "dng", "docm", "docx", "dotm", "dotx", "drc", "dsf", "dwg", "elf", "eot", "eps", "epub",
    "exe", "f4a", "f4b", "f4p", "f4v", "fbx", "flac", "flif", "flv", "gif", "glb", "gz", "heic",
    "icc", "icns", "ico", "ics", "indd", "it", "j2c", "jar", "jls", "jp2", "jpg", "jpm", "jpx",
    "jxl", "jxr", "ktx", "lnk", "lz", "lz4", "lzh", "m4a", "m4b", "m4p", "m4v", "macho", "mid",
    "mie", "mj2", "mkv", "mobi", "mov", "mp1", "mp2", "mp3", "mp4", "mpc", "mpg", "mts", "mxf",
    "nef", "nes", "odp", "ods", "odt", "oga", "ogg", "ogm", "ogv", "ogx", "opus", "orf", "otf",
    "parquet", "pcap", "pdf", "pgp", "png", "potm", "potx", "ppsm", "ppsx", "pptm", "pptx", "ps",
    "psd", "pst", "qcp", "raf", "rar", "reg", "regf", "rm", "rpm", "rtf", "rw2", "s3m", "shp",
    "skp", "spx", "sqlite", "stl", "swf", "tar", "tar.gz", "tif", "ttc", "ttf", "vcf", "voc",
    "vtt", "wasm", "wav", "webm", "webp", "wma", "wmv", "woff", "woff2", "wv", "xcf", "xlsm",
    "xlsx", "xltm", "xltx", "xm", "xml", "xpi", "xz", "zip", "zst",
];

/// Every media type detection can report, sorted lexicographically.
pub const MIME_TYPES: &[&str] = &[
    "application/dicom",
    "application/eps",
    "application/epub+zip",
    "application/gzip",
    "application/java-archive",
    "application/java-vm",
    "application/mxf",
    "application/ogg",
    "application/pdf",
    "application/pgp-encrypted",
    "application/postscript",
    "application/rtf",
    "application/vnd.android.package-archive",
    "application/vnd.google.draco",
    "application/vnd.iccprofile",
    "application/vnd.ms-asf",
    "application/vnd.ms-cab-compressed",
    "application/vnd.ms-excel.sheet.macroEnabled.12",
    "application/vnd.ms-excel.template.macroEnabled.12",
    "application/vnd.ms-fontobject",
    "application/vnd.ms-htmlhelp",
    "application/vnd.ms-outlook",
    "application/vnd.ms-powerpoint.presentation.macroEnabled.12",
    "application/vnd.ms-powerpoint.slideshow.macroEnabled.12",
    "application/vnd.ms-powerpoint.template.macroEnabled.12",
    "application/vnd.ms-word.document.macroEnabled.12",
    "application/vnd.ms-word.template.macroEnabled.12",
    "application/vnd.oasis.opendocument.presentation",
    "application/vnd.oasis.opendocument.spreadsheet",
    "application/vnd.oasis.opendocument.text",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.openxmlformats-officedocument.presentationml.slideshow",
    "application/vnd.openxmlformats-officedocument.presentationml.template",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.template",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.template",
    "application/vnd.rn-realmedia",
    "application/vnd.sketchup.skp",
    "application/vnd.tcpdump.pcap",
    "application/wasm",
    "application/x-7z-compressed",
    "application/x-ace-compressed",
    "application/x-apache-arrow",
    "application/x-apple-diskimage",
    "application/x-arj",
    "application/x-asar",
    "application/x-blender",
    "application/x-bzip2",
    "application/x-cfb",
    "application/x-compress",
    "application/x-cpio",
    "application/x-deb",
    "application/x-elf",
    "application/x-esri-shape",
    "application/x-google-chrome-extension",
    "application/x-indesign",
    "application/x-lz4",
    "application/x-lzh-compressed",
    "application/x-lzip",
    "application/x-mach-binary",
    "application/x-mie",
    "application/x-mobipocket-ebook",
    "application/x-ms-regedit",
    "application/x-ms-regf",
    "application/x-msdownload",
    "application/x-nintendo-nes-rom",
    "application/x-parquet",
    "application/x-rar-compressed",
    "application/x-rpm",
    "application/x-shockwave-flash",
    "application/x-sqlite3",
    "application/x-tar",
    "application/x-unix-archive",
    "application/x-xpinstall",
    "application/x-xz",
    "application/x.apple.alias",
    "application/x.autodesk.fbx",
    "application/x.ms.shortcut",
    "application/xml",
    "application/zip",
    "application/zstd",
    "audio/aac",
    "audio/aiff",
    "audio/amr",
    "audio/ape",
    "audio/flac",
    "audio/midi",
    "audio/mp4",
    "audio/mpeg",
    "audio/ogg",
    "audio/opus",
    "audio/qcelp",
    "audio/vnd.dolby.dd-raw",
    "audio/vnd.wave",
    "audio/wavpack",
    "audio/x-dsf",
    "audio/x-it",
    "audio/x-m4a",
    "audio/x-ms-wma",
    "audio/x-musepack",
    "audio/x-s3m",
    "audio/x-voc",
    "audio/x-xm",
    "font/collection",
    "font/otf",
    "font/ttf",
    "font/woff",
    "font/woff2",
    "image/apng",
    "image/avif",
    "image/bmp",
    "image/bpg",
    "image/flif",
    "image/gif",
    "image/heic",
    "image/heic-sequence",
    "image/heif",
    "image/heif-sequence",
    "image/icns",
    "image/j2c",
    "image/jls",
    "image/jp2",
    "image/jpeg",
    "image/jpm",
    "image/jpx",
    "image/jxl",
    "image/ktx",
    "image/png",
    "image/tiff",
    "image/vnd.adobe.photoshop",
    "image/vnd.dwg",
    "image/vnd.ms-photo",
    "image/webp",
    "image/x-adobe-dng",
    "image/x-canon-cr2",
    "image/x-canon-cr3",
    "image/x-fujifilm-raf",
    "image/x-icon",
    "image/x-nikon-nef",
    "image/x-olympus-orf",
    "image/x-panasonic-rw2",
    "image/x-sony-arw",
    "image/x-xcf",
    "model/3mf",
    "model/gltf-binary",
    "model/stl",
    "text/calendar",
    "text/vcard",
    "text/vtt",
    "video/3gpp",
    "video/3gpp2",
    "video/MP1S",
    "video/MP2P",
    "video/mj2",
    "video/mp2t",
    "video/mp4",
    "video/mpeg",
    "video/ogg",
    "video/quicktime",
    "video/vnd.avi",
    "video/webm",
    "video/x-flv",
    "video/x-m4v",
    "video/x-matroska",
    "video/x-ms-asf",
];

/// The sorted list of extensions detection can report.
pub fn supported_extensions() -> &'static [&'static str] {
    EXTENSIONS
}

/// The sorted list of media types detection can report.
pub fn supported_mime_types() -> &'static [&'static str] {
    MIME_TYPES
}

/// Whether `ext` (without leading dot) is in the catalogue.
pub fn is_supported_extension(ext: &str) -> bool {
    EXTENSIONS.binary_search(&ext).is_ok()
}

/// Whether `mime` is in the catalogue.
pub fn is_supported_mime_type(mime: &str) -> bool {
    MIME_TYPES.binary_search(&mime).is_ok()
}
