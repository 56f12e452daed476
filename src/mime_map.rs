//! Mapping from archive-embedded media-type strings to catalogue entries.
//!
//! ZIP-framed document formats name their concrete type inside the archive:
//! the ODF family in a `mimetype` entry, OOXML in the `ContentType` of the
//! main part inside `[Content_Types].xml`, 3MF likewise. This module is the
//! closed lookup from those strings to detection results.
//!
//! The OOXML capture arrives without the `.main+xml` suffix; macro-enabled
//! Office types additionally canonicalize with a `.12` suffix on the stored
//! media type.

use crate::catalog::FileTypeResult;

/// Resolve an archive-embedded media-type string, already trimmed.
pub(crate) fn from_archive_media_type(mime: &str) -> Option<FileTypeResult> {
    let ft = match mime {
        "application/epub+zip" => FileTypeResult::new("epub", "application/epub+zip"),
        "application/vnd.oasis.opendocument.text" => {
            FileTypeResult::new("odt", "application/vnd.oasis.opendocument.text")
        }
        "application/vnd.oasis.opendocument.spreadsheet" => {
            FileTypeResult::new("ods", "application/vnd.oasis.opendocument.spreadsheet")
        }
        "application/vnd.oasis.opendocument.presentation" => {
            FileTypeResult::new("odp", "application/vnd.oasis.opendocument.presentation")
        }
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            FileTypeResult::new(
                "docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            )
        }
        "application/vnd.openxmlformats-officedocument.wordprocessingml.template" => {
            FileTypeResult::new(
                "dotx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.template",
            )
        }
        "application/vnd.ms-word.document.macroEnabled" => {
            FileTypeResult::new("docm", "application/vnd.ms-word.document.macroEnabled.12")
        }
        "application/vnd.ms-word.template.macroEnabledTemplate" => {
            FileTypeResult::new("dotm", "application/vnd.ms-word.template.macroEnabled.12")
        }
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
            FileTypeResult::new(
                "xlsx",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            )
        }
        "application/vnd.openxmlformats-officedocument.spreadsheetml.template" => {
            FileTypeResult::new(
                "xltx",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.template",
            )
        }
        "application/vnd.ms-excel.sheet.macroEnabled" => {
            FileTypeResult::new("xlsm", "application/vnd.ms-excel.sheet.macroEnabled.12")
        }
        "application/vnd.ms-excel.template.macroEnabled" => {
            FileTypeResult::new("xltm", "application/vnd.ms-excel.template.macroEnabled.12")
        }
        "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
            FileTypeResult::new(
                "pptx",
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            )
        }
        "application/vnd.openxmlformats-officedocument.presentationml.template" => {
            FileTypeResult::new(
                "potx",
                "application/vnd.openxmlformats-officedocument.presentationml.template",
            )
        }
        "application/vnd.openxmlformats-officedocument.presentationml.slideshow" => {
            FileTypeResult::new(
                "ppsx",
                "application/vnd.openxmlformats-officedocument.presentationml.slideshow",
            )
        }
        "application/vnd.ms-powerpoint.presentation.macroEnabled" => FileTypeResult::new(
            "pptm",
            "application/vnd.ms-powerpoint.presentation.macroEnabled.12",
        ),
        "application/vnd.ms-powerpoint.template.macroEnabled" => {
            FileTypeResult::new("potm", "application/vnd.ms-powerpoint.template.macroEnabled.12")
        }
        "application/vnd.ms-powerpoint.slideshow.macroEnabled" => {
            FileTypeResult::new("ppsm", "application/vnd.ms-powerpoint.slideshow.macroEnabled.12")
        }
        "application/vnd.ms-package.3dmanufacturing-3dmodel+xml" => {
            FileTypeResult::new("3mf", "model/3mf")
        }
        _ => return None,
    };
    Some(ft)
}
