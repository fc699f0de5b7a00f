//! Delivered-file noise filter.
//!
//! Decides whether an uploaded file looks like a project deliverable rather
//! than OS metadata, thumbnails, or stray documents. Only the file name is
//! considered; subdirectory placement carries no signal.

use drc_model::DeliveredFile;
use tracing::debug;

/// Extension allow list for deliverables: drawing/model formats plus the
/// document formats registers routinely track. Deliberately excludes plain
/// text and image formats.
const DRAWING_EXTENSIONS: &[&str] = &[
    "pdf", "dwg", "dxf", "dgn", "dwf", "dwfx", "rvt", "rfa", "ifc", "nwd", "nwc", "skp", "stp",
    "step", "igs", "iges", "doc", "docx", "xls", "xlsx",
];

/// OS metadata files rejected outright.
const JUNK_NAMES: &[&str] = &["thumbs.db", "desktop.ini", ".ds_store"];

const MIN_STEM_LEN: usize = 5;
const MAX_STEM_LEN: usize = 80;

/// Returns true if `name` (path already stripped) looks like a real project
/// drawing or deliverable.
///
/// A name with an allow-listed extension needs at least two
/// hyphen/underscore-delimited segments and a plausible stem length. A name
/// without any extension is accepted only when the structured pattern is
/// strong (three or more segments).
pub fn is_drawing_file(name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    let lower = name.to_lowercase();
    if JUNK_NAMES.contains(&lower.as_str()) {
        return false;
    }
    // Hidden files and Office lock files.
    if name.starts_with('.') || name.starts_with("~$") {
        return false;
    }

    match split_extension(&lower) {
        Some((stem, ext)) => {
            DRAWING_EXTENSIONS.contains(&ext)
                && stem_length_ok(stem)
                && structured_segment_count(stem) >= 2
        }
        None => stem_length_ok(&lower) && structured_segment_count(&lower) >= 3,
    }
}

/// Filters an uploaded file set down to plausible deliverables, preserving
/// input order. Zero survivors is a normal outcome, not an error.
pub fn filter_drawing_files(files: &[DeliveredFile]) -> Vec<DeliveredFile> {
    let kept: Vec<DeliveredFile> = files
        .iter()
        .filter(|file| is_drawing_file(&file.name))
        .cloned()
        .collect();
    debug!(
        uploaded = files.len(),
        kept = kept.len(),
        "filtered delivered files"
    );
    kept
}

/// Splits `name.ext` into stem and extension, when an extension exists.
fn split_extension(name: &str) -> Option<(&str, &str)> {
    let dot = name.rfind('.')?;
    if dot == 0 || dot + 1 == name.len() {
        return None;
    }
    let ext = &name[dot + 1..];
    if ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some((&name[..dot], ext))
    } else {
        None
    }
}

fn stem_length_ok(stem: &str) -> bool {
    (MIN_STEM_LEN..=MAX_STEM_LEN).contains(&stem.chars().count())
}

/// Counts hyphen/underscore-delimited segments that carry at least one
/// alphanumeric character.
pub(crate) fn structured_segment_count(stem: &str) -> usize {
    stem.split(['-', '_'])
        .filter(|segment| segment.chars().any(|c| c.is_ascii_alphanumeric()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_names_with_drawing_extensions_pass() {
        assert!(is_drawing_file("ABC-DEF-001.pdf"));
        assert!(is_drawing_file("XX_YY_100.dwg"));
        assert!(is_drawing_file("EXTRA-FILE-999.PDF"));
    }

    #[test]
    fn unstructured_or_wrong_extension_fails() {
        assert!(!is_drawing_file("random.txt"));
        assert!(!is_drawing_file("notes.pdf")); // single segment
        assert!(!is_drawing_file("photo-of-site.jpg"));
    }

    #[test]
    fn os_junk_is_rejected() {
        assert!(!is_drawing_file(".DS_Store"));
        assert!(!is_drawing_file("Thumbs.db"));
        assert!(!is_drawing_file("desktop.ini"));
        assert!(!is_drawing_file("~$register.xlsx"));
    }

    #[test]
    fn extensionless_names_need_a_strong_pattern() {
        assert!(is_drawing_file("ABC-DEF-001"));
        assert!(!is_drawing_file("ABC-001"));
        assert!(!is_drawing_file("README"));
    }

    #[test]
    fn stem_length_bounds_apply() {
        assert!(!is_drawing_file("A-1.pdf"));
        let long = format!("{}-01.pdf", "X".repeat(90));
        assert!(!is_drawing_file(&long));
    }

    #[test]
    fn filter_preserves_order_and_handles_empty_input() {
        let files = vec![
            DeliveredFile::from_path("sub/ABC-DEF-002.dwg"),
            DeliveredFile::from_path("random.txt"),
            DeliveredFile::from_path("ABC-DEF-001.pdf"),
        ];
        let kept = filter_drawing_files(&files);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "ABC-DEF-002.dwg");
        assert_eq!(kept[1].name, "ABC-DEF-001.pdf");

        assert!(filter_drawing_files(&[]).is_empty());
    }
}
