//! Filename key normalization.
//!
//! `normalize_key` canonicalizes a raw file name or register entry into a
//! comparable key: trimmed, lower-cased, known extensions stripped, separator
//! runs collapsed to a single `-`, and (optionally) a trailing revision
//! suffix such as `_RevA` or `-REV01` removed. The function is total and
//! idempotent; `"ABC-DEF-123_RevA.pdf"` and `"abc-def-123.dwg"` produce the
//! same key.

/// Extensions recognised when stripping a trailing extension. Broader than
/// the drawing-file allow list: register entries sometimes carry document or
/// image extensions that still need to compare equal.
const STRIPPABLE_EXTENSIONS: &[&str] = &[
    "pdf", "dwg", "dxf", "dgn", "dwf", "dwfx", "rvt", "rfa", "ifc", "nwd", "nwc", "skp", "stp",
    "step", "igs", "iges", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "csv", "jpg",
    "jpeg", "png", "tif", "tiff", "bmp", "zip", "rar", "7z",
];

/// Normalizes a name into a comparable key with revision stripping enabled.
pub fn normalize_key(raw: &str) -> String {
    normalize_key_with(raw, true)
}

/// Normalizes a name into a comparable key.
///
/// Runs the strip/collapse pass to a fixpoint, so the result is idempotent
/// for arbitrary input (stripping one extension can expose another, as in
/// `"plan.pdf.pdf"`).
pub fn normalize_key_with(raw: &str, strip_revision: bool) -> String {
    let mut key = raw.trim().to_lowercase();
    loop {
        let next = normalize_pass(&key, strip_revision);
        if next == key {
            return next;
        }
        key = next;
    }
}

/// Returns true if the value ends in a recognised file extension.
pub fn has_known_extension(value: &str) -> bool {
    known_extension_start(&value.trim().to_lowercase()).is_some()
}

pub(crate) fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

fn normalize_pass(input: &str, strip_revision: bool) -> String {
    let mut key = input.to_string();
    while let Some(start) = known_extension_start(&key) {
        key.truncate(start);
        let trimmed = key.trim_end().len();
        key.truncate(trimmed);
    }
    let mut key = collapse_separators(&key);
    if strip_revision {
        while let Some(start) = revision_suffix_start(&key) {
            key.truncate(start);
            let trimmed = key.trim_end_matches(is_separator).len();
            key.truncate(trimmed);
        }
    }
    key
}

/// Byte offset of the final `.` when the tail after it is a known extension.
fn known_extension_start(key: &str) -> Option<usize> {
    let dot = key.rfind('.')?;
    let ext = &key[dot + 1..];
    if STRIPPABLE_EXTENSIONS.contains(&ext) {
        Some(dot)
    } else {
        None
    }
}

/// Byte offset where a trailing revision marker begins.
///
/// Matches `<sep>rev<sep?><1-3 alphanumerics>` at the end of the key, which
/// covers `_Rev01`, `-REVA`, and `rev 2` style suffixes after lowering.
fn revision_suffix_start(key: &str) -> Option<usize> {
    let idx = key.rfind("rev")?;
    if idx == 0 {
        return None;
    }
    let before = key[..idx].chars().next_back()?;
    if !is_separator(before) {
        return None;
    }
    let tail = &key[idx + 3..];
    let tail = tail.strip_prefix(is_separator).unwrap_or(tail);
    if tail.is_empty() || tail.len() > 3 || !tail.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(idx)
}

/// Collapses runs of spaces, underscores, and hyphens to a single `-` and
/// drops leading/trailing separators.
fn collapse_separators(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut pending = false;
    for c in key.chars() {
        if is_separator(c) {
            if !out.is_empty() {
                pending = true;
            }
        } else {
            if pending {
                out.push('-');
                pending = false;
            }
            out.push(c);
        }
    }
    out
}
