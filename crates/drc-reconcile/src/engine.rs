//! The matching algorithm.

use std::collections::BTreeMap;

use drc_detect::{filter_drawing_files, normalize_key_with};
use drc_model::{ComparisonResult, DeliveredFile, ValidationRow};
use rapidfuzz::distance::jaro_winkler;
use tracing::debug;

/// Minimum Jaro-Winkler similarity for the fuzzy fallback to claim a file.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.88;

/// Substring containment only counts when both keys are at least this long;
/// very short keys are contained in almost anything.
const MIN_SUBSTRING_KEY_LEN: usize = 4;

/// Tuning knobs for one reconciliation run.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Strip trailing revision suffixes (`_RevA`, `-REV01`) when keying.
    pub strip_revision: bool,
    /// Enable the fuzzy fallback after the exact pass.
    pub fuzzy: bool,
    /// Similarity threshold for the fuzzy fallback.
    pub fuzzy_threshold: f64,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            strip_revision: true,
            fuzzy: true,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// Compares register entries against delivered files.
///
/// Delivered files first pass the drawing-file filter. Each expected entry
/// (in extraction order) probes an exact normalized-key lookup, then the
/// fuzzy fallback over unclaimed files. Unclaimed survivors are appended as
/// extras in delivered order.
///
/// Duplicate expected names: the first occurrence claims the file; later
/// occurrences can only claim a *different* unclaimed file, otherwise they
/// are To Do. Key collisions among delivered files keep first-seen in the
/// exact lookup, but colliding files stay reachable through the fallback,
/// so none are silently dropped.
///
/// Never fails: empty inputs yield an empty result with a zero summary.
pub fn reconcile(
    expected: &[String],
    delivered: &[DeliveredFile],
    options: &ReconcileOptions,
) -> ComparisonResult {
    let candidates = filter_drawing_files(delivered);
    let keys: Vec<String> = candidates
        .iter()
        .map(|file| normalize_key_with(&file.name, options.strip_revision))
        .collect();

    let mut by_key: BTreeMap<&str, usize> = BTreeMap::new();
    for (index, key) in keys.iter().enumerate() {
        if !key.is_empty() {
            by_key.entry(key.as_str()).or_insert(index);
        }
    }

    let mut claimed = vec![false; candidates.len()];
    let mut rows = Vec::with_capacity(expected.len() + candidates.len());

    for name in expected {
        let key = normalize_key_with(name, options.strip_revision);
        let exact = by_key
            .get(key.as_str())
            .copied()
            .filter(|&index| !key.is_empty() && !claimed[index]);
        let matched = exact.or_else(|| fallback_match(&key, &keys, &claimed, options));
        match matched {
            Some(index) => {
                claimed[index] = true;
                rows.push(ValidationRow::done(
                    name.clone(),
                    candidates[index].name.clone(),
                ));
            }
            None => rows.push(ValidationRow::todo(name.clone())),
        }
    }

    for (index, file) in candidates.iter().enumerate() {
        if !claimed[index] {
            rows.push(ValidationRow::extra(file.name.clone()));
        }
    }

    let result = ComparisonResult::new(rows);
    debug!(
        total = result.summary.total,
        done = result.summary.done,
        todo = result.summary.todo,
        extra = result.summary.extra,
        "reconciled register"
    );
    result
}

/// Best unclaimed candidate above the similarity threshold, or `None`.
/// Earlier candidates win ties.
fn fallback_match(
    key: &str,
    keys: &[String],
    claimed: &[bool],
    options: &ReconcileOptions,
) -> Option<usize> {
    if !options.fuzzy || key.is_empty() {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in keys.iter().enumerate() {
        if claimed[index] || candidate.is_empty() {
            continue;
        }
        let score = pair_similarity(key, candidate);
        if score < options.fuzzy_threshold {
            continue;
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Substring containment of sufficiently long keys is a certain match;
/// otherwise Jaro-Winkler similarity.
///
/// Keys that both end in a sheet number never match when those numbers
/// disagree: `abc-def-002` and `abc-def-001` are distinct drawings no matter
/// how similar the prefix makes them look to Jaro-Winkler.
fn pair_similarity(a: &str, b: &str) -> f64 {
    if let (Some(x), Some(y)) = (numeric_tail(a), numeric_tail(b)) {
        if x.trim_start_matches('0') != y.trim_start_matches('0') {
            return 0.0;
        }
    }
    if a.len() >= MIN_SUBSTRING_KEY_LEN
        && b.len() >= MIN_SUBSTRING_KEY_LEN
        && (a.contains(b) || b.contains(a))
    {
        return 1.0;
    }
    jaro_winkler::similarity(a.chars(), b.chars())
}

/// The final `-`-separated segment when it is all digits.
fn numeric_tail(key: &str) -> Option<&str> {
    let tail = key.rsplit('-').next()?;
    if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
        Some(tail)
    } else {
        None
    }
}
