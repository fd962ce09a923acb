//! Levenshtein-distance (LD) matcher: linear scan with length pruning and a
//! ratcheting tolerance.
//!
//! Candidates whose length differs from the needle's by more than the
//! initial tolerance cannot possibly qualify and are skipped without
//! computing the distance. Once a candidate is accepted the tolerance
//! ratchets down to `distance - 1`, so only strictly better candidates can
//! replace it; scanning the caller-supplied order (sorted in practice)
//! makes the result deterministic.

/// Levenshtein distance between `a` and `b` over bytes, computed with the
/// standard two-row recurrence. Insertion, deletion, and substitution all
/// cost 1.
pub fn distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut cur = vec![0usize; a.len() + 1];

    for (j, &bj) in b.iter().enumerate() {
        cur[0] = j + 1;
        for (i, &ai) in a.iter().enumerate() {
            let cost = usize::from(ai != bj);
            cur[i + 1] = (prev[i + 1] + 1).min(cur[i] + 1).min(prev[i] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[a.len()]
}

/// Scan `collection` for the entry closest to `needle` within `tolerance`
/// edits. Returns `None` when nothing comes close enough.
pub fn search<'a, S: AsRef<str>>(
    collection: &'a [S],
    needle: &str,
    tolerance: usize,
) -> Option<&'a str> {
    let mut best = tolerance as i64;
    let mut matched: Option<&str> = None;
    let needle_len = needle.len();

    for candidate in collection {
        let candidate = candidate.as_ref();
        let diff = candidate.len().abs_diff(needle_len);
        if diff > tolerance {
            continue;
        }
        let current = distance(needle, candidate);
        if current as i64 <= best {
            best = current as i64 - 1;
            matched = Some(candidate);
        }
    }
    matched
}
