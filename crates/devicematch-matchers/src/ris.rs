//! Reduction-in-string (RIS) matcher: binary search for the registered
//! string sharing the longest common prefix with the needle.
//!
//! The collection must be sorted in ascending lexicographic (byte) order.
//! A candidate qualifies when its common-prefix length reaches `tolerance`;
//! among equally good candidates the lexicographically smallest wins, which
//! keeps the result independent of the binary search's probe sequence.

/// Length of the longest common byte prefix of `a` and `b`.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Search `collection` (sorted ascending) for the entry with the longest
/// common prefix with `needle`, requiring at least `tolerance` matching
/// bytes. Returns `None` when nothing qualifies.
pub fn search<'a, S: AsRef<str>>(
    collection: &'a [S],
    needle: &str,
    tolerance: usize,
) -> Option<&'a str> {
    if collection.is_empty() {
        return None;
    }

    let mut low: i64 = 0;
    let mut high: i64 = collection.len() as i64 - 1;
    let mut best_index = 0usize;
    let mut best_len = 0usize;
    let mut found = false;

    while low <= high {
        let mid = ((low + high) / 2) as usize;
        let probe = collection[mid].as_ref();
        let len = common_prefix_len(needle, probe);
        if len >= tolerance && len > best_len {
            best_index = mid;
            best_len = len;
            found = true;
        }
        // Narrow using string order, not prefix length, so the probe walks
        // toward where the needle would sort.
        match needle.cmp(probe) {
            std::cmp::Ordering::Greater => low = mid as i64 + 1,
            std::cmp::Ordering::Less => high = mid as i64 - 1,
            std::cmp::Ordering::Equal => break,
        }
    }

    if !found || best_len < tolerance {
        return None;
    }

    // Binary search lands on *some* qualifying entry; adjacent entries may
    // tie at the same prefix length. Scan back to the leftmost tie so the
    // result is deterministic.
    while best_index > 0
        && common_prefix_len(collection[best_index - 1].as_ref(), needle) == best_len
    {
        best_index -= 1;
    }
    Some(collection[best_index].as_ref())
}
