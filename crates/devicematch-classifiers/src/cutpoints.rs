//! Cut-point derivation for conclusive matching.
//!
//! Each family derives a prefix tolerance from landmarks in the normalized
//! user agent before delegating to the shared search primitives. These are
//! the landmark helpers: every function returns a byte offset into the
//! string, falling back to the string length (or a stated default) when the
//! landmark is absent.

/// Byte offset of the first `/`, or the string length.
pub fn first_slash(s: &str) -> usize {
    s.find('/').unwrap_or(s.len())
}

/// Byte offset of the second `/`. Falls back to the first slash when there
/// is only one, and to the string length when there is none.
pub fn second_slash(s: &str) -> usize {
    match s.find('/') {
        None => s.len(),
        Some(first) => match s[first + 1..].find('/') {
            Some(rel) => first + 1 + rel,
            None => first,
        },
    }
}

/// Byte offset of the first space, or the string length.
pub fn first_space(s: &str) -> usize {
    s.find(' ').unwrap_or(s.len())
}

/// Byte offset of the `ordinal`-th (1-based) occurrence of `needle`.
pub fn ordinal_index_of(s: &str, needle: &str, ordinal: usize) -> Option<usize> {
    if needle.is_empty() || ordinal == 0 {
        return None;
    }
    let mut from = 0;
    let mut found = 0;
    while let Some(rel) = s[from..].find(needle) {
        let at = from + rel;
        found += 1;
        if found == ordinal {
            return Some(at);
        }
        from = at + needle.len();
    }
    None
}

/// Byte offset of `needle` at or after `start`, or the string length.
pub fn index_of_or_len(s: &str, needle: &str, start: usize) -> usize {
    if start >= s.len() {
        return s.len();
    }
    match s[start..].find(needle) {
        Some(rel) => start + rel,
        None => s.len(),
    }
}

/// Smallest byte offset of any of `needles` at or after `start`, or the
/// string length.
pub fn index_of_any_or_len(s: &str, needles: &[&str], start: usize) -> usize {
    needles
        .iter()
        .map(|n| index_of_or_len(s, n, start))
        .min()
        .unwrap_or(s.len())
}

/// Largest char boundary at or below `index`. Landmark offsets are always
/// boundaries, but fixed-width windows past them may land inside a
/// multi-byte character.
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_landmarks() {
        assert_eq!(first_slash("Nokia6680/1.0"), 9);
        assert_eq!(first_slash("no slash"), 8);
        assert_eq!(second_slash("SEC-SGH/1.0/WAP2.0"), 11);
        assert_eq!(second_slash("Nokia6680/1.0"), 9);
        assert_eq!(second_slash("nothing"), 7);
    }

    #[test]
    fn ordinal_occurrences() {
        let ua = "Mozilla/5.0 (Linux; U; en-us; sdk Build)";
        assert_eq!(ordinal_index_of(ua, ";", 1), Some(18));
        assert_eq!(ordinal_index_of(ua, ";", 3), Some(28));
        assert_eq!(ordinal_index_of(ua, ";", 4), None);
        assert_eq!(ordinal_index_of(ua, "", 1), None);
    }

    #[test]
    fn index_or_length_is_absolute() {
        let ua = "Sanyo MobilePhone SCP-588/1.0";
        let idx = ua.find("MobilePhone").unwrap();
        assert_eq!(index_of_or_len(ua, "/", idx), 25);
        assert_eq!(index_of_or_len(ua, "#", idx), ua.len());
        assert_eq!(index_of_or_len(ua, "/", 999), ua.len());
    }

    #[test]
    fn any_landmark_takes_the_earliest() {
        let ua = "Mozilla/5.0 Nokia200/2.0 (S40OviBrowser)";
        let idx = ua.find("Nokia").unwrap();
        assert_eq!(index_of_any_or_len(ua, &["/", " "], idx), 20);
        assert_eq!(index_of_any_or_len(ua, &["#", "@"], idx), ua.len());
    }

    #[test]
    fn boundary_clamping() {
        let s = "abcé";
        assert_eq!(floor_char_boundary(s, 4), 3);
        assert_eq!(floor_char_boundary(s, 3), 3);
        assert_eq!(floor_char_boundary(s, 99), s.len());
    }
}
