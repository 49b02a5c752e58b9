//! Edit-distance similarity scores on a 0-100 scale.
//!
//! Both scores operate on the raw strings as received (no normalization) and
//! count Unicode scalar values, not bytes. They are symmetric and an exact
//! match always scores 100.

/// Whole-string similarity: `100 * (1 - levenshtein(a, b) / max(len(a), len(b)))`,
/// rounded to the nearest integer.
///
/// Two empty strings are identical and score 100.
///
/// ```rust
/// use canonical::ratio;
///
/// assert_eq!(ratio("Manager", "Manager"), 100);
/// assert_eq!(ratio("Managar", "Manager"), 86);
/// ```
pub fn ratio(a: &str, b: &str) -> u8 {
    to_percent(strsim::normalized_levenshtein(a, b))
}

/// Best-alignment substring similarity.
///
/// The shorter string is slid over every window of the longer string that has
/// the same length, and the highest [`ratio`] wins. When exactly one side is
/// empty the score is 0.
///
/// ```rust
/// use canonical::partial_ratio;
///
/// assert_eq!(partial_ratio("Software Eng", "Software Engineer"), 100);
/// assert_eq!(partial_ratio("SW Eng", "Software Engineer"), 67);
/// ```
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, short_len, longer) = if a_len <= b_len {
        (a, a_len, b)
    } else {
        (b, b_len, a)
    };

    if short_len == 0 {
        return if a_len == b_len { 100 } else { 0 };
    }
    if a_len == b_len {
        return ratio(a, b);
    }

    let longer: Vec<char> = longer.chars().collect();
    let mut window = String::with_capacity(shorter.len() * 2);
    let mut best = 0;
    for slice in longer.windows(short_len) {
        window.clear();
        window.extend(slice.iter());
        let score = ratio(shorter, &window);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// `ratio(a, b) >= threshold`.
pub fn fuzzy_match(a: &str, b: &str, threshold: u8) -> bool {
    ratio(a, b) >= threshold
}

/// `partial_ratio(a, b) >= threshold`.
pub fn fuzzy_partial_match(a: &str, b: &str, threshold: u8) -> bool {
    partial_ratio(a, b) >= threshold
}

fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}
