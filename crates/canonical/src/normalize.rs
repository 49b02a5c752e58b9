use crate::whitespace::collapse_whitespace;

/// Canonicalizes a raw role title into its comparison key.
///
/// Steps, in order:
///
/// 1. Unicode lowercase
/// 2. Trim leading/trailing whitespace
/// 3. Replace every character that is neither a word character
///    (alphanumeric or `_`) nor whitespace with a space, so separators such
///    as `-` or `.` keep the words apart
/// 4. Collapse whitespace runs to a single space
///
/// The function is total and idempotent:
/// `normalize_role(&normalize_role(s)) == normalize_role(s)` for every `s`.
///
/// ```rust
/// use canonical::normalize_role;
///
/// assert_eq!(normalize_role("Software Engineer!"), "software engineer");
/// assert_eq!(normalize_role("  Senior-Developer  "), "senior developer");
/// assert_eq!(normalize_role("Q.A. Tester"), "q a tester");
/// assert_eq!(normalize_role("   "), "");
/// ```
pub fn normalize_role(role: &str) -> String {
    let lowered = role.to_lowercase();
    let spaced: String = lowered
        .trim()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();
    // Punctuation at the edges turns into spaces ("- lead" -> "  lead"), so
    // the collapse step also trims.
    collapse_whitespace(&spaced)
}

/// Same as [`normalize_role`] for values that may be absent.
///
/// Missing values normalize to the empty key.
pub fn normalize_role_opt(role: Option<&str>) -> String {
    role.map(normalize_role).unwrap_or_default()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(normalize_role("Software Engineer!"), "software engineer");
        assert_eq!(normalize_role("Q.A. Tester"), "q a tester");
        assert_eq!(normalize_role("R&D Lead"), "r d lead");
    }

    #[test]
    fn hyphen_separates_words_and_spaces_collapse() {
        assert_eq!(normalize_role("  Senior-Developer  "), "senior developer");
        assert_eq!(normalize_role("Senior -  Developer"), "senior developer");
        assert_eq!(normalize_role("senior--developer."), "senior developer");
    }

    #[test]
    fn separator_spellings_share_the_spaced_key() {
        assert_eq!(normalize_role("Senior-Developer"), normalize_role("senior developer"));
        assert_ne!(normalize_role("Senior-Developer"), normalize_role("seniordeveloper"));
    }

    #[test]
    fn keeps_underscore_and_digits() {
        assert_eq!(normalize_role("Level_2 Support"), "level_2 support");
    }

    #[test]
    fn unicode_letters_survive() {
        assert_eq!(normalize_role("Ingénieur Logiciel"), "ingénieur logiciel");
        assert_eq!(normalize_role("ДИРЕКТОР"), "директор");
    }

    #[test]
    fn punctuation_only_is_empty_key() {
        assert_eq!(normalize_role("!!! ---"), "");
        assert_eq!(normalize_role(""), "");
    }

    #[test]
    fn leading_punctuation_does_not_leave_a_space() {
        let once = normalize_role("- Lead");
        assert_eq!(once, "lead");
        assert_eq!(normalize_role(&once), once);
    }

    #[test]
    fn missing_value_is_empty_key() {
        assert_eq!(normalize_role_opt(None), "");
        assert_eq!(normalize_role_opt(Some("Manager ")), "manager");
    }
}
