//! Whitespace normalization utilities.
//!
//! [`collapse_whitespace`] collapses every run of Unicode whitespace into a
//! single ASCII space and drops leading/trailing whitespace.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  project   manager  "), "project manager");
//! ```

/// Collapses repeated whitespace, trims edges, and turns newlines and tabs
/// into single spaces.
///
/// Splits on any Unicode whitespace (`str::split_whitespace`) and joins the
/// segments with one ASCII space, so the output never starts or ends with a
/// space. Empty and whitespace-only inputs return an empty string.
///
/// # Examples
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("qa\t\ttester"), "qa tester");
/// assert_eq!(collapse_whitespace("data\r\nscientist"), "data scientist");
/// assert_eq!(collapse_whitespace("senior\u{00A0}developer"), "senior developer");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}
