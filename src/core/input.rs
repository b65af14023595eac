//! Free-text parsing for the custom-amount field.

/// Parse a custom life-change amount typed by the user.
///
/// Surrounding whitespace is trimmed and an explicit leading `+` is
/// accepted. Returns `None` when the text is not an integer; callers
/// treat that as "no adjustment occurs and nothing is logged", not as an
/// error.
///
/// ```
/// use life_tracker::parse_life_delta;
///
/// assert_eq!(parse_life_delta("-13"), Some(-13));
/// assert_eq!(parse_life_delta(" +7 "), Some(7));
/// assert_eq!(parse_life_delta("three"), None);
/// ```
#[must_use]
pub fn parse_life_delta(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}
