//! Free-text runtime parsing
//!
//! Dataset durations look like `"2h 22m"`, `"45m"` or `"2h"`. Missing
//! parts count as zero.

/// Convert a duration string to total minutes.
///
/// Hours are read from the text before the first `h`. Minutes are read
/// from the text after the last `h` (or the whole string when there is no
/// `h`) once every `m` is removed. Unparseable parts contribute `0`, and
/// absent or blank input yields `0`.
///
/// # Examples
///
/// ```
/// use cinedex_common::duration::parse_minutes;
///
/// assert_eq!(parse_minutes(Some("2h 22m")), 142);
/// assert_eq!(parse_minutes(Some("45m")), 45);
/// assert_eq!(parse_minutes(None), 0);
/// ```
pub fn parse_minutes(text: Option<&str>) -> u32 {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return 0,
    };

    let hours = match text.split_once('h') {
        Some((before, _)) => before.trim().parse::<u32>().unwrap_or(0),
        None => 0,
    };

    let minutes = if text.contains('m') {
        let tail = text.rsplit('h').next().unwrap_or(text);
        tail.replace('m', "").trim().parse::<u32>().unwrap_or(0)
    } else {
        0
    };

    hours.saturating_mul(60).saturating_add(minutes)
}
