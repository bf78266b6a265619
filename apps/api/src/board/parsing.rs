//! Lenient numeric extraction from display strings.
//!
//! Listings carry recency ("2 days ago") and pay ("₱18,000 - ₱22,000") as free text.
//! Sorting needs integers out of them; text without digits ranks as 0 and digit runs
//! too long for a `u64` saturate to `u64::MAX`. Only ASCII digits count.

use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

static PESO_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"₱([0-9]+),([0-9]+)").expect("valid regex"));

static DAYS_AGO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b([0-9]+)\s+days?\b").expect("valid regex"));

/// Number of days recent posts may be for the "recently posted" highlight.
pub const RECENT_DAYS: u64 = 3;

/// First integer in a recency string: "2 days ago" → 2, "1 week ago" → 1.
///
/// Strings without digits rank 0 and therefore sort as the most recent.
pub fn posted_rank(posted: &str) -> u64 {
    FIRST_INTEGER
        .find(posted)
        .map(|m| saturating_parse(m.as_str()))
        .unwrap_or(0)
}

/// Sort key for a salary string: the digits either side of the comma of the first
/// `₱X,YYY` amount, concatenated. "₱18,000 - ₱22,000" → 18000.
pub fn salary_key(salary: &str) -> u64 {
    PESO_AMOUNT
        .captures(salary)
        .map(|caps| saturating_parse(&format!("{}{}", &caps[1], &caps[2])))
        .unwrap_or(0)
}

/// Parses an ASCII digit run, clamping overlong runs to `u64::MAX`.
fn saturating_parse(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// True for "N day(s) ago" strings with 1 ≤ N ≤ [`RECENT_DAYS`].
pub fn is_recently_posted(posted: &str) -> bool {
    DAYS_AGO
        .captures(posted)
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .is_some_and(|days| (1..=RECENT_DAYS).contains(&days))
}
