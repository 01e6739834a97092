use regex::Regex;
use std::sync::OnceLock;

/// Weekly practice frequency parsed from a string like "주 2-3회"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyFrequency {
    pub min: u32,
    pub max: u32,
}

static WEEKLY_FREQUENCY_RE: OnceLock<Regex> = OnceLock::new();

/// Parse the first "주 {min}-{max}회" occurrence in `frequency`
///
/// Returns `None` when the string does not follow the template. Only the Korean
/// weekly form is recognised; "매일", "월 2회" and similar phrasings do not parse.
pub fn parse_weekly_frequency(frequency: &str) -> Option<WeeklyFrequency> {
    let re = WEEKLY_FREQUENCY_RE
        .get_or_init(|| Regex::new(r"주\s*(\d+)-(\d+)회").expect("valid frequency pattern"));

    let caps = re.captures(frequency)?;
    let min = caps.get(1)?.as_str().parse().ok()?;
    let max = caps.get(2)?.as_str().parse().ok()?;

    Some(WeeklyFrequency { min, max })
}

/// A user fits a hobby's schedule when they have at least as many free time
/// slots as the hobby's minimum weekly sessions
#[inline]
pub fn is_time_compatible(time_slots: &[String], frequency: &str) -> bool {
    match parse_weekly_frequency(frequency) {
        Some(parsed) => time_slots.len() >= parsed.min as usize,
        None => false,
    }
}
