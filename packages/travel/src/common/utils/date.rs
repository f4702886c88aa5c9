use chrono::{DateTime, Days, Duration, Months, NaiveDate};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Returned by [`format_date`] for input it cannot parse.
pub const INVALID_DATE: &str = "Invalid Date";

lazy_static! {
    // Year, then optional month, day, hour, minute, second and fraction; separators optional
    static ref DATE_FIELDS_REGEX: Regex = Regex::new(
        r"^([0-9]{4})[-/]?([0-9]{1,2})?[-/]?([0-9]{0,2})[Tt\s]*([0-9]{1,2})?:?([0-9]{1,2})?:?([0-9]{1,2})?[.:]?([0-9]+)?$"
    )
    .unwrap();
}

/// Render a date string as `"March 05, 2024"`.
///
/// Never fails: unparseable input becomes [`INVALID_DATE`].
pub fn format_date(date_string: &str) -> String {
    match parse_date(date_string) {
        Some(date) => date.format("%B %d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Parse the calendar date out of a date or timestamp string.
///
/// Field-style input (`2024-03-05`, `2024/03/05`, `20240305`, `2024-03`,
/// `2024`, optionally followed by a time) is read field by field, and fields
/// past their range roll over into the next unit: `2024-02-30` is March 1st
/// and `2024-13` is January 2025. Missing month or day default to the first.
///
/// Anything else, including every `Z`-suffixed timestamp, must be RFC 3339 or
/// RFC 2822; the date is taken in the timestamp's own offset.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if !s.ends_with(['Z', 'z']) {
        if let Some(caps) = DATE_FIELDS_REGEX.captures(s) {
            return date_from_fields(&caps);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .ok()
        .map(|dt| dt.date_naive())
}

fn date_from_fields(caps: &Captures) -> Option<NaiveDate> {
    let field = |index: usize| -> Option<i64> {
        caps.get(index)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
    };

    let mut year = field(1)?;
    // Two-digit years land in the 1900s
    if (0..=99).contains(&year) {
        year += 1900;
    }
    let month_offset = field(2).map_or(0, |month| month - 1);
    let day_offset = field(3).map_or(0, |day| day - 1);
    let millis = caps
        .get(7)
        .and_then(|m| m.as_str().get(..3).unwrap_or(m.as_str()).parse::<i64>().ok())
        .unwrap_or(0);
    let time_offset = Duration::hours(field(4).unwrap_or(0))
        + Duration::minutes(field(5).unwrap_or(0))
        + Duration::seconds(field(6).unwrap_or(0))
        + Duration::milliseconds(millis);

    let first_of_year = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;
    let date = shift_days(shift_months(first_of_year, month_offset)?, day_offset)?;

    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(time_offset)
        .map(|dt| dt.date())
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let amount = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(amount)
    } else {
        date.checked_sub_months(amount)
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let amount = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(amount)
    } else {
        date.checked_sub_days(amount)
    }
}
