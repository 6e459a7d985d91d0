use chrono::NaiveDate;

/// Year used for `M/d` dates when a calendar day is needed.
/// Leap year, so "2/29" resolves.
pub const REFERENCE_YEAR: i32 = 2000;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Resolve a record date (`M/d` or `M/d/y`) to a calendar day.
///
/// Two-digit years are read as 20xx. Returns `None` for anything else,
/// including impossible days such as "2/30".
pub fn calendar_date(date: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = date.split('/').collect();

    let (month, day, year) = match parts.as_slice() {
        [m, d] => (m.parse().ok()?, d.parse().ok()?, REFERENCE_YEAR),
        [m, d, y] => {
            let y: i32 = y.parse().ok()?;
            let y = if (0..100).contains(&y) { 2000 + y } else { y };
            (m.parse().ok()?, d.parse().ok()?, y)
        }
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}
