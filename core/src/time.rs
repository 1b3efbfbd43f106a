use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%d.%m.%Y %H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Parses a due date typed by the user. `today` anchors the keyword and
/// relative forms so callers decide what "now" is.
pub fn parse_due_date(input: &str, today: NaiveDate) -> Result<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date string"));
    }

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "сьогодні" => return Ok(start_of_day(today)),
        "tomorrow" | "завтра" => return shift(today, Duration::days(1)),
        _ => {}
    }

    // 2. Relative format (+Nd, +Nw)
    if let Some(rest) = input.strip_prefix('+') {
        return shift(today, parse_relative(rest)?);
    }

    // 3. Fixed formats
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(input, format) {
            return Ok(start_of_day(d));
        }
    }

    Err(anyhow!("Could not parse date: {}", input))
}

fn parse_relative(input: &str) -> Result<Duration> {
    let unit = input
        .chars()
        .last()
        .ok_or_else(|| anyhow!("Invalid relative format"))?;
    let num_str = &input[..input.len() - unit.len_utf8()];
    let count: i64 = num_str
        .parse()
        .map_err(|_| anyhow!("Invalid relative format"))?;

    let offset = match unit.to_ascii_lowercase() {
        'd' => Duration::try_days(count),
        'w' => Duration::try_weeks(count),
        _ => return Err(anyhow!("Unknown unit in relative time: {}", unit)),
    };
    offset.ok_or_else(|| anyhow!("Relative offset out of range: {}", input))
}

fn shift(today: NaiveDate, offset: Duration) -> Result<NaiveDateTime> {
    today
        .checked_add_signed(offset)
        .map(start_of_day)
        .ok_or_else(|| anyhow!("Date out of range"))
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
