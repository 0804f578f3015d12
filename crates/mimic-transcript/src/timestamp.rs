// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Absolute time from a raw export timestamp.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use mimic_config::DateOrder;
use regex::Regex;

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d{1,2})/(\d{1,2})/(\d{2}|\d{4}),\s*(\d{1,2}):(\d{2})(?::(\d{2}))?\s*(?:[\u{a0}\u{202f}]\s*)?([aApP][mM])?\s*$",
    )
    .unwrap()
});

/// Parse `dd/mm/yy, h:mm am` style timestamps.
///
/// Two-digit years are read as 20xx. Hours without a meridiem are 24h.
/// Returns `None` for anything that does not name a real instant.
pub fn parse_timestamp(raw: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let caps = TIMESTAMP.captures(raw)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let (first, second) = (number(1)?, number(2)?);
    let (day, month) = match order {
        DateOrder::DayFirst => (first, second),
        DateOrder::MonthFirst => (second, first),
    };

    let year_raw = caps.get(3)?.as_str();
    let mut year: i32 = year_raw.parse().ok()?;
    if year_raw.len() == 2 {
        year += 2000;
    }

    let mut hour = number(4)?;
    let minute = number(5)?;
    let second = number(6).unwrap_or(0);

    if let Some(meridiem) = caps.get(7) {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let pm = meridiem.as_str().eq_ignore_ascii_case("pm");
        hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(NaiveDateTime::new(date, time))
}
