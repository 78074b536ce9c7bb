//! Scan a roster row for upcoming duties.

use std::io::Write;

use anyhow::{Context, Result};
use calamine::Data;
use chrono::{Datelike, NaiveDate};

use super::codes::{describe, DutyCodeTable};
use super::weekday::weekday_name;
use crate::roster::{cell_text, RosterTable};

/// Cell values meaning "nothing to report" for a day.
fn is_no_duty(value: &str) -> bool {
    matches!(value, "" | "Ε" | "ΥΠΗΡ")
}

/// Comparable form of a duty cell. Blank cells materialize as non-string
/// data, so the cell is coerced to text before trimming.
fn normalize_cell(cell: &Data) -> String {
    cell_text(cell).trim().to_uppercase()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always a valid date")
        .pred_opt()
        .expect("first of month always has a predecessor")
        .day()
}

/// Walk `identity`'s duty cells from `today` through month-end and write
/// one sentence per scheduled duty to `out`. Returns whether any duty line
/// was written; when none was, a single fallback line is written instead.
///
/// Codes missing from both the fixed set and `codes` skip their day
/// without output and without setting the flag.
pub fn scan_duties<W: Write>(
    identity: &str,
    roster: &RosterTable,
    codes: &DutyCodeTable,
    today: NaiveDate,
    out: &mut W,
) -> Result<bool> {
    let row = roster
        .row(identity)
        .with_context(|| format!("No roster row for '{}'", identity))?;

    let year = today.year();
    let month = today.month();
    let mut scheduled = false;

    for day in today.day()..=days_in_month(year, month) {
        let cell = match row.duty_cell(day) {
            Some(cell) => cell,
            None => continue, // sheet ends early; nothing recorded for this day
        };

        let value = normalize_cell(cell);
        if is_no_duty(&value) {
            continue;
        }

        let tail = match describe(&value, codes) {
            Some(tail) => tail,
            None => continue,
        };

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("day lies within the current month");
        writeln!(
            out,
            "Την ημέρα {} {}/{}/{} {}",
            weekday_name(date.weekday()),
            day,
            month,
            year,
            tail
        )?;
        scheduled = true;
    }

    if !scheduled {
        writeln!(
            out,
            "Δεν υπάρχουν μελοντικά καταχωρημένες υπηρεσίες για εσένα (μέχρι στιγμής)..."
        )?;
    }

    Ok(scheduled)
}
