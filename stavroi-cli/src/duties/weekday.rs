//! Greek weekday names.

use chrono::Weekday;

/// Localized day name, Monday first.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Δευτέρα",
        Weekday::Tue => "Τρίτη",
        Weekday::Wed => "Τετάρτη",
        Weekday::Thu => "Πέμπτη",
        Weekday::Fri => "Παρασκευή",
        Weekday::Sat => "Σάββατο",
        Weekday::Sun => "Κυριακή",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_matches_gregorian_weekdays() {
        // 2024-07-01 was a Monday
        let expected = [
            "Δευτέρα",
            "Τρίτη",
            "Τετάρτη",
            "Πέμπτη",
            "Παρασκευή",
            "Σάββατο",
            "Κυριακή",
        ];

        for (offset, name) in expected.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2024, 7, 1 + offset as u32).unwrap();
            assert_eq!(weekday_name(date.weekday()), *name);
        }
    }

    #[test]
    fn test_week_wraps_back_to_monday() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 8).unwrap();
        assert_eq!(weekday_name(date.weekday()), "Δευτέρα");
    }
}
