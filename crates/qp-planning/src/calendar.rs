//! Working-day counting and holiday resolution

use chrono::NaiveDate;
use qp_core::types::{is_weekday, Period};
use qp_models::{Holiday, TeamMember};

/// Weekdays (Mon-Fri) in the inclusive range. An inverted range has none.
pub fn working_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_weekday(*d))
        .count() as u32
}

/// Weekdays in the period
pub fn working_days(period: &Period) -> u32 {
    working_days_between(period.start, period.end)
}

/// Holidays inside the period that apply to the member's country
pub fn applicable_holidays<'a>(
    member: &'a TeamMember,
    holidays: &'a [Holiday],
    period: &'a Period,
) -> impl Iterator<Item = &'a Holiday> + 'a {
    holidays
        .iter()
        .filter(move |h| h.falls_within(period) && h.applies_to(member.country.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_week() {
        assert_eq!(working_days_between(date(2025, 1, 6), date(2025, 1, 10)), 5);
    }

    #[test]
    fn test_weekend_only() {
        assert_eq!(working_days_between(date(2025, 1, 4), date(2025, 1, 5)), 0);
    }

    #[test]
    fn test_single_day() {
        assert_eq!(working_days_between(date(2025, 1, 6), date(2025, 1, 6)), 1);
    }

    #[test]
    fn test_inverted_range_is_zero() {
        assert_eq!(working_days_between(date(2025, 1, 10), date(2025, 1, 6)), 0);
    }

    #[test]
    fn test_quarter() {
        // Q1 2025: Jan 23 + Feb 20 + Mar 21
        let q1 = Period::quarter(2025, 1).unwrap();
        assert_eq!(working_days(&q1), 64);
    }

    #[test]
    fn test_applicable_holidays() {
        let period = Period::new(date(2025, 1, 1), date(2025, 3, 31));
        let holidays = vec![
            Holiday::new(date(2025, 1, 1), "New Year"),
            Holiday::new(date(2025, 1, 6), "Epiphany").for_countries(["DE"]),
            Holiday::new(date(2025, 5, 1), "Labour Day"),
        ];
        let de = TeamMember::new("m1", "Ada").with_country("DE");
        let nowhere = TeamMember::new("m2", "Bo");

        assert_eq!(applicable_holidays(&de, &holidays, &period).count(), 2);
        assert_eq!(applicable_holidays(&nowhere, &holidays, &period).count(), 1);
    }
}
