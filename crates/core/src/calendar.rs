//! Calendar-date arithmetic.
//!
//! Every day count in the dashboard is a difference of calendar dates.
//! Instants are first truncated to a date in the evaluation timezone, so a
//! due date of "tomorrow" is 1 day away at 00:01 and at 23:59 alike.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Calendar date of `instant` as seen in `tz`.
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// `to - from` in whole calendar days (negative when `to` is earlier).
pub fn days_between(to: NaiveDate, from: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn local_date_respects_offset() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(local_date(&instant, &Utc), date(2025, 3, 1));
        assert_eq!(local_date(&instant, &plus_two), date(2025, 3, 2));
        assert_eq!(local_date(&instant, &minus_five), date(2025, 3, 1));
    }

    #[test]
    fn days_between_crosses_leap_day() {
        assert_eq!(days_between(date(2024, 3, 1), date(2024, 2, 28)), 2);
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), -2);
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 2, 28)), 0);
    }

    proptest! {
        #[test]
        fn days_between_is_antisymmetric(a in 0i64..40_000, b in 0i64..40_000) {
            let base = date(1990, 1, 1);
            let x = base + chrono::Duration::days(a);
            let y = base + chrono::Duration::days(b);
            prop_assert_eq!(days_between(x, y), -days_between(y, x));
        }
    }
}
