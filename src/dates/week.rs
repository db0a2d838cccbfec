use chrono::{Datelike as _, Days, NaiveDate, Weekday};

/// Returns the first day of the week containing `date`. Never moves forward:
/// with Monday as first day of week a Wednesday goes back two days.
pub fn adjust_to_first_day_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
  let offset = (7 + date.weekday().num_days_from_monday() - first_day_of_week.num_days_from_monday()) % 7;

  date.checked_sub_days(Days::new(u64::from(offset))).unwrap_or(date)
}

/// Returns the last day of the week containing `date`, six days after
/// [`adjust_to_first_day_of_week`].
pub fn adjust_to_last_day_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
  let start = adjust_to_first_day_of_week(date, first_day_of_week);

  start.checked_add_days(Days::new(6)).unwrap_or(start)
}

/// Whether the interval `a_start..a_end` intersects `b_start..b_end`.
/// Intervals sharing a start or an end always intersect, even when empty.
pub fn intersect<T: PartialOrd>(a_start: &T, a_end: &T, b_start: &T, b_end: &T) -> bool {
  if a_start == b_start || a_end == b_end {
    return true;
  }

  a_start < b_end && a_end > b_start
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Datelike as _, NaiveTime};

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn wednesday_goes_back_to_monday() {
    assert_eq!(adjust_to_first_day_of_week(date(2026, 10, 21), Weekday::Mon), date(2026, 10, 19));
    assert_eq!(adjust_to_last_day_of_week(date(2026, 10, 21), Weekday::Mon), date(2026, 10, 25));
  }

  #[test]
  fn week_start_is_never_later() {
    for first in [Weekday::Mon, Weekday::Sat, Weekday::Sun] {
      for day in date(2025, 12, 20).iter_days().take(21) {
        let start = adjust_to_first_day_of_week(day, first);
        let end = adjust_to_last_day_of_week(day, first);

        assert_eq!(start.weekday(), first);
        assert!(start <= day && day <= end);
        assert_eq!((end - start).num_days(), 6);
      }
    }
  }

  #[test]
  fn intersecting_dates() {
    let (a, b, c, d) = (date(2025, 1, 1), date(2025, 1, 5), date(2025, 1, 3), date(2025, 1, 9));

    assert!(intersect(&a, &b, &c, &d));
    assert!(!intersect(&a, &c, &b, &d));
    // touching intervals do not intersect
    assert!(!intersect(&a, &c, &c, &d));
    assert!(intersect(&a, &a, &a, &d));
  }

  #[test]
  fn intersecting_times() {
    let time = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();

    assert!(intersect(&time(8), &time(10), &time(9), &time(11)));
    assert!(intersect(&time(8), &time(11), &time(9), &time(11)));
    assert!(!intersect(&time(8), &time(9), &time(10), &time(11)));
  }
}
