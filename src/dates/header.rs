use chrono::{Days, Locale, NaiveDate, Weekday};

use crate::error::Error;

use super::week::adjust_to_first_day_of_week;

pub const CELL_DATE_FORMAT: &str = "%a %-d";

/// Date range shown by a week day header: `number_of_days` consecutive days,
/// optionally starting on the first day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDayHeader {
  number_of_days: u32,
  adjust_to_first_day_of_week: bool,
  first_day_of_week: Weekday,
}

impl Default for WeekDayHeader {
  fn default() -> Self {
    Self {
      number_of_days: 7,
      adjust_to_first_day_of_week: true,
      first_day_of_week: Weekday::Mon,
    }
  }
}

impl WeekDayHeader {
  /// # Errors
  /// Returns an `InvalidArgument` error if `number_of_days` is zero.
  pub fn new(number_of_days: u32) -> Result<Self, Error> {
    if number_of_days < 1 {
      return Err(Error::invalid_argument(format!(
        "invalid number of days, must be larger than 0 but was {number_of_days}"
      )));
    }

    Ok(Self {
      number_of_days,
      ..Self::default()
    })
  }

  pub const fn with_adjust_to_first_day_of_week(mut self, adjust: bool) -> Self {
    self.adjust_to_first_day_of_week = adjust;
    self
  }

  pub const fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
    self.first_day_of_week = first_day_of_week;
    self
  }

  pub const fn number_of_days(&self) -> u32 {
    self.number_of_days
  }

  pub fn start_date(&self, date: NaiveDate) -> NaiveDate {
    if self.adjust_to_first_day_of_week {
      adjust_to_first_day_of_week(date, self.first_day_of_week)
    } else {
      date
    }
  }

  /// First and last (inclusive) date of the header for `date`.
  pub fn range(&self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = self.start_date(date);
    let end = start
      .checked_add_days(Days::new(u64::from(self.number_of_days - 1)))
      .unwrap_or(NaiveDate::MAX);

    (start, end)
  }

  pub fn dates(&self, date: NaiveDate) -> Vec<NaiveDate> {
    let (start, end) = self.range(date);

    start.iter_days().take_while(|d| d <= &end).collect()
  }
}

pub fn cell_label(date: NaiveDate, locale: Locale) -> String {
  date.format_localized(CELL_DATE_FORMAT, locale).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn zero_days_is_rejected() {
    assert_eq!(WeekDayHeader::new(0).unwrap_err().kind, ErrorKind::InvalidArgument);
  }

  #[test]
  fn week_starts_on_first_day() {
    let header = WeekDayHeader::new(7).unwrap();

    assert_eq!(header.range(date(2026, 10, 22)), (date(2026, 10, 19), date(2026, 10, 25)));
    assert_eq!(header.dates(date(2026, 10, 22)).len(), 7);
  }

  #[test]
  fn unadjusted_single_day() {
    let header = WeekDayHeader::new(1).unwrap().with_adjust_to_first_day_of_week(false);

    assert_eq!(header.dates(date(2026, 10, 22)), [date(2026, 10, 22)]);
  }

  #[test]
  fn sunday_first_day() {
    let header = WeekDayHeader::new(3).unwrap().with_first_day_of_week(Weekday::Sun);

    assert_eq!(header.range(date(2026, 10, 22)), (date(2026, 10, 18), date(2026, 10, 20)));
  }

  #[test]
  fn labels_are_localized() {
    assert_eq!(cell_label(date(2026, 10, 19), Locale::en_US), "Mon 19");
    assert_eq!(cell_label(date(2026, 10, 19), Locale::de_DE), "Mo 19");
  }
}
