use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Offset as _, TimeDelta, TimeZone, Timelike, Weekday};
use serde::Deserialize;

use super::week::adjust_to_first_day_of_week;

/// Granularity a date or time is truncated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TruncationUnit {
  Nanos,
  Micros,
  Millis,
  Seconds,
  Minutes,
  Hours,
  HalfDays,
  Days,
  Weeks,
  Months,
  Years,
  Decades,
  Centuries,
  Millennia,
  Eras,
  Forever,
}

impl TruncationUnit {
  pub const fn is_time_based(&self) -> bool {
    matches!(
      self,
      Self::Nanos | Self::Micros | Self::Millis | Self::Seconds | Self::Minutes | Self::Hours | Self::HalfDays
    )
  }
}

/// Truncation to the start of a `unit` bucket `step_rate` units wide.
///
/// The step rate is honored for the numeric fields (hours, minutes, days,
/// months, years and finer) but ignored for half days, weeks, decades,
/// centuries and millennia, which always have a fixed width. A step rate of
/// zero counts as one. Units without a rule leave the value unchanged.
pub trait Truncate: Sized {
  fn truncate(self, unit: TruncationUnit, step_rate: u32, first_day_of_week: Weekday) -> Self;
}

impl Truncate for NaiveTime {
  fn truncate(self, unit: TruncationUnit, step_rate: u32, _first_day_of_week: Weekday) -> Self {
    truncate_time(self, unit, step_rate).unwrap_or(self)
  }
}

impl Truncate for NaiveDate {
  fn truncate(self, unit: TruncationUnit, step_rate: u32, first_day_of_week: Weekday) -> Self {
    truncate_date(self, unit, step_rate, first_day_of_week).unwrap_or(self)
  }
}

impl Truncate for NaiveDateTime {
  fn truncate(self, unit: TruncationUnit, step_rate: u32, first_day_of_week: Weekday) -> Self {
    if unit.is_time_based() {
      truncate_time(self.time(), unit, step_rate).map_or(self, |time| self.date().and_time(time))
    } else {
      truncate_date(self.date(), unit, step_rate, first_day_of_week)
        .map_or(self, |date| date.and_time(NaiveTime::MIN))
    }
  }
}

impl<Tz: TimeZone> Truncate for DateTime<Tz> {
  /// Truncates the wall-clock time and resolves it again in the same zone.
  ///
  /// A truncated time inside a gap keeps the offset in force before the gap,
  /// which moves it forward by the length of the gap.
  fn truncate(self, unit: TruncationUnit, step_rate: u32, first_day_of_week: Weekday) -> Self {
    let zone = self.timezone();
    let local = self.naive_local().truncate(unit, step_rate, first_day_of_week);

    if let Some(truncated) = zone.from_local_datetime(&local).earliest() {
      return truncated;
    }

    let before_gap = local
      .checked_sub_signed(TimeDelta::days(1))
      .and_then(|day_before| zone.from_local_datetime(&day_before).earliest());

    match before_gap {
      Some(before_gap) => zone.from_utc_datetime(&(local - before_gap.offset().fix())),
      None => {
        log::debug!("truncated local time {local} does not exist, keeping {}", self.naive_local());
        self
      }
    }
  }
}

const fn down(value: u32, step_rate: u32) -> u32 {
  value - value % step_rate
}

fn truncate_time(time: NaiveTime, unit: TruncationUnit, step_rate: u32) -> Option<NaiveTime> {
  let step = step_rate.max(1);
  let (hour, minute, second) = (time.hour(), time.minute(), time.second());
  // leap seconds are folded back into the regular second
  let nano = time.nanosecond() % 1_000_000_000;

  let (hour, minute, second, nano) = match unit {
    TruncationUnit::HalfDays => (hour - hour % 12, 0, 0, 0),
    TruncationUnit::Hours => (down(hour, step), 0, 0, 0),
    TruncationUnit::Minutes => (hour, down(minute, step), 0, 0),
    TruncationUnit::Seconds => (hour, minute, down(second, step), 0),
    TruncationUnit::Millis => (hour, minute, second, down(nano / 1_000_000, step) * 1_000_000),
    TruncationUnit::Micros => (hour, minute, second, down(nano / 1_000, step) * 1_000),
    TruncationUnit::Nanos => (hour, minute, second, down(nano, step)),
    _ => return None,
  };

  NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
}

fn truncate_date(
  date: NaiveDate,
  unit: TruncationUnit,
  step_rate: u32,
  first_day_of_week: Weekday,
) -> Option<NaiveDate> {
  let step = step_rate.max(1);
  let year = date.year();

  match unit {
    TruncationUnit::Days => date.with_ordinal(down(date.ordinal(), step).max(1)),
    TruncationUnit::Weeks => Some(adjust_to_first_day_of_week(date, first_day_of_week)),
    TruncationUnit::Months => NaiveDate::from_ymd_opt(year, down(date.month(), step).max(1), 1),
    TruncationUnit::Years => {
      let step = i32::try_from(step).unwrap_or(i32::MAX);
      NaiveDate::from_yo_opt(year - year % step, 1)
    }
    TruncationUnit::Decades => NaiveDate::from_yo_opt(year / 10 * 10, 1),
    TruncationUnit::Centuries => NaiveDate::from_yo_opt(year / 100 * 100, 1),
    TruncationUnit::Millennia => NaiveDate::from_yo_opt(year / 1000 * 1000, 1),
    _ => None,
  }
}
