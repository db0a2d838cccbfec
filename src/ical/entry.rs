use std::str::FromStr;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use icalendar::{CalendarDateTime, Component as _, DatePerhapsTime};

use crate::recurrence;

/// A single event of a web calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
  pub uid: Option<String>,
  pub title: String,
  pub location: Option<String>,
  pub start: NaiveDateTime,
  pub end: NaiveDateTime,
  pub all_day: bool,
  pub rrule: Option<String>,
}

impl CalendarEntry {
  pub const fn start_date(&self) -> NaiveDate {
    self.start.date()
  }

  pub fn is_recurring(&self) -> bool {
    self.rrule.is_some()
  }

  /// Readable description of the recurrence rule, if any.
  pub fn recurrence_text(&self) -> Option<String> {
    self
      .rrule
      .as_deref()
      .map(|rrule| recurrence::describe(rrule, self.start_date()))
  }
}

#[derive(Debug)]
pub enum EntryBuilderError {
  NoStart,
  InvalidStart,
  InvalidEnd,
  InvalidRRule(crate::error::Error),
}

#[derive(Debug, Default)]
pub struct EntryBuilder {
  pub uid: Option<String>,
  pub title: Option<String>,
  pub location: Option<String>,
  pub start: Option<DatePerhapsTime>,
  pub end: Option<DatePerhapsTime>,
  pub rrule: Option<String>,
}

impl EntryBuilder {
  /// Builds the entry. A missing end falls back to the start, or to the next
  /// day for all-day entries.
  ///
  /// # Errors
  /// Returns an error if the start is missing or a date or the recurrence rule is invalid.
  pub fn build(self) -> Result<CalendarEntry, EntryBuilderError> {
    let start = self.start.ok_or(EntryBuilderError::NoStart)?;
    let all_day = matches!(start, DatePerhapsTime::Date(_));
    let start = date_perhaps_time_to_date_time(start).ok_or(EntryBuilderError::InvalidStart)?;
    let end = match self.end {
      Some(end) => date_perhaps_time_to_date_time(end).ok_or(EntryBuilderError::InvalidEnd)?,
      None if all_day => start.checked_add_days(Days::new(1)).unwrap_or(start),
      None => start,
    };

    if let Some(rrule) = &self.rrule {
      recurrence::parse(rrule).map_err(EntryBuilderError::InvalidRRule)?;
    }

    Ok(CalendarEntry {
      uid: self.uid,
      title: self.title.unwrap_or_default(),
      location: self.location,
      start,
      end,
      all_day,
      rrule: self.rrule,
    })
  }

  pub fn set_uid_opt(mut self, uid: Option<String>) -> Self {
    self.uid = uid;
    self
  }

  pub fn set_title_opt(mut self, title: Option<String>) -> Self {
    self.title = title;
    self
  }

  pub fn set_location_opt(mut self, location: Option<String>) -> Self {
    self.location = location;
    self
  }

  pub fn set_start_opt(mut self, start: Option<DatePerhapsTime>) -> Self {
    self.start = start;
    self
  }

  pub fn set_end_opt(mut self, end: Option<DatePerhapsTime>) -> Self {
    self.end = end;
    self
  }

  pub fn set_rrule_opt(mut self, rrule: Option<String>) -> Self {
    self.rrule = rrule;
    self
  }
}

impl From<&icalendar::Event> for EntryBuilder {
  fn from(event: &icalendar::Event) -> Self {
    Self::default()
      .set_uid_opt(event.get_uid().map(std::borrow::ToOwned::to_owned))
      .set_title_opt(event.get_summary().map(std::borrow::ToOwned::to_owned))
      .set_location_opt(event.property_value("LOCATION").map(std::borrow::ToOwned::to_owned))
      .set_start_opt(event.get_start())
      .set_end_opt(event.get_end())
      .set_rrule_opt(event.property_value("RRULE").map(std::borrow::ToOwned::to_owned))
  }
}

fn date_perhaps_time_to_date_time(date: DatePerhapsTime) -> Option<NaiveDateTime> {
  Some(match date {
    DatePerhapsTime::DateTime(dt) => match dt {
      CalendarDateTime::Floating(dt) => dt,
      CalendarDateTime::WithTimezone { date_time, tzid } => match Tz::from_str(&tzid) {
        Ok(tz) => tz.from_local_datetime(&date_time).earliest()?.naive_utc(),
        Err(_) => {
          log::warn!(tzid = tzid.as_str(); "Unknown time zone, reading {date_time} as floating time");
          date_time
        }
      },
      CalendarDateTime::Utc(dt) => dt.naive_utc(),
    },
    DatePerhapsTime::Date(date) => date.and_time(NaiveTime::MIN),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(h, min, 0).unwrap()
  }

  #[test]
  fn zoned_times_are_stored_in_utc() {
    let entry = EntryBuilder::default()
      .set_start_opt(Some(CalendarDateTime::WithTimezone { date_time: at(9, 0), tzid: "Europe/Vienna".to_owned() }.into()))
      .build()
      .unwrap();

    assert_eq!(entry.start, at(8, 0));
    assert_eq!(entry.end, entry.start);
  }

  #[test]
  fn unknown_time_zone_reads_floating_time() {
    let entry = EntryBuilder::default()
      .set_start_opt(Some(
        CalendarDateTime::WithTimezone { date_time: at(9, 30), tzid: "W. Europe Standard Time".to_owned() }.into(),
      ))
      .set_end_opt(Some(
        CalendarDateTime::WithTimezone { date_time: at(10, 0), tzid: "W. Europe Standard Time".to_owned() }.into(),
      ))
      .build()
      .unwrap();

    assert_eq!(entry.start, at(9, 30));
    assert_eq!(entry.end, at(10, 0));
    assert!(!entry.all_day);
  }

  #[test]
  fn all_day_entries_last_one_day() {
    let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let entry = EntryBuilder::default().set_start_opt(Some(DatePerhapsTime::Date(day))).build().unwrap();

    assert!(entry.all_day);
    assert_eq!(entry.end, at(0, 0) + chrono::Duration::days(1));
  }

  #[test]
  fn missing_start_is_rejected() {
    assert!(matches!(EntryBuilder::default().build(), Err(EntryBuilderError::NoStart)));
  }
}
