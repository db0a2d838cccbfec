use chrono::Weekday;
use rrule::Frequency;

pub const INVALID_RULE: &str = "Invalid recurrence rule";
pub const ONCE: &str = "Once";

pub const MONTH_AND_DAY_FORMAT: &str = "%B %-d";
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Singular and plural name of the repetition unit.
pub const fn unit(frequency: Frequency) -> (&'static str, &'static str) {
  match frequency {
    Frequency::Yearly => ("year", "years"),
    Frequency::Monthly => ("month", "months"),
    Frequency::Weekly => ("week", "weeks"),
    Frequency::Daily => ("day", "days"),
    Frequency::Hourly => ("hour", "hours"),
    Frequency::Minutely => ("minute", "minutes"),
    Frequency::Secondly => ("second", "seconds"),
    #[allow(unreachable_patterns)]
    _ => ("", ""),
  }
}

pub fn every(interval: u16, frequency: Frequency) -> String {
  let (singular, plural) = unit(frequency);

  if interval > 1 {
    format!("Every {interval} {plural}")
  } else {
    format!("Every {singular}")
  }
}

pub const fn weekday(day: Weekday) -> &'static str {
  match day {
    Weekday::Mon => "Monday",
    Weekday::Tue => "Tuesday",
    Weekday::Wed => "Wednesday",
    Weekday::Thu => "Thursday",
    Weekday::Fri => "Friday",
    Weekday::Sat => "Saturday",
    Weekday::Sun => "Sunday",
  }
}

pub fn ordinal(number: i16) -> String {
  match number {
    1 => "first".to_owned(),
    2 => "second".to_owned(),
    3 => "third".to_owned(),
    4 => "fourth".to_owned(),
    5 => "fifth".to_owned(),
    n => n.to_string(),
  }
}

pub fn on_weekdays(days: &[&str]) -> String {
  format!(" on {}", days.join(", "))
}

pub fn on_month_day(day: i8) -> String {
  format!(" on day {day}")
}

pub fn on_month_weekday(ordinal: &str, weekday: &str) -> String {
  format!(" on the {ordinal} {weekday}")
}

pub fn on_date(date: &str) -> String {
  format!(" on {date}")
}

pub fn times(count: u32) -> String {
  format!(", {count} times")
}

pub fn until(date: &str) -> String {
  format!(", until {date}")
}
