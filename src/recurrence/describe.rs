use chrono::{Locale, NaiveDate};
use rrule::{Frequency, NWeekday, RRule, Unvalidated};

use crate::error::Error;

use super::messages;

pub use messages::INVALID_RULE;

/// Parses an RFC 5545 recurrence rule, with or without the `RRULE:` prefix.
///
/// # Errors
/// Returns a `Parsing` error if the rule does not follow the RFC 5545 grammar.
pub fn parse(rrule: &str) -> Result<RRule<Unvalidated>, Error> {
  let rrule = rrule.trim();
  let body = rrule.strip_prefix("RRULE:").unwrap_or(rrule);

  Ok(body.parse::<RRule<Unvalidated>>()?)
}

/// Describes `rrule` in English, e.g. `FREQ=DAILY` becomes "Every day".
/// Invalid rules yield [`INVALID_RULE`].
pub fn describe(rrule: &str, start_date: NaiveDate) -> String {
  Describer::default().describe(rrule, start_date)
}

/// Turns recurrence rules into readable text. The locale only affects the
/// month names of the formatted dates.
#[derive(Debug, Clone, Copy)]
pub struct Describer {
  locale: Locale,
}

impl Default for Describer {
  fn default() -> Self {
    Self { locale: Locale::en_US }
  }
}

impl Describer {
  pub const fn new(locale: Locale) -> Self {
    Self { locale }
  }

  pub fn describe(&self, rrule: &str, start_date: NaiveDate) -> String {
    match parse(rrule) {
      Ok(rule) => self.describe_rule(&rule, start_date),
      Err(e) => {
        log::warn!("could not describe recurrence rule {rrule:?}: {e}");
        INVALID_RULE.to_owned()
      }
    }
  }

  pub fn describe_rule(&self, rule: &RRule<Unvalidated>, start_date: NaiveDate) -> String {
    let frequency = rule.get_freq();
    let mut text = messages::every(rule.get_interval(), frequency);

    match frequency {
      Frequency::Weekly if !rule.get_by_weekday().is_empty() => {
        let days: Vec<_> = rule.get_by_weekday().iter().map(|day| messages::weekday(weekday(day))).collect();
        text.push_str(&messages::on_weekdays(&days));
      }
      Frequency::Monthly => {
        // only the first entry is described
        if let Some(day) = rule.get_by_month_day().first() {
          text.push_str(&messages::on_month_day(*day));
        } else if let Some(day) = rule.get_by_weekday().first() {
          let offset = match day {
            NWeekday::Nth(n, _) => *n,
            NWeekday::Every(_) => 0,
          };
          text.push_str(&messages::on_month_weekday(
            &messages::ordinal(offset),
            messages::weekday(weekday(day)),
          ));
        }
      }
      Frequency::Yearly => {
        let date = start_date.format_localized(messages::MONTH_AND_DAY_FORMAT, self.locale);
        text.push_str(&messages::on_date(&date.to_string()));
      }
      _ => {}
    }

    match rule.get_count() {
      Some(1) => return messages::ONCE.to_owned(),
      Some(count) if count > 1 => text.push_str(&messages::times(count)),
      _ => {
        if let Some(until) = rule.get_until() {
          let date = until.date_naive().format_localized(messages::LONG_DATE_FORMAT, self.locale);
          text.push_str(&messages::until(&date.to_string()));
        }
      }
    }

    text
  }
}

const fn weekday(day: &NWeekday) -> chrono::Weekday {
  match day {
    NWeekday::Every(weekday) | NWeekday::Nth(_, weekday) => *weekday,
  }
}
