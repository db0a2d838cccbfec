use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

use super::entry::{CalendarEntry, EntryBuilder};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CalendarStyle {
  #[default]
  Style1,
  Style2,
  Style3,
  Style4,
  Style5,
  Style6,
  Style7,
}

impl CalendarStyle {
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Style1 => "style1",
      Self::Style2 => "style2",
      Self::Style3 => "style3",
      Self::Style4 => "style4",
      Self::Style5 => "style5",
      Self::Style6 => "style6",
      Self::Style7 => "style7",
    }
  }
}

/// Settings of a subscribed web calendar. Two entries are the same
/// subscription if their URLs match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebCalendarData {
  pub url: String,
  pub name: String,
  #[serde(default)]
  pub style: CalendarStyle,
  #[serde(default)]
  pub family: bool,
}

impl WebCalendarData {
  pub fn new(url: impl Into<String>, name: impl Into<String>, style: CalendarStyle, family: bool) -> Self {
    Self {
      url: url.into(),
      name: name.into(),
      style,
      family,
    }
  }

  pub fn uid(&self) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, self.url.as_bytes())
  }
}

impl PartialEq for WebCalendarData {
  fn eq(&self, other: &Self) -> bool {
    self.url == other.url
  }
}

impl Eq for WebCalendarData {}

impl std::hash::Hash for WebCalendarData {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.url.hash(state);
  }
}

#[derive(Debug, Clone)]
pub struct WebCalendar {
  pub uid: Uuid,
  pub data: WebCalendarData,
  pub entries: Vec<CalendarEntry>,
}

impl WebCalendar {
  /// Parses the `.ics` text of a feed. Events that cannot be turned into
  /// entries are logged and skipped.
  ///
  /// # Errors
  /// Returns a `Parsing` error if the text is not an iCalendar document.
  pub fn parse(data: WebCalendarData, ics: &str) -> Result<Self, Error> {
    let ics = ics.strip_prefix('\u{feff}').unwrap_or(ics);
    let unfolded = icalendar::parser::unfold(ics);
    if !unfolded.trim_start().starts_with("BEGIN:VCALENDAR") {
      return Err(Error::parsing(format!("{} is not an iCalendar feed", data.url)));
    }

    let calendar = icalendar::parser::read_calendar(&unfolded)
      .map(icalendar::Calendar::from)
      .map_err(|e| Error::parsing(format!("invalid calendar {}: {e}", data.url)))?;

    let entries = calendar
      .components
      .iter()
      .filter_map(|c| match c {
        icalendar::CalendarComponent::Event(event) => Some(EntryBuilder::from(event).build()),
        _ => None,
      })
      .filter_map(|result| match result {
        Ok(entry) => Some(entry),
        Err(e) => {
          log::error!("[{}] Error parsing event: {:?}", data.name, e);
          None
        }
      })
      .collect();

    Ok(Self {
      uid: data.uid(),
      data,
      entries,
    })
  }

  pub fn name(&self) -> &str {
    &self.data.name
  }

  pub fn url(&self) -> &str {
    &self.data.url
  }
}

/// A named group of web calendars.
#[derive(Debug)]
pub struct CalendarSource<'a> {
  pub name: &'static str,
  pub calendars: Vec<&'a WebCalendar>,
}
