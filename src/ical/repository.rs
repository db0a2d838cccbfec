use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::logger::LogExt as _;

use super::calendar::{CalendarSource, CalendarStyle, WebCalendar, WebCalendarData};
use super::client::FeedSource;

pub const SETTINGS_DIR: &str = ".store/calendarfx";
pub const SETTINGS_FILE: &str = "iCalCalendars.toml";

pub const FAMILY_SOURCE: &str = "Family";
pub const COMMUNITY_SOURCE: &str = "Others";

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
  #[serde(default)]
  calendars: Vec<WebCalendarData>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
  pub work_done: usize,
  pub total_work: usize,
  pub message: String,
}

/// Subscribed web calendars, remembered in a cache file keyed by URL.
#[derive(Debug)]
pub struct IcalRepository {
  cache_dir: PathBuf,
  calendars: Vec<WebCalendar>,
}

impl IcalRepository {
  pub fn open(cache_dir: impl Into<PathBuf>) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      calendars: Vec::new(),
    }
  }

  /// Opens the repository in `~/.store/calendarfx`.
  ///
  /// # Errors
  /// Returns an `Io` error if there is no home directory.
  pub fn with_default_dir() -> Result<Self, Error> {
    let home = dirs::home_dir().ok_or_else(|| Error::new(ErrorKind::Io, "no home directory"))?;

    Ok(Self::open(home.join(SETTINGS_DIR)))
  }

  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  pub fn cache_file(&self) -> PathBuf {
    self.cache_dir.join(SETTINGS_FILE)
  }

  /// Reads the subscriptions from the cache file. A missing file is an empty list.
  ///
  /// # Errors
  /// Returns an error if the file cannot be read or parsed.
  pub fn read_cache(&self) -> Result<Vec<WebCalendarData>, Error> {
    let string = match std::fs::read_to_string(self.cache_file()) {
      Ok(string) => string,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
      Err(e) => return Err(e.into()),
    };

    let cache: CacheFile = toml::from_str(&string)?;

    Ok(cache.calendars)
  }

  fn write_cache(&self) -> Result<(), Error> {
    let cache = CacheFile {
      calendars: self.calendars.iter().map(|calendar| calendar.data.clone()).collect(),
    };

    std::fs::create_dir_all(&self.cache_dir)?;
    std::fs::write(self.cache_file(), toml::to_string(&cache)?)?;

    Ok(())
  }

  /// Fetches every calendar listed in the cache file and reports progress
  /// after each one. Failures are logged; returns the number of calendars added.
  pub fn load_web_sources(&mut self, source: &impl FeedSource, mut on_progress: impl FnMut(&Progress)) -> usize {
    let Ok(list) = self.read_cache().log_error("Could not read the web calendar cache") else {
      return 0;
    };

    let total_work = list.len();
    let mut added = 0;

    for (idx, data) in list.into_iter().enumerate() {
      let message = format!("Calendar: {}", data.name);

      if let Ok(true) = self.put_web_calendar(source, data).log_error("Could not load web calendar") {
        added += 1;
      }

      on_progress(&Progress {
        work_done: idx + 1,
        total_work,
        message,
      });
    }

    added
  }

  /// Subscribes to a web calendar and rewrites the cache file. Empty URLs or
  /// names are ignored and failures are logged; returns whether the
  /// calendar is known afterwards.
  pub fn create_web_calendar(
    &mut self,
    source: &impl FeedSource,
    url: &str,
    name: &str,
    style: CalendarStyle,
    family: bool,
  ) -> bool {
    if url.is_empty() || name.is_empty() {
      return false;
    }

    let data = WebCalendarData::new(url, name, style, family);
    if self.put_web_calendar(source, data).log_error("Could not create web calendar").is_err() {
      return false;
    }

    let _ = self.write_cache().log_error("Could not write the web calendar cache");

    true
  }

  fn put_web_calendar(&mut self, source: &impl FeedSource, data: WebCalendarData) -> Result<bool, Error> {
    if self.exists_web_calendar(&data.url) {
      return Ok(false);
    }

    log::info!("Calendar: {}", data.name);

    let ics = source.fetch(&data.url)?;
    let calendar = WebCalendar::parse(data, &ics)?;

    log::debug!("[{}] loaded {} entries", calendar.name(), calendar.entries.len());

    self.calendars.push(calendar);

    Ok(true)
  }

  pub fn exists_web_calendar(&self, url: &str) -> bool {
    self.web_calendar(url).is_some()
  }

  pub fn web_calendar(&self, url: &str) -> Option<&WebCalendar> {
    self.calendars.iter().find(|calendar| calendar.url() == url)
  }

  pub fn calendars(&self) -> &[WebCalendar] {
    &self.calendars
  }

  pub fn family_calendars(&self) -> CalendarSource<'_> {
    self.source(FAMILY_SOURCE, true)
  }

  pub fn community_calendars(&self) -> CalendarSource<'_> {
    self.source(COMMUNITY_SOURCE, false)
  }

  fn source(&self, name: &'static str, family: bool) -> CalendarSource<'_> {
    CalendarSource {
      name,
      calendars: self.calendars.iter().filter(|calendar| calendar.data.family == family).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use tempfile::TempDir;

  use super::*;
  use crate::ical::calendar::tests::HOLIDAYS;

  #[derive(Default)]
  struct StubSource {
    requested: RefCell<Vec<String>>,
  }

  impl FeedSource for StubSource {
    fn fetch(&self, url: &str) -> Result<String, Error> {
      self.requested.borrow_mut().push(url.to_owned());

      if url.contains("missing") {
        Err(Error::new(ErrorKind::Http, "404"))
      } else {
        Ok(HOLIDAYS.to_owned())
      }
    }
  }

  fn temp_repository() -> (TempDir, IcalRepository) {
    let dir = tempfile::tempdir().unwrap();
    let repository = IcalRepository::open(dir.path().join("calendarfx"));

    (dir, repository)
  }

  #[test]
  fn missing_cache_is_empty() {
    let (_dir, mut repository) = temp_repository();

    assert!(repository.read_cache().unwrap().is_empty());
    assert_eq!(repository.load_web_sources(&StubSource::default(), |_| {}), 0);
  }

  #[test]
  fn created_calendars_are_cached() {
    let (_dir, mut repository) = temp_repository();
    let source = StubSource::default();

    assert!(repository.create_web_calendar(&source, "webcal://example.org/a.ics", "A", CalendarStyle::Style2, true));
    assert!(repository.create_web_calendar(&source, "https://example.org/b.ics", "B", CalendarStyle::Style3, false));
    // already known, not fetched again
    assert!(repository.create_web_calendar(&source, "https://example.org/b.ics", "B", CalendarStyle::Style3, false));

    assert_eq!(source.requested.borrow().len(), 2);
    assert_eq!(repository.family_calendars().calendars.len(), 1);
    assert_eq!(repository.community_calendars().name, COMMUNITY_SOURCE);
    assert!(repository.exists_web_calendar("https://example.org/b.ics"));

    let cached = repository.read_cache().unwrap();
    assert_eq!(cached.len(), 2);
    assert_eq!(cached[0].url, "webcal://example.org/a.ics");
    assert_eq!(cached[1].style, CalendarStyle::Style3);

    let mut reopened = IcalRepository::open(repository.cache_dir());
    let mut progress = Vec::new();
    let added = reopened.load_web_sources(&source, |p| progress.push(p.clone()));

    assert_eq!(added, 2);
    assert_eq!(progress.last().map(|p| (p.work_done, p.total_work)), Some((2, 2)));
    assert_eq!(progress[0].message, "Calendar: A");
  }

  #[test]
  fn failures_are_swallowed() {
    let (_dir, mut repository) = temp_repository();
    let source = StubSource::default();

    assert!(!repository.create_web_calendar(&source, "https://example.org/missing.ics", "M", CalendarStyle::Style1, false));
    assert!(!repository.create_web_calendar(&source, "", "Empty", CalendarStyle::Style1, false));
    assert!(!repository.create_web_calendar(&source, "https://example.org/a.ics", "", CalendarStyle::Style1, false));

    assert!(repository.calendars().is_empty());
    assert!(!repository.cache_file().exists());
  }
}
