use std::path::{Path, PathBuf};

use chrono::{Locale, Weekday};

use crate::error::Error;
use crate::grid::GridOptions;
use crate::ical::CalendarStyle;

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct Config {
  pub grid: GridOptions,
  pub first_day_of_week: Weekday,
  pub locale: String,
  pub cache_dir: Option<PathBuf>,
  pub feeds: Vec<Feed>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      grid: GridOptions::default(),
      first_day_of_week: Weekday::Mon,
      locale: default_locale(),
      cache_dir: None,
      feeds: Vec::default(),
    }
  }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Feed {
  pub url: String,
  pub name: String,
  #[serde(default)]
  pub style: CalendarStyle,
  #[serde(default)]
  pub family: bool,
}

impl Config {
  /// The configured locale, or `en_US` if it is unknown.
  pub fn locale(&self) -> Locale {
    Locale::try_from(self.locale.as_str()).unwrap_or_else(|_| {
      log::warn!("Unknown locale {:?}, using en_US", self.locale);
      Locale::en_US
    })
  }
}

/// Reads the configuration file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn init(path: &Path) -> Result<Config, Error> {
  let string = std::fs::read_to_string(path)?;
  let config: Config = toml::from_str(&string)?;

  if config.grid.number_of_days < 1 {
    return Err(Error::invalid_argument(format!(
      "{}: grid.number_of_days must be larger than 0",
      path.display()
    )));
  }

  Ok(config)
}

fn default_locale() -> String {
  "en_US".to_owned()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::grid::Orientation;

  #[test]
  fn empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.grid, GridOptions::default());
    assert_eq!(config.first_day_of_week, Weekday::Mon);
    assert_eq!(config.locale(), Locale::en_US);
    assert!(config.feeds.is_empty());
  }

  #[test]
  fn full_config() {
    let config: Config = toml::from_str(
      r#"
        first_day_of_week = "Sun"
        locale = "de_DE"

        [grid]
        number_of_days = 5
        orientation = "resources-over-dates"
        show_all_day_row = false

        [[feeds]]
        url = "webcal://www.wien.gv.at/amtshelfer/feiertage/ics/feiertage.ics"
        name = "Austrian Holidays"
        style = "style2"
      "#,
    )
    .unwrap();

    assert_eq!(config.first_day_of_week, Weekday::Sun);
    assert_eq!(config.locale(), Locale::de_DE);
    assert_eq!(config.grid.number_of_days, 5);
    assert_eq!(config.grid.orientation, Orientation::ResourcesOverDates);
    assert!(!config.grid.show_all_day_row);
    assert!(config.grid.show_time_scale);
    assert_eq!(config.feeds[0].style, CalendarStyle::Style2);
    assert!(!config.feeds[0].family);
  }

  #[test]
  fn unknown_locale_falls_back() {
    let config = Config {
      locale: "xx_XX".to_owned(),
      ..Config::default()
    };

    assert_eq!(config.locale(), Locale::en_US);
  }
}
