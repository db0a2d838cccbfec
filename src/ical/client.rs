use std::time::Duration;

use ureq::{Agent, AgentBuilder};
use url::Url;

use crate::error::{Error, ErrorKind};

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// Something that returns the `.ics` text behind a feed URL.
pub trait FeedSource {
  /// # Errors
  /// Returns an error if the feed cannot be retrieved.
  fn fetch(&self, url: &str) -> Result<String, Error>;
}

#[derive(Debug, Clone)]
pub struct FeedClient {
  agent: Agent,
}

impl Default for FeedClient {
  fn default() -> Self {
    Self::new()
  }
}

impl FeedClient {
  pub fn new() -> Self {
    Self {
      agent: AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(READ_TIMEOUT)
        .build(),
    }
  }
}

impl FeedSource for FeedClient {
  fn fetch(&self, url: &str) -> Result<String, Error> {
    let url = feed_url(url)?;

    log::debug!("fetching calendar feed {url}");

    self
      .agent
      .get(url.as_str())
      .call()?
      .into_string()
      .map_err(|e| Error {
        kind: ErrorKind::Parsing,
        message: e.to_string(),
      })
  }
}

/// Resolves a feed URL, fetching `webcal` subscriptions over https.
///
/// # Errors
/// Returns a `Parsing` error for malformed URLs.
pub fn feed_url(url: &str) -> Result<Url, Error> {
  let url = url.trim();
  let https = ["webcals://", "webcal://"]
    .iter()
    .find_map(|scheme| url.strip_prefix(scheme))
    .map(|rest| format!("https://{rest}"));

  Ok(Url::parse(https.as_deref().unwrap_or(url))?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn webcal_is_fetched_over_https() {
    assert_eq!(
      feed_url("webcal://www.wien.gv.at/amtshelfer/feiertage/ics/feiertage.ics").unwrap().as_str(),
      "https://www.wien.gv.at/amtshelfer/feiertage/ics/feiertage.ics"
    );
    assert_eq!(feed_url("webcals://example.org/a.ics").unwrap().scheme(), "https");
  }

  #[test]
  fn http_urls_are_kept() {
    assert_eq!(feed_url("http://example.org/a.ics").unwrap().scheme(), "http");
  }

  #[test]
  fn malformed_urls_fail() {
    assert_eq!(feed_url("not a url").unwrap_err().kind, ErrorKind::Parsing);
  }
}
