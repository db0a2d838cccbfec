use log::Level;
use std::fmt::Debug;
use std::panic::Location;

pub fn init() {
  env_logger::builder()
    .format_timestamp_millis()
    .init();
}

/// Logs a missing value or an error at the given level and turns it into an
/// `anyhow::Error` carrying the message.
pub trait LogExt<T> {
  fn log_trace(self, msg: &str) -> anyhow::Result<T>;
  fn log_debug(self, msg: &str) -> anyhow::Result<T>;
  fn log_info(self, msg: &str) -> anyhow::Result<T>;
  fn log_warn(self, msg: &str) -> anyhow::Result<T>;
  fn log_error(self, msg: &str) -> anyhow::Result<T>;
}

impl<T> LogExt<T> for Option<T> {
  #[track_caller]
  fn log_trace(self, msg: &str) -> anyhow::Result<T> {
    none_at(self, Level::Trace, msg, Location::caller())
  }

  #[track_caller]
  fn log_debug(self, msg: &str) -> anyhow::Result<T> {
    none_at(self, Level::Debug, msg, Location::caller())
  }

  #[track_caller]
  fn log_info(self, msg: &str) -> anyhow::Result<T> {
    none_at(self, Level::Info, msg, Location::caller())
  }

  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    none_at(self, Level::Warn, msg, Location::caller())
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    none_at(self, Level::Error, msg, Location::caller())
  }
}

impl<T, E> LogExt<T> for Result<T, E> where E: Debug {
  #[track_caller]
  fn log_trace(self, msg: &str) -> anyhow::Result<T> {
    err_at(self, Level::Trace, msg, Location::caller())
  }

  #[track_caller]
  fn log_debug(self, msg: &str) -> anyhow::Result<T> {
    err_at(self, Level::Debug, msg, Location::caller())
  }

  #[track_caller]
  fn log_info(self, msg: &str) -> anyhow::Result<T> {
    err_at(self, Level::Info, msg, Location::caller())
  }

  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    err_at(self, Level::Warn, msg, Location::caller())
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    err_at(self, Level::Error, msg, Location::caller())
  }
}

fn none_at<T>(value: Option<T>, level: Level, msg: &str, location: &Location<'_>) -> anyhow::Result<T> {
  match value {
    Some(value) => Ok(value),
    None => {
      let location = location.to_string();
      log::log!(level, location; "{msg}");
      anyhow::bail!(msg.to_string())
    }
  }
}

fn err_at<T, E: Debug>(value: Result<T, E>, level: Level, msg: &str, location: &Location<'_>) -> anyhow::Result<T> {
  match value {
    Ok(value) => Ok(value),
    Err(error) => {
      let location = location.to_string();
      log::log!(level, location; "{msg}: {error:?}");
      anyhow::bail!("{msg}: {error:?}")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn values_pass_through() {
    assert_eq!(Some(3).log_warn("missing").unwrap(), 3);
    assert_eq!(Ok::<_, String>(4).log_error("failed").unwrap(), 4);
  }

  #[test]
  fn failures_carry_the_message() {
    let error = None::<u8>.log_debug("no value").unwrap_err();
    assert_eq!(error.to_string(), "no value");

    let error = Err::<u8, _>("boom").log_info("request failed").unwrap_err();
    assert_eq!(error.to_string(), "request failed: \"boom\"");
  }
}
