/// Errors that may occur while planning grids or loading calendar feeds.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
  pub kind: ErrorKind,
  pub message: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
  InvalidArgument,
  Http,
  Parsing,
  Io,
}

impl Error {
  pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
    Self {
      kind,
      message: message.into(),
    }
  }

  pub fn invalid_argument(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::InvalidArgument, message)
  }

  pub fn parsing(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::Parsing, message)
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}: {}", self.kind, self.message)
  }
}

impl std::error::Error for Error {}

impl From<ureq::Error> for Error {
  fn from(e: ureq::Error) -> Self {
    Self {
      kind: ErrorKind::Http,
      message: format!("{e:?}"),
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Self {
      kind: ErrorKind::Io,
      message: e.to_string(),
    }
  }
}

impl From<url::ParseError> for Error {
  fn from(e: url::ParseError) -> Self {
    Self {
      kind: ErrorKind::Parsing,
      message: e.to_string(),
    }
  }
}

impl From<toml::de::Error> for Error {
  fn from(e: toml::de::Error) -> Self {
    Self {
      kind: ErrorKind::Parsing,
      message: e.to_string(),
    }
  }
}

impl From<toml::ser::Error> for Error {
  fn from(e: toml::ser::Error) -> Self {
    Self {
      kind: ErrorKind::Parsing,
      message: e.to_string(),
    }
  }
}

impl From<rrule::RRuleError> for Error {
  fn from(e: rrule::RRuleError) -> Self {
    Self {
      kind: ErrorKind::Parsing,
      message: e.to_string(),
    }
  }
}
