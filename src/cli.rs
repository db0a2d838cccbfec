use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use clap::{Parser, Subcommand};

use calendar_grid::dates::TruncationUnit;
use calendar_grid::grid::Orientation;
use calendar_grid::ical::CalendarStyle;

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
  /// Path to the configuration file
  #[clap(long, short)]
  pub config: Option<PathBuf>,

  #[clap(subcommand)]
  pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
  /// Print the grid plan of a resource view as TOML
  Plan {
    /// Comma separated resource names
    #[clap(long, value_delimiter = ',')]
    resources: Vec<String>,
    #[clap(long)]
    days: Option<usize>,
    #[clap(long, value_enum)]
    orientation: Option<Orientation>,
    #[clap(long)]
    no_time_scale: bool,
    #[clap(long)]
    no_all_day: bool,
    #[clap(long)]
    no_scroll_bar: bool,
    /// Free scrolling instead of a shared scroll bar
    #[clap(long)]
    scrolling: bool,
  },
  /// Describe a recurrence rule
  Describe {
    rrule: String,
    /// Start date of the rule, defaults to today
    #[clap(long)]
    start: Option<NaiveDate>,
  },
  /// Truncate a date time, e.g. 2025-06-03T10:37:42
  Truncate {
    time: NaiveDateTime,
    #[clap(long, value_enum)]
    unit: TruncationUnit,
    #[clap(long, default_value_t = 1)]
    step: u32,
    #[clap(long)]
    first_day: Option<Weekday>,
  },
  /// Print the dates of a week day header
  Week {
    date: NaiveDate,
    #[clap(long, default_value_t = 7)]
    days: u32,
    #[clap(long)]
    no_adjust: bool,
  },
  /// Manage subscribed iCalendar feeds
  Feeds {
    #[clap(subcommand)]
    action: FeedAction,
  },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FeedAction {
  /// List the cached subscriptions
  List,
  /// Subscribe to a feed
  Add {
    url: String,
    name: String,
    #[clap(long, value_enum, default_value_t)]
    style: CalendarStyle,
    #[clap(long)]
    family: bool,
  },
  /// Fetch all cached and configured feeds
  Load,
}
