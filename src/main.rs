#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use clap::Parser;

use calendar_grid::config::{self, Config};
use calendar_grid::dates::{self, Truncate as _, WeekDayHeader};
use calendar_grid::grid::GridPlanner;
use calendar_grid::ical::{FeedClient, IcalRepository};
use calendar_grid::logger;
use calendar_grid::recurrence::Describer;
use cli::{Cli, Command, FeedAction};

mod cli;

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::init(path)?,
        None => Config::default(),
    };

    log::debug!("{config:?}");

    match cli.command {
        Command::Plan {
            resources,
            days,
            orientation,
            no_time_scale,
            no_all_day,
            no_scroll_bar,
            scrolling,
        } => {
            let mut options = config.grid;
            if let Some(days) = days {
                options = options.with_number_of_days(days);
            }
            if let Some(orientation) = orientation {
                options = options.with_orientation(orientation);
            }
            options = options
                .with_time_scale(options.show_time_scale && !no_time_scale)
                .with_all_day_row(options.show_all_day_row && !no_all_day)
                .with_scroll_bar(options.show_scroll_bar && !no_scroll_bar)
                .with_scrolling(options.scrolling_enabled || scrolling);

            let plan = GridPlanner::new(options)?.plan(&resources);
            print!("{}", toml::to_string(&plan)?);
        }
        Command::Describe { rrule, start } => {
            let start = start.unwrap_or_else(|| chrono::Local::now().date_naive());
            println!("{}", Describer::new(config.locale()).describe(&rrule, start));
        }
        Command::Truncate { time, unit, step, first_day } => {
            let first_day = first_day.unwrap_or(config.first_day_of_week);
            println!("{}", time.truncate(unit, step, first_day));
        }
        Command::Week { date, days, no_adjust } => {
            let header = WeekDayHeader::new(days)?
                .with_adjust_to_first_day_of_week(!no_adjust)
                .with_first_day_of_week(config.first_day_of_week);

            for date in header.dates(date) {
                println!("{date}  {}", dates::cell_label(date, config.locale()));
            }
        }
        Command::Feeds { action } => feeds(&config, action)?,
    }

    Ok(())
}

fn feeds(config: &Config, action: FeedAction) -> anyhow::Result<()> {
    let mut repository = match &config.cache_dir {
        Some(dir) => IcalRepository::open(dir),
        None => IcalRepository::with_default_dir()?,
    };
    let client = FeedClient::new();

    match action {
        FeedAction::List => {
            for data in repository.read_cache()? {
                println!("{}\t{}\t{}", data.name, data.style.as_str(), data.url);
            }
        }
        FeedAction::Add { url, name, style, family } => {
            if !repository.create_web_calendar(&client, &url, &name, style, family) {
                anyhow::bail!("could not subscribe to {url}");
            }
        }
        FeedAction::Load => {
            repository.load_web_sources(&client, |progress| {
                log::info!("[{}/{}] {}", progress.work_done, progress.total_work, progress.message);
            });

            for feed in &config.feeds {
                repository.create_web_calendar(&client, &feed.url, &feed.name, feed.style, feed.family);
            }

            let describer = Describer::new(config.locale());
            for source in [repository.family_calendars(), repository.community_calendars()] {
                for calendar in source.calendars {
                    println!("{} / {} ({} entries)", source.name, calendar.name(), calendar.entries.len());

                    for entry in calendar.entries.iter().filter(|entry| entry.is_recurring()) {
                        let rrule = entry.rrule.as_deref().unwrap_or_default();
                        println!("  {}: {}", entry.title, describer.describe(rrule, entry.start_date()));
                    }
                }
            }
        }
    }

    Ok(())
}
