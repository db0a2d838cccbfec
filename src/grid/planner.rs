use serde::Deserialize;

use crate::error::Error;

use super::cell::{CellRole, ColumnKind, GridPlan, PlannedCell, PositionClass};

/// Which axis is the outer grouping of the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
  #[default]
  DatesOverResources,
  ResourcesOverDates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridOptions {
  pub number_of_days: usize,
  pub orientation: Orientation,
  pub show_time_scale: bool,
  pub show_all_day_row: bool,
  pub show_scroll_bar: bool,
  pub scrolling_enabled: bool,
}

impl Default for GridOptions {
  fn default() -> Self {
    Self {
      number_of_days: 1,
      orientation: Orientation::default(),
      show_time_scale: true,
      show_all_day_row: true,
      show_scroll_bar: true,
      scrolling_enabled: false,
    }
  }
}

impl GridOptions {
  pub const fn with_number_of_days(mut self, number_of_days: usize) -> Self {
    self.number_of_days = number_of_days;
    self
  }

  pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
    self.orientation = orientation;
    self
  }

  pub const fn with_time_scale(mut self, show: bool) -> Self {
    self.show_time_scale = show;
    self
  }

  pub const fn with_all_day_row(mut self, show: bool) -> Self {
    self.show_all_day_row = show;
    self
  }

  pub const fn with_scroll_bar(mut self, show: bool) -> Self {
    self.show_scroll_bar = show;
    self
  }

  pub const fn with_scrolling(mut self, enabled: bool) -> Self {
    self.scrolling_enabled = enabled;
    self
  }
}

/// Plans the resource view grid. Holds only the options, so a plan is a
/// pure function of the options and the resource list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlanner {
  options: GridOptions,
}

impl GridPlanner {
  /// # Errors
  /// Returns an `InvalidArgument` error if the number of days is zero.
  pub fn new(options: GridOptions) -> Result<Self, Error> {
    if options.number_of_days < 1 {
      return Err(Error::invalid_argument(format!(
        "invalid number of days, must be larger than 0 but was {}",
        options.number_of_days
      )));
    }

    Ok(Self { options })
  }

  pub const fn options(&self) -> &GridOptions {
    &self.options
  }

  /// Builds a fresh plan for the given resources. Resources are never
  /// inspected, only counted.
  pub fn plan<T>(&self, resources: &[T]) -> GridPlan {
    let mut layout = Layout::new(self.options);

    match self.options.orientation {
      Orientation::DatesOverResources => layout.dates_over_resources(resources.len()),
      Orientation::ResourcesOverDates => layout.resources_over_dates(resources.len()),
    }

    let plan = layout.finish();

    log::trace!(
      "planned {:?} grid: {} resources, {} days, {} columns, {} cells",
      self.options.orientation,
      resources.len(),
      self.options.number_of_days,
      plan.column_count(),
      plan.cells.len(),
    );

    plan
  }
}

struct Layout {
  options: GridOptions,
  header_rows: usize,
  inner_start: usize,
  columns: Vec<ColumnKind>,
  cells: Vec<PlannedCell>,
}

impl Layout {
  fn new(options: GridOptions) -> Self {
    let mut columns = Vec::new();
    if options.show_time_scale {
      columns.push(ColumnKind::TimeScale);
    }

    // day header or delegated day header row, resource header row, optional all-day row
    let header_rows = 2 + usize::from(options.show_all_day_row);

    Self {
      options,
      header_rows,
      inner_start: columns.len(),
      columns,
      cells: Vec::new(),
    }
  }

  fn push_column(&mut self, kind: ColumnKind) -> usize {
    self.columns.push(kind);
    self.columns.len() - 1
  }

  fn dates_over_resources(&mut self, resources: usize) {
    if resources == 0 {
      return;
    }

    let days = self.options.number_of_days;

    for day in 0..days {
      let day_start = self.columns.len();

      for resource in 0..resources {
        let col = self.push_column(ColumnKind::Resource);
        let position = PositionClass::of(resource, resources);

        self.cells.push(
          PlannedCell::new(1, col, CellRole::ResourceHeader)
            .with_position(position)
            .with_resource(resource)
            .with_days(day, 1),
        );

        if self.options.show_all_day_row {
          self.cells.push(
            PlannedCell::new(2, col, CellRole::AllDay)
              .with_position(position)
              .with_resource(resource)
              .with_days(day, 1),
          );
        }

        if resource + 1 < resources {
          let col = self.push_column(ColumnKind::SmallSeparator);
          self.cells.push(
            PlannedCell::new(1, col, CellRole::SeparatorSmall).with_row_span(self.header_rows - 1),
          );
        }
      }

      self.cells.push(
        PlannedCell::new(0, day_start, CellRole::DayHeader)
          .with_column_span(self.columns.len() - day_start)
          .with_position(PositionClass::of(day, days))
          .with_days(day, 1),
      );

      if day + 1 < days {
        let col = self.push_column(ColumnKind::LargeSeparator);
        self.cells.push(
          PlannedCell::new(0, col, CellRole::SeparatorLarge).with_row_span(self.header_rows),
        );
      }
    }
  }

  fn resources_over_dates(&mut self, resources: usize) {
    let days = self.options.number_of_days;
    let day_header_row = self.header_rows - 1;

    for resource in 0..resources {
      let col = self.push_column(ColumnKind::Resource);
      let position = PositionClass::of(resource, resources);

      self.cells.push(
        PlannedCell::new(0, col, CellRole::ResourceHeader)
          .with_position(position)
          .with_resource(resource),
      );

      if self.options.show_all_day_row {
        self.cells.push(
          PlannedCell::new(1, col, CellRole::AllDay)
            .with_position(position)
            .with_resource(resource)
            .with_days(0, days),
        );
      }

      self.cells.push(
        PlannedCell::new(day_header_row, col, CellRole::DayHeader)
          .with_position(position)
          .with_resource(resource)
          .with_days(0, days),
      );

      if resource + 1 < resources {
        let col = self.push_column(ColumnKind::LargeSeparator);
        self.cells.push(
          PlannedCell::new(0, col, CellRole::SeparatorLarge).with_row_span(self.header_rows),
        );
      }
    }
  }

  fn finish(mut self) -> GridPlan {
    let body_row = self.header_rows;
    let scroll_linked = !self.options.scrolling_enabled;
    let inner_width = self.columns.len() - self.inner_start;

    if self.options.show_time_scale {
      self.cells.push(PlannedCell::new(0, 0, CellRole::HeaderCorner).with_row_span(self.header_rows));
      self.cells.push(PlannedCell::new(body_row, 0, CellRole::TimeScale).with_scroll_linked(scroll_linked));
    }

    if inner_width > 0 {
      self.cells.push(
        PlannedCell::new(body_row, self.inner_start, CellRole::Content)
          .with_column_span(inner_width)
          .with_scroll_linked(scroll_linked),
      );
    }

    if self.options.show_scroll_bar {
      let col = self.push_column(ColumnKind::ScrollBar);
      self.cells.push(PlannedCell::new(0, col, CellRole::HeaderCorner).with_row_span(self.header_rows));
      self.cells.push(PlannedCell::new(body_row, col, CellRole::ScrollBar).with_scroll_linked(scroll_linked));
    }

    self.cells.sort_by_key(|cell| (cell.row, cell.column));

    GridPlan {
      header_rows: self.header_rows,
      body_row,
      columns: self.columns,
      cells: self.cells,
    }
  }
}
