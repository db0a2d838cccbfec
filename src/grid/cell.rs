use serde::Serialize;

/// What a planned cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellRole {
  HeaderCorner,
  TimeScale,
  DayHeader,
  ResourceHeader,
  AllDay,
  SeparatorLarge,
  SeparatorSmall,
  ScrollBar,
  Content,
}

/// Style tag for the edges of a repeated run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionClass {
  Only,
  First,
  Middle,
  Last,
}

impl PositionClass {
  /// Position of element `index` in an axis of `len` elements.
  pub const fn of(index: usize, len: usize) -> Self {
    if len == 1 {
      Self::Only
    } else if index == 0 {
      Self::First
    } else if index + 1 == len {
      Self::Last
    } else {
      Self::Middle
    }
  }

  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Only => "only",
      Self::First => "first",
      Self::Middle => "middle",
      Self::Last => "last",
    }
  }
}

impl std::fmt::Display for PositionClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
  TimeScale,
  Resource,
  SmallSeparator,
  LargeSeparator,
  ScrollBar,
}

impl ColumnKind {
  /// Whether the column takes a share of the remaining width.
  pub const fn grows(&self) -> bool {
    matches!(self, Self::Resource)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedCell {
  pub row: usize,
  pub column: usize,
  pub row_span: usize,
  pub column_span: usize,
  pub role: CellRole,
  pub position: PositionClass,
  pub resource_index: Option<usize>,
  pub day_index: Option<usize>,
  pub day_span: usize,
  pub scroll_linked: bool,
}

impl PlannedCell {
  pub const fn new(row: usize, column: usize, role: CellRole) -> Self {
    Self {
      row,
      column,
      row_span: 1,
      column_span: 1,
      role,
      position: PositionClass::Only,
      resource_index: None,
      day_index: None,
      day_span: 0,
      scroll_linked: false,
    }
  }

  pub const fn with_row_span(mut self, row_span: usize) -> Self {
    self.row_span = row_span;
    self
  }

  pub const fn with_column_span(mut self, column_span: usize) -> Self {
    self.column_span = column_span;
    self
  }

  pub const fn with_position(mut self, position: PositionClass) -> Self {
    self.position = position;
    self
  }

  pub const fn with_resource(mut self, resource_index: usize) -> Self {
    self.resource_index = Some(resource_index);
    self
  }

  pub const fn with_days(mut self, day_index: usize, day_span: usize) -> Self {
    self.day_index = Some(day_index);
    self.day_span = day_span;
    self
  }

  pub const fn with_scroll_linked(mut self, scroll_linked: bool) -> Self {
    self.scroll_linked = scroll_linked;
    self
  }

  pub const fn rows(&self) -> std::ops::Range<usize> {
    self.row..(self.row + self.row_span)
  }

  pub const fn columns(&self) -> std::ops::Range<usize> {
    self.column..(self.column + self.column_span)
  }

  pub const fn covers(&self, row: usize, column: usize) -> bool {
    row >= self.row
      && row < self.row + self.row_span
      && column >= self.column
      && column < self.column + self.column_span
  }
}

/// Declarative layout produced by one planning pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridPlan {
  pub header_rows: usize,
  pub body_row: usize,
  pub columns: Vec<ColumnKind>,
  pub cells: Vec<PlannedCell>,
}

impl GridPlan {
  pub const fn row_count(&self) -> usize {
    self.body_row + 1
  }

  pub fn column_count(&self) -> usize {
    self.columns.len()
  }

  pub fn cell_at(&self, row: usize, column: usize) -> Option<&PlannedCell> {
    self.cells.iter().find(|cell| cell.covers(row, column))
  }

  pub fn cells_with_role(&self, role: CellRole) -> impl Iterator<Item = &PlannedCell> {
    self.cells.iter().filter(move |cell| cell.role == role)
  }

  pub fn count(&self, role: CellRole) -> usize {
    self.cells_with_role(role).count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn position_of_single_element_is_only() {
    assert_eq!(PositionClass::of(0, 1), PositionClass::Only);
  }

  #[test]
  fn position_of_longer_axis() {
    let classes: Vec<_> = (0..4).map(|i| PositionClass::of(i, 4)).collect();

    assert_eq!(
      classes,
      [PositionClass::First, PositionClass::Middle, PositionClass::Middle, PositionClass::Last]
    );
    assert_eq!(PositionClass::of(1, 2), PositionClass::Last);
  }

  #[test]
  fn style_class_names() {
    assert_eq!(PositionClass::First.to_string(), "first");
    assert_eq!(PositionClass::Only.as_str(), "only");
  }

  #[test]
  fn only_resource_columns_grow() {
    assert!(ColumnKind::Resource.grows());
    assert!(!ColumnKind::TimeScale.grows());
    assert!(!ColumnKind::SmallSeparator.grows());
  }

  #[test]
  fn span_coverage() {
    let cell = PlannedCell::new(0, 2, CellRole::DayHeader).with_column_span(3).with_row_span(2);

    assert!(cell.covers(1, 4));
    assert!(!cell.covers(2, 4));
    assert!(!cell.covers(0, 5));
    assert_eq!(cell.columns(), 2..5);
  }
}
