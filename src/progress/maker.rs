use tracing::trace;

use super::{ProgressBarDefinition, ProgressState};
use crate::layout::{
    Borders, ColumnSpec, ColumnWidth, HorizontalLayout, Padding, Table, VerticalLayout,
};
use crate::widget::{EmptyWidget, Lines, WidthRange, Widget};

/// Turns a definition and the current task states into widgets.
///
/// Implement this to change how rows are arranged; most callers use
/// [`BaseProgressBarWidgetMaker`].
pub trait ProgressBarWidgetMaker {
    /// The composed widget [`Self::build`] produces.
    type Output: Widget;

    /// Builds one widget showing a row for each state, in order.
    fn build<T>(
        &self, definition: &ProgressBarDefinition<T>, states: &[ProgressState<T>],
    ) -> Self::Output;

    /// Builds the widget of every cell, one row per state.
    ///
    /// Use this to place the cells in a larger layout, like a table with
    /// columns of its own.
    fn build_cells<T>(
        &self, definition: &ProgressBarDefinition<T>, states: &[ProgressState<T>],
    ) -> Vec<Vec<Box<dyn Widget>>>;
}

/// What [`BaseProgressBarWidgetMaker::build`] chose.
pub enum ProgressLayout {
    /// No states: nothing to draw.
    Empty,
    /// One state, columns sized on their own.
    Row(HorizontalLayout),
    /// Several states, each row sized on its own.
    Stack(VerticalLayout),
    /// Rows with aligned columns.
    Grid(Table),
}

impl ProgressLayout {
    /// Short name of the chosen strategy, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Row(_) => "row",
            Self::Stack(_) => "stack",
            Self::Grid(_) => "grid",
        }
    }

    /// Whether there were no states to lay out.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn widget(&self) -> &dyn Widget {
        match self {
            Self::Empty => &EmptyWidget,
            Self::Row(row) => row,
            Self::Stack(stack) => stack,
            Self::Grid(table) => table,
        }
    }
}

impl Widget for ProgressLayout {
    fn measure(&self, width: usize) -> WidthRange {
        self.widget().measure(width)
    }

    fn render(&self, width: usize) -> Lines {
        self.widget().render(width)
    }
}

/// Lays out states as a single row, a stack of rows, or an aligned grid.
///
/// - no states: [`ProgressLayout::Empty`]
/// - `align_columns`: a borderless [`Table`], one row per state
/// - otherwise: one [`HorizontalLayout`] per state, stacked if there are several
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseProgressBarWidgetMaker;

impl ProgressBarWidgetMaker for BaseProgressBarWidgetMaker {
    type Output = ProgressLayout;

    fn build<T>(
        &self, definition: &ProgressBarDefinition<T>, states: &[ProgressState<T>],
    ) -> ProgressLayout {
        let layout = if states.is_empty() {
            ProgressLayout::Empty
        } else if definition.align_columns() {
            make_table(definition, states)
        } else {
            make_linear_layout(definition, states)
        };
        trace!(
            layout = layout.name(),
            rows = states.len(),
            columns = definition.cells().len(),
            "built progress layout"
        );
        layout
    }

    fn build_cells<T>(
        &self, definition: &ProgressBarDefinition<T>, states: &[ProgressState<T>],
    ) -> Vec<Vec<Box<dyn Widget>>> {
        states.iter().map(|s| row_cells(definition, s)).collect()
    }
}

fn row_cells<T>(d: &ProgressBarDefinition<T>, state: &ProgressState<T>) -> Vec<Box<dyn Widget>> {
    d.cells().iter().map(|cell| cell.content.render(state)).collect()
}

fn make_linear_layout<T>(d: &ProgressBarDefinition<T>, states: &[ProgressState<T>]) -> ProgressLayout {
    match states {
        [state] => ProgressLayout::Row(make_horizontal_layout(d, state)),
        _ => ProgressLayout::Stack(
            states
                .iter()
                .fold(VerticalLayout::new(), |stack, state| stack.cell(make_horizontal_layout(d, state))),
        ),
    }
}

fn make_horizontal_layout<T>(d: &ProgressBarDefinition<T>, state: &ProgressState<T>) -> HorizontalLayout {
    let mut row = HorizontalLayout::new()
        .spacing(d.spacing())
        .cells(row_cells(d, state));
    for (i, cell) in d.cells().iter().enumerate() {
        row = row.column(
            i,
            ColumnSpec::new()
                .width(cell.column_width)
                .align(cell.align)
                .vertical_align(cell.vertical_align),
        );
    }
    row
}

fn make_table<T>(d: &ProgressBarDefinition<T>, states: &[ProgressState<T>]) -> ProgressLayout {
    let mut table = Table::new()
        .borders(Borders::None)
        .padding(Padding::default().with_left(d.spacing()));
    for (i, cell) in d.cells().iter().enumerate() {
        let width = match cell.column_width {
            // Table widths include padding, row widths don't
            ColumnWidth::Fixed(w) if i > 0 => ColumnWidth::Fixed(w.saturating_add(d.spacing())),
            w => w,
        };
        let mut spec = ColumnSpec::new()
            .width(width)
            .align(cell.align)
            .vertical_align(cell.vertical_align);
        if i == 0 {
            spec = spec.padding(Padding::all(0));
        }
        table = table.column(i, spec);
    }
    ProgressLayout::Grid(table.rows(states.iter().map(|s| row_cells(d, s))))
}
