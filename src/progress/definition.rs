use super::ProgressState;
use crate::layout::{ColumnWidth, HorizontalAlign, VerticalAlign};
use crate::widget::Widget;

/// Turns a task's state into the widget shown in one column.
///
/// Must be a pure function of the state: the same state always produces
/// the same widget. Closures returning a boxed widget implement it directly.
///
/// ```rust,ignore
/// let name = |s: &ProgressState<&str>| Text::boxed(s.context);
/// let cell = CellDefinition::new(name).with_width(ColumnWidth::Fixed(12));
/// ```
pub trait ProgressCell<T> {
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget>;
}

impl<T, F> ProgressCell<T> for F
where F: Fn(&ProgressState<T>) -> Box<dyn Widget>
{
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget> {
        self(state)
    }
}

/// One column of a progress bar.
pub struct CellDefinition<T> {
    pub content: Box<dyn ProgressCell<T> + Send + Sync>,
    pub column_width: ColumnWidth,
    pub align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
}

impl<T> CellDefinition<T> {
    /// An auto-width, top-left aligned cell.
    pub fn new(content: impl ProgressCell<T> + Send + Sync + 'static) -> Self {
        Self {
            content: Box::new(content),
            column_width: ColumnWidth::AUTO,
            align: HorizontalAlign::Left,
            vertical_align: VerticalAlign::Top,
        }
    }

    pub fn with_width(mut self, width: ColumnWidth) -> Self {
        self.column_width = width;
        self
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }
}

impl<T> std::fmt::Debug for CellDefinition<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellDefinition")
            .field("column_width", &self.column_width)
            .field("align", &self.align)
            .field("vertical_align", &self.vertical_align)
            .finish_non_exhaustive()
    }
}

/// The columns of a progress bar and how rows of them are laid out.
///
/// Cell `i` is the same column in every row. Build one with
/// [`super::ProgressLayoutBuilder`] or [`ProgressBarDefinition::new`].
#[derive(Debug)]
pub struct ProgressBarDefinition<T> {
    cells: Vec<CellDefinition<T>>,
    spacing: usize,
    align_columns: bool,
}

impl<T> ProgressBarDefinition<T> {
    pub fn new(cells: Vec<CellDefinition<T>>, spacing: usize, align_columns: bool) -> Self {
        Self {
            cells,
            spacing,
            align_columns,
        }
    }

    pub fn cells(&self) -> &[CellDefinition<T>] {
        &self.cells
    }

    /// Blank columns between adjacent cells.
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Whether rows share column widths.
    pub fn align_columns(&self) -> bool {
        self.align_columns
    }
}
