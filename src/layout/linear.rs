use indexmap::IndexMap;

use super::{ColumnSpec, ColumnWidth, fit_block, resolve_widths};
use crate::widget::{Lines, WidthRange, Widget};

/// Cells side by side, separated by `spacing` blank columns.
///
/// Each cell is sized on its own: a row knows nothing about the rows above
/// or below it. Use a [`super::Table`] when columns must line up.
#[derive(Default)]
pub struct HorizontalLayout {
    cells: Vec<Box<dyn Widget>>,
    columns: IndexMap<usize, ColumnSpec>,
    spacing: usize,
}

impl HorizontalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn cell(mut self, widget: impl Widget + 'static) -> Self {
        self.cells.push(Box::new(widget));
        self
    }

    pub fn cells(mut self, widgets: impl IntoIterator<Item = Box<dyn Widget>>) -> Self {
        self.cells.extend(widgets);
        self
    }

    /// Overrides width and alignment of the cell at index `i`.
    pub fn column(mut self, i: usize, spec: ColumnSpec) -> Self {
        self.columns.insert(i, spec);
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get_spacing(&self) -> usize {
        self.spacing
    }

    /// The column spec applied to cell `i`, if any.
    pub fn get_column(&self, i: usize) -> Option<&ColumnSpec> {
        self.columns.get(&i)
    }

    fn gaps(&self) -> usize {
        self.spacing * self.cells.len().saturating_sub(1)
    }

    fn policy(&self, i: usize) -> ColumnWidth {
        self.columns.get(&i).and_then(|c| c.width).unwrap_or_default()
    }

    fn ranges(&self, width: usize) -> Vec<(ColumnWidth, WidthRange)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.policy(i), cell.measure(width)))
            .collect()
    }
}

impl Widget for HorizontalLayout {
    fn measure(&self, width: usize) -> WidthRange {
        let mut total = WidthRange::exact(self.gaps());
        for (policy, range) in self.ranges(width) {
            let range = match policy {
                ColumnWidth::Fixed(w) => WidthRange::exact(w),
                ColumnWidth::Flexible(_) => range,
            };
            total = WidthRange::new(total.min + range.min, total.max.saturating_add(range.max));
        }
        total
    }

    fn render(&self, width: usize) -> Lines {
        // A row is at least one line tall, even with no cells.
        if self.cells.is_empty() {
            return Lines::new(vec![String::new()]);
        }
        let widths = resolve_widths(&self.ranges(width), width.saturating_sub(self.gaps()));
        let rendered: Vec<Lines> = self
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| cell.render(w))
            .collect();
        let height = rendered.iter().map(Lines::height).max().unwrap_or(0);

        let blocks: Vec<Vec<String>> = rendered
            .into_iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (lines, &w))| {
                let spec = self.columns.get(&i).copied().unwrap_or_default();
                fit_block(
                    lines,
                    w,
                    height,
                    spec.align.unwrap_or_default(),
                    spec.vertical_align.unwrap_or_default(),
                )
            })
            .collect();

        let gap = " ".repeat(self.spacing);
        let lines = (0..height)
            .map(|row| {
                blocks
                    .iter()
                    .map(|block| block[row].as_str())
                    .collect::<Vec<_>>()
                    .join(&gap)
            })
            .collect();
        Lines::new(lines)
    }
}

/// Widgets stacked top to bottom, each rendered at the full width.
#[derive(Default)]
pub struct VerticalLayout {
    cells: Vec<Box<dyn Widget>>,
    spacing: usize,
}

impl VerticalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank lines between cells.
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn cell(mut self, widget: impl Widget + 'static) -> Self {
        self.cells.push(Box::new(widget));
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &dyn Widget> {
        self.cells.iter().map(|c| c.as_ref())
    }
}

impl Widget for VerticalLayout {
    fn measure(&self, width: usize) -> WidthRange {
        self.cells
            .iter()
            .map(|c| c.measure(width))
            .fold(WidthRange::ZERO, WidthRange::union)
    }

    fn render(&self, width: usize) -> Lines {
        let mut out = Lines::empty();
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                for _ in 0..self.spacing {
                    out.push(String::new());
                }
            }
            out.extend(cell.render(width));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::HorizontalAlign;
    use crate::widget::Text;

    #[test]
    fn row_separates_cells_with_spacing() {
        let row = HorizontalLayout::new()
            .spacing(2)
            .cell(Text::new("a"))
            .cell(Text::new("bb"))
            .cell(Text::new("c"));
        assert_eq!(row.render(80).to_string(), "a  bb  c");
        assert_eq!(row.measure(80), WidthRange::exact(8));
    }

    #[test]
    fn row_applies_fixed_width_and_alignment() {
        let row = HorizontalLayout::new()
            .spacing(1)
            .cell(Text::new("7%"))
            .cell(Text::new("x"))
            .column(
                0,
                ColumnSpec::new()
                    .width(ColumnWidth::Fixed(4))
                    .align(HorizontalAlign::Right),
            );
        assert_eq!(row.render(80).to_string(), "  7% x");
    }

    #[test]
    fn row_pads_shorter_cells_to_row_height() {
        let row = HorizontalLayout::new()
            .spacing(1)
            .cell(Text::new("a\nb"))
            .cell(Text::new("c"));
        assert_eq!(row.render(80).into_inner(), vec!["a c", "b  "]);
    }

    #[test]
    fn stack_renders_rows_independently() {
        let stack = VerticalLayout::new()
            .cell(HorizontalLayout::new().spacing(1).cell(Text::new("a")).cell(Text::new("b")))
            .cell(HorizontalLayout::new().spacing(1).cell(Text::new("ccc")).cell(Text::new("d")));
        assert_eq!(stack.render(80).into_inner(), vec!["a b", "ccc d"]);
    }

    #[test]
    fn empty_row_is_one_blank_line() {
        let row = HorizontalLayout::new().spacing(3);
        assert_eq!(row.render(80).into_inner(), vec![String::new()]);
        assert_eq!(row.measure(80), WidthRange::ZERO);
    }
}
