use indexmap::IndexMap;

use super::{ColumnSpec, ColumnWidth, Padding, fit_block, resolve_widths};
use crate::widget::{Lines, WidthRange, Widget};

/// Which lines a [`Table`] draws around its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Borders {
    /// Cells are separated by padding only.
    None,
    /// Box-drawing lines around and between every cell.
    #[default]
    All,
}

/// Rows of cells whose columns share one width.
///
/// Padding is part of the column: a [`ColumnWidth::Fixed`] width covers the
/// cell content *and* its left and right padding.
///
/// ```rust,ignore
/// let table = Table::new()
///     .borders(Borders::None)
///     .padding(Padding::default().with_left(1))
///     .column(0, ColumnSpec::new().padding(Padding::all(0)))
///     .row([Text::boxed("a"), Text::boxed("1")])
///     .row([Text::boxed("bbb"), Text::boxed("22")]);
/// // a   1
/// // bbb 22
/// ```
pub struct Table {
    borders: Borders,
    padding: Padding,
    columns: IndexMap<usize, ColumnSpec>,
    rows: Vec<Vec<Box<dyn Widget>>>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            borders: Borders::default(),
            padding: Padding::horizontal(1),
            columns: IndexMap::new(),
            rows: Vec::new(),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Padding for every cell whose column doesn't override it.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn column(mut self, i: usize, spec: ColumnSpec) -> Self {
        self.columns.insert(i, spec);
        self
    }

    pub fn row(mut self, cells: impl IntoIterator<Item = Box<dyn Widget>>) -> Self {
        self.rows.push(cells.into_iter().collect());
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<Box<dyn Widget>>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn get_borders(&self) -> Borders {
        self.borders
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the longest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn get_column(&self, i: usize) -> Option<&ColumnSpec> {
        self.columns.get(&i)
    }

    /// The padding cells in column `i` are drawn with.
    pub fn column_padding(&self, i: usize) -> Padding {
        self.columns
            .get(&i)
            .and_then(|c| c.padding)
            .unwrap_or(self.padding)
    }

    /// The width policy of column `i`; auto when unset.
    pub fn column_width(&self, i: usize) -> ColumnWidth {
        self.columns.get(&i).and_then(|c| c.width).unwrap_or_default()
    }

    fn border_width(&self, columns: usize) -> usize {
        match self.borders {
            Borders::None => 0,
            Borders::All => columns + 1,
        }
    }

    fn ranges(&self, width: usize) -> Vec<(ColumnWidth, WidthRange)> {
        (0..self.column_count())
            .map(|i| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.measure(width))
                    .fold(WidthRange::ZERO, WidthRange::union);
                (self.column_width(i), content.grow(self.column_padding(i).width()))
            })
            .collect()
    }

    fn rule(&self, widths: &[usize], left: char, mid: char, right: char) -> String {
        let mut line = String::new();
        line.push(left);
        for (i, w) in widths.iter().enumerate() {
            if i > 0 {
                line.push(mid);
            }
            line.extend(std::iter::repeat_n('─', *w));
        }
        line.push(right);
        line
    }

    fn render_row(&self, row: &[Box<dyn Widget>], widths: &[usize]) -> Vec<String> {
        let mut cells = Vec::with_capacity(widths.len());
        for (i, &slot) in widths.iter().enumerate() {
            let padding = self.column_padding(i);
            let inner = slot.saturating_sub(padding.width());
            let lines = row.get(i).map(|c| c.render(inner)).unwrap_or_default();
            cells.push((padding, inner, lines));
        }
        let height = cells
            .iter()
            .map(|(p, _, lines)| lines.height() + p.top + p.bottom)
            .max()
            .unwrap_or(0);

        let blocks: Vec<Vec<String>> = cells
            .into_iter()
            .enumerate()
            .map(|(i, (padding, inner, lines))| {
                let spec = self.columns.get(&i).copied().unwrap_or_default();
                let content_height = height - padding.top - padding.bottom;
                let mut block = vec![" ".repeat(inner); padding.top];
                block.extend(fit_block(
                    lines,
                    inner,
                    content_height,
                    spec.align.unwrap_or_default(),
                    spec.vertical_align.unwrap_or_default(),
                ));
                block.extend(std::iter::repeat_n(" ".repeat(inner), padding.bottom));
                let (left, right) = (" ".repeat(padding.left), " ".repeat(padding.right));
                block
                    .into_iter()
                    .map(|l| format!("{left}{l}{right}"))
                    .collect()
            })
            .collect();

        let sep = match self.borders {
            Borders::None => "",
            Borders::All => "│",
        };
        (0..height)
            .map(|line| {
                let body = blocks
                    .iter()
                    .map(|b| b[line].as_str())
                    .collect::<Vec<_>>()
                    .join(sep);
                format!("{sep}{body}{sep}")
            })
            .collect()
    }
}

impl Widget for Table {
    fn measure(&self, width: usize) -> WidthRange {
        let mut total = WidthRange::exact(self.border_width(self.column_count()));
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
        let columns = self.column_count();
        if columns == 0 && self.borders == Borders::None {
            return Lines::new(vec![String::new(); self.rows.len()]);
        }
        let available = width.saturating_sub(self.border_width(columns));
        let widths = resolve_widths(&self.ranges(width), available);

        let mut out = Lines::empty();
        if self.borders == Borders::All {
            out.push(self.rule(&widths, '┌', '┬', '┐'));
        }
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 && self.borders == Borders::All {
                out.push(self.rule(&widths, '├', '┼', '┤'));
            }
            for line in self.render_row(row, &widths) {
                out.push(line);
            }
        }
        if self.borders == Borders::All {
            out.push(self.rule(&widths, '└', '┴', '┘'));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::HorizontalAlign;
    use crate::widget::Text;

    fn row(cells: &[&str]) -> Vec<Box<dyn Widget>> {
        cells.iter().map(|c| Text::boxed(*c)).collect()
    }

    #[test]
    fn borderless_table_aligns_columns() {
        let table = Table::new()
            .borders(Borders::None)
            .padding(Padding::default().with_left(1))
            .column(0, ColumnSpec::new().padding(Padding::all(0)))
            .row(row(&["a", "1"]))
            .row(row(&["bbb", "22"]));
        assert_eq!(table.render(80).into_inner(), vec!["a   1 ", "bbb 22"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn fixed_width_includes_padding() {
        let table = Table::new()
            .borders(Borders::None)
            .padding(Padding::default().with_left(2))
            .column(0, ColumnSpec::new().padding(Padding::all(0)))
            .column(
                1,
                ColumnSpec::new()
                    .width(ColumnWidth::Fixed(5))
                    .align(HorizontalAlign::Right),
            )
            .row(row(&["x", "7%"]));
        assert_eq!(table.render(80).to_string(), "x   7%");
    }

    #[test]
    fn bordered_table_draws_rules() {
        let table = Table::new()
            .padding(Padding::default())
            .row(row(&["a", "b"]))
            .row(row(&["c", "d"]));
        let expected = ["┌─┬─┐", "│a│b│", "├─┼─┤", "│c│d│", "└─┴─┘"];
        assert_eq!(table.render(80).into_inner(), expected);
    }

    #[test]
    fn vertical_padding_adds_blank_lines() {
        let table = Table::new()
            .borders(Borders::None)
            .padding(Padding::new(1, 0, 0, 0))
            .row(row(&["a"]));
        assert_eq!(table.render(80).into_inner(), vec![" ", "a"]);
    }
}
