//! Composite widgets: rows, stacks and tables.
//!
//! All three share the same column model. Every column has a [`ColumnWidth`]
//! policy and alignment, set through a [`ColumnSpec`]:
//!
//! ```rust,ignore
//! let row = HorizontalLayout::new()
//!     .spacing(1)
//!     .cell(Text::new("⠋"))
//!     .cell(ProgressBar::new(Some(0.45)))
//!     .cell(Text::new(" 45%"))
//!     .column(1, ColumnSpec::new().width(ColumnWidth::expand(1)))
//!     .column(2, ColumnSpec::new().width(ColumnWidth::Fixed(4)));
//! ```

mod linear;
mod table;

pub use linear::*;
pub use table::*;

use crate::widget::{Lines, WidthRange, display_width, truncate};

/// How wide a column is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Exactly this many columns, whatever the content.
    Fixed(usize),
    /// Sized from the content and the space left over.
    Flexible(Flex),
}

/// Sizing rule of a [`ColumnWidth::Flexible`] column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flex {
    /// As wide as the widest content.
    Auto,
    /// Takes a share of the leftover space proportional to its weight.
    Expand(u16),
}

impl ColumnWidth {
    pub const AUTO: Self = Self::Flexible(Flex::Auto);

    pub fn expand(weight: u16) -> Self {
        Self::Flexible(Flex::Expand(weight))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::AUTO
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Blank space around a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(n: usize) -> Self {
        Self::new(n, n, n, n)
    }

    /// Same padding on the left and right only.
    pub fn horizontal(n: usize) -> Self {
        Self::new(0, n, 0, n)
    }

    pub fn with_left(mut self, n: usize) -> Self {
        self.left = n;
        self
    }

    pub fn with_right(mut self, n: usize) -> Self {
        self.right = n;
        self
    }

    pub(crate) fn width(&self) -> usize {
        self.left + self.right
    }
}

/// Per-column overrides. Unset fields fall back to the layout's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSpec {
    pub width: Option<ColumnWidth>,
    pub align: Option<HorizontalAlign>,
    pub vertical_align: Option<VerticalAlign>,
    /// Only tables pad their cells; rows use their spacing instead.
    pub padding: Option<Padding>,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }
}

/// Resolves the final width of each column.
///
/// Each column carries its policy and measured range, the range already including any
/// padding. Fixed columns never change. When space is short, auto columns
/// shrink toward their minimum, widest first. Leftover space goes to
/// expanding columns by weight.
pub(crate) fn resolve_widths(columns: &[(ColumnWidth, WidthRange)], available: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|(policy, range)| match policy {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flexible(Flex::Auto) => range.max,
            ColumnWidth::Flexible(Flex::Expand(_)) => range.min,
        })
        .collect();

    let total: usize = widths.iter().sum();
    if total > available {
        let mut overflow = total - available;
        let mut auto: Vec<usize> = (0..columns.len())
            .filter(|&i| columns[i].0 == ColumnWidth::AUTO)
            .collect();
        auto.sort_by_key(|&i| std::cmp::Reverse(widths[i].saturating_sub(columns[i].1.min)));
        for i in auto {
            let take = widths[i].saturating_sub(columns[i].1.min).min(overflow);
            widths[i] -= take;
            overflow -= take;
            if overflow == 0 {
                break;
            }
        }
        return widths;
    }

    let leftover = available - total;
    let weights: Vec<(usize, usize)> = columns
        .iter()
        .enumerate()
        .filter_map(|(i, (policy, _))| match policy {
            ColumnWidth::Flexible(Flex::Expand(w)) if *w > 0 => Some((i, *w as usize)),
            _ => None,
        })
        .collect();
    let total_weight: usize = weights.iter().map(|(_, w)| w).sum();
    if total_weight == 0 {
        return widths;
    }

    let mut given = 0;
    for (n, &(i, weight)) in weights.iter().enumerate() {
        let share = if n == weights.len() - 1 {
            leftover - given
        } else {
            leftover * weight / total_weight
        };
        widths[i] += share;
        given += share;
    }
    widths
}

/// Pads or cuts one line to exactly `width` columns.
pub(crate) fn fit_line(line: &str, width: usize, align: HorizontalAlign) -> String {
    // A wide char cut at the edge can leave the line one column short.
    let line = match display_width(line) > width {
        true => truncate(line, width),
        false => line.to_owned(),
    };
    let gap = width - display_width(&line);
    let (left, right) = match align {
        HorizontalAlign::Left => (0, gap),
        HorizontalAlign::Center => (gap / 2, gap - gap / 2),
        HorizontalAlign::Right => (gap, 0),
    };
    format!("{}{line}{}", " ".repeat(left), " ".repeat(right))
}

/// Fits rendered cell content into a `width` x `height` block.
pub(crate) fn fit_block(
    lines: Lines, width: usize, height: usize, align: HorizontalAlign, valign: VerticalAlign,
) -> Vec<String> {
    let content: Vec<String> = lines
        .iter()
        .take(height)
        .map(|l| fit_line(l, width, align))
        .collect();
    let gap = height - content.len();
    let top = match valign {
        VerticalAlign::Top => 0,
        VerticalAlign::Middle => gap / 2,
        VerticalAlign::Bottom => gap,
    };
    let blank = " ".repeat(width);
    let mut block = Vec::with_capacity(height);
    block.extend(std::iter::repeat_n(blank.clone(), top));
    block.extend(content);
    block.extend(std::iter::repeat_n(blank, gap - top));
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_and_auto_widths_are_kept_when_they_fit() {
        let cols = [
            (ColumnWidth::Fixed(3), WidthRange::exact(10)),
            (ColumnWidth::AUTO, WidthRange::new(2, 6)),
        ];
        assert_eq!(resolve_widths(&cols, 20), vec![3, 6]);
    }

    #[test]
    fn expand_columns_share_leftover_by_weight() {
        let cols = [
            (ColumnWidth::expand(1), WidthRange::new(1, 5)),
            (ColumnWidth::Fixed(4), WidthRange::exact(4)),
            (ColumnWidth::expand(3), WidthRange::new(1, 5)),
        ];
        // 14 left over after 1 + 4 + 1
        assert_eq!(resolve_widths(&cols, 20), vec![4, 4, 12]);
    }

    #[test]
    fn auto_columns_shrink_widest_first() {
        let cols = [
            (ColumnWidth::AUTO, WidthRange::new(2, 4)),
            (ColumnWidth::AUTO, WidthRange::new(2, 10)),
            (ColumnWidth::Fixed(3), WidthRange::exact(3)),
        ];
        assert_eq!(resolve_widths(&cols, 12), vec![4, 5, 3]);
    }

    #[test]
    fn fit_line_aligns_and_cuts() {
        assert_eq!(fit_line("ab", 5, HorizontalAlign::Left), "ab   ");
        assert_eq!(fit_line("ab", 5, HorizontalAlign::Right), "   ab");
        assert_eq!(fit_line("ab", 5, HorizontalAlign::Center), " ab  ");
        assert_eq!(fit_line("abcdef", 3, HorizontalAlign::Right), "abc");
        assert_eq!(fit_line("日本", 3, HorizontalAlign::Left), "日 ");
    }

    #[test]
    fn fit_block_aligns_vertically() {
        let lines = Lines::new(vec!["x".into()]);
        let block = fit_block(lines, 2, 3, HorizontalAlign::Right, VerticalAlign::Bottom);
        assert_eq!(block, vec!["  ", "  ", " x"]);
    }
}
