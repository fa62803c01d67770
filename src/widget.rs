//! Rendering primitives shared by every layout.
//!
//! A [`Widget`] is measured first, then rendered to [`Lines`] at the width
//! its parent decided on. Widths are counted in terminal columns: CJK and
//! emoji take two, combining marks none, and ANSI SGR sequences (as produced
//! by `owo-colors` and friends) take no space either.

use unicode_width::UnicodeWidthChar;

/// Range of widths a widget can usefully occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthRange {
    pub min: usize,
    pub max: usize,
}

impl WidthRange {
    pub const ZERO: Self = Self { min: 0, max: 0 };

    /// Creates a range, raising `max` to `min` if needed.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// A widget that is always exactly `width` columns wide.
    pub fn exact(width: usize) -> Self {
        Self {
            min: width,
            max: width,
        }
    }

    /// Grows both bounds by `n` columns.
    pub fn grow(self, n: usize) -> Self {
        Self {
            min: self.min.saturating_add(n),
            max: self.max.saturating_add(n),
        }
    }

    /// Smallest range that satisfies both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.max(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Rendered output of a widget, one string per terminal line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lines(Vec<String>);

impl Lines {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    /// No lines at all. Occupies no space.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// Display width of the widest line.
    pub fn width(&self) -> usize {
        self.0.iter().map(|l| display_width(l)).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.0.iter().map(String::as_str)
    }

    pub fn push(&mut self, line: String) {
        self.0.push(line);
    }

    pub fn extend(&mut self, other: Lines) {
        self.0.extend(other.0);
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for Lines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Something that can be laid out and drawn on a terminal.
///
/// ```rust,ignore
/// struct Dots(usize);
///
/// impl Widget for Dots {
///     fn measure(&self, _width: usize) -> WidthRange {
///         WidthRange::new(1, self.0)
///     }
///     fn render(&self, width: usize) -> Lines {
///         Lines::new(vec![".".repeat(self.0.min(width))])
///     }
/// }
/// ```
pub trait Widget {
    /// Reports the widths this widget can use when at most `width` columns are available.
    fn measure(&self, width: usize) -> WidthRange;

    /// Draws the widget into at most `width` columns.
    fn render(&self, width: usize) -> Lines;
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn measure(&self, width: usize) -> WidthRange {
        (**self).measure(width)
    }

    fn render(&self, width: usize) -> Lines {
        (**self).render(width)
    }
}

impl<W: Widget + ?Sized> Widget for &W {
    fn measure(&self, width: usize) -> WidthRange {
        (**self).measure(width)
    }

    fn render(&self, width: usize) -> Lines {
        (**self).render(width)
    }
}

/// A widget that renders nothing and takes no space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyWidget;

impl Widget for EmptyWidget {
    fn measure(&self, _width: usize) -> WidthRange {
        WidthRange::ZERO
    }

    fn render(&self, _width: usize) -> Lines {
        Lines::empty()
    }
}

/// Plain (possibly styled) text. Never wraps; lines wider than the
/// available width are cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    lines: Vec<String>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Boxes the text for use as a cell.
    pub fn boxed(text: impl Into<String>) -> Box<dyn Widget> {
        Box::new(Self::new(text))
    }
}

impl Widget for Text {
    fn measure(&self, _width: usize) -> WidthRange {
        let w = self.lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        WidthRange::exact(w)
    }

    fn render(&self, width: usize) -> Lines {
        Lines::new(self.lines.iter().map(|l| truncate(l, width)).collect())
    }
}

/// Number of terminal columns `s` occupies, skipping ANSI escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            skip_escape(&mut chars);
        } else {
            width += UnicodeWidthChar::width(c).unwrap_or(0);
        }
    }
    width
}

/// Cuts `s` to at most `width` visible columns, keeping escape sequences intact.
pub fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_owned();
    }
    let mut out = String::with_capacity(s.len());
    let mut visible = 0;
    let mut styled = false;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            out.push(c);
            let rest = chars.as_str();
            skip_escape(&mut chars);
            out.push_str(&rest[..rest.len() - chars.as_str().len()]);
            styled = true;
            continue;
        }
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if visible + w > width {
            break;
        }
        out.push(c);
        visible += w;
    }
    if styled {
        out.push_str("\x1b[0m");
    }
    out
}

// CSI sequences end with a byte in '@'..='~'.
fn skip_escape(chars: &mut std::str::Chars<'_>) {
    if chars.clone().next() != Some('[') {
        return;
    }
    chars.next();
    for c in chars.by_ref() {
        if ('@'..='~').contains(&c) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_skips_sgr_sequences() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("⠋"), 1);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("🌑"), 2);
    }

    #[test]
    fn truncate_keeps_styles_balanced() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hi", 5), "hi");
        assert_eq!(truncate("\x1b[1mbold\x1b[0m", 2), "\x1b[1mbo\x1b[0m");
    }

    #[test]
    fn truncate_never_splits_a_wide_char() {
        assert_eq!(truncate("日本語", 3), "日");
        assert_eq!(truncate("日本語", 4), "日本");
        assert_eq!(display_width(&truncate("a🌑b", 2)), 1);
    }

    #[test]
    fn text_measures_widest_line() {
        let text = Text::new("ab\nabcd");
        assert_eq!(text.measure(80), WidthRange::exact(4));
        assert_eq!(text.render(3).into_inner(), vec!["ab", "abc"]);
    }

    #[test]
    fn empty_widget_has_no_lines() {
        assert_eq!(EmptyWidget.measure(80), WidthRange::ZERO);
        assert!(EmptyWidget.render(80).is_empty());
    }
}
