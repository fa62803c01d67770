use crate::widget::{Lines, WidthRange, Widget};

/// A bar that fills whatever width its column gives it.
///
/// ```rust,ignore
/// let bar = ProgressBar::new(Some(0.45));
/// assert_eq!(bar.render(20).to_string(), "█████████░░░░░░░░░░░");
///
/// // Custom fill characters:
/// let bar = ProgressBar::new(Some(0.3)).chars('#', '.');
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    ratio: Option<f64>,
    preferred: usize,
    filled: char,
    empty: char,
}

impl ProgressBar {
    /// A bar at `ratio` (clamped to `0.0..=1.0`); `None` draws an empty track.
    pub fn new(ratio: Option<f64>) -> Self {
        Self {
            ratio: ratio.map(|r| r.clamp(0.0, 1.0)),
            preferred: 40,
            filled: '█',
            empty: '░',
        }
    }

    /// Width used when the column sizes to content instead of expanding.
    pub fn width(mut self, w: usize) -> Self {
        self.preferred = w;
        self
    }

    pub fn chars(mut self, filled: char, empty: char) -> Self {
        self.filled = filled;
        self.empty = empty;
        self
    }

    /// The same bar at a different ratio.
    pub fn with_ratio(mut self, ratio: Option<f64>) -> Self {
        self.ratio = ratio.map(|r| r.clamp(0.0, 1.0));
        self
    }

    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }
}

impl Widget for ProgressBar {
    fn measure(&self, _width: usize) -> WidthRange {
        WidthRange::new(1, self.preferred)
    }

    fn render(&self, width: usize) -> Lines {
        let filled = (self.ratio.unwrap_or(0.0) * width as f64) as usize;
        let empty = width - filled;
        let mut line = String::with_capacity(width * 3);
        line.extend(std::iter::repeat_n(self.filled, filled));
        line.extend(std::iter::repeat_n(self.empty, empty));
        Lines::new(vec![line])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_proportionally() {
        let bar = ProgressBar::new(Some(0.5)).chars('#', '.');
        assert_eq!(bar.render(10).to_string(), "#####.....");
    }

    #[test]
    fn unknown_ratio_is_empty_track() {
        let bar = ProgressBar::new(None).chars('#', '.');
        assert_eq!(bar.render(4).to_string(), "....");
        assert_eq!(bar.measure(80), WidthRange::new(1, 40));
    }
}
