use std::time::Duration;

use super::{CellDefinition, ProgressBarDefinition, ProgressCell, ProgressState};
use crate::layout::{ColumnWidth, HorizontalAlign};
use crate::widget::{Text, Widget};
use crate::widgets::{ProgressBar, Spinner};

/// Builds a [`ProgressBarDefinition`] one column at a time.
///
/// Defaults to two blank columns between cells, with columns aligned
/// across rows.
///
/// ```rust,ignore
/// let definition = ProgressLayoutBuilder::<&str>::new()
///     .spinner(Spinner::dots())
///     .text_with(|s| s.context.to_string())
///     .progress_bar()
///     .percentage()
///     .completed("B")
///     .speed("B")
///     .build();
/// ```
pub struct ProgressLayoutBuilder<T> {
    cells: Vec<CellDefinition<T>>,
    spacing: usize,
    align_columns: bool,
}

impl<T> Default for ProgressLayoutBuilder<T> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            spacing: 2,
            align_columns: true,
        }
    }
}

impl<T> ProgressLayoutBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn align_columns(mut self, align: bool) -> Self {
        self.align_columns = align;
        self
    }

    pub fn cell(mut self, cell: CellDefinition<T>) -> Self {
        self.cells.push(cell);
        self
    }

    /// Fixed text, the same in every row.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.cell(CellDefinition::new(TextCell(text.into())))
    }

    /// Text derived from each row's state, usually from its context.
    pub fn text_with<F>(self, f: F) -> Self
    where F: Fn(&ProgressState<T>) -> String + Send + Sync + 'static {
        self.cell(CellDefinition::new(TextFn(f)))
    }

    pub fn spinner(self, spinner: Spinner) -> Self {
        let width = spinner.width();
        self.cell(CellDefinition::new(SpinnerCell(spinner)).with_width(ColumnWidth::Fixed(width)))
    }

    /// A bar taking all the space the other columns leave.
    pub fn progress_bar(self) -> Self {
        self.cell(CellDefinition::new(BarCell(ProgressBar::new(None))).with_width(ColumnWidth::expand(1)))
    }

    /// Like [`Self::progress_bar`], with custom fill characters.
    pub fn progress_bar_chars(self, filled: char, empty: char) -> Self {
        let bar = ProgressBar::new(None).chars(filled, empty);
        self.cell(CellDefinition::new(BarCell(bar)).with_width(ColumnWidth::expand(1)))
    }

    /// `" 45%"`.
    pub fn percentage(self) -> Self {
        self.cell(
            CellDefinition::new(PercentageCell)
                .with_width(ColumnWidth::Fixed(4))
                .with_align(HorizontalAlign::Right),
        )
    }

    /// `"1.2/3.4MB"`, with SI prefixes shared by both counts.
    pub fn completed(self, suffix: &'static str) -> Self {
        self.cell(CellDefinition::new(CompletedCell { suffix }).with_align(HorizontalAlign::Right))
    }

    /// `"1.2MB/s"`, from the speed the tracker reported.
    pub fn speed(self, suffix: &'static str) -> Self {
        self.cell(CellDefinition::new(SpeedCell { suffix }).with_align(HorizontalAlign::Right))
    }

    /// `"1:05"` or `"1:02:03"`.
    pub fn elapsed(self) -> Self {
        self.cell(CellDefinition::new(ElapsedCell).with_align(HorizontalAlign::Right))
    }

    pub fn build(self) -> ProgressBarDefinition<T> {
        ProgressBarDefinition::new(self.cells, self.spacing, self.align_columns)
    }
}

struct TextCell(String);

impl<T> ProgressCell<T> for TextCell {
    fn render(&self, _state: &ProgressState<T>) -> Box<dyn Widget> {
        Text::boxed(self.0.clone())
    }
}

struct TextFn<F>(F);

impl<T, F> ProgressCell<T> for TextFn<F>
where F: Fn(&ProgressState<T>) -> String
{
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget> {
        Text::boxed((self.0)(state))
    }
}

struct SpinnerCell(Spinner);

impl<T> ProgressCell<T> for SpinnerCell {
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget> {
        Text::boxed(self.0.frame_at(state.frame))
    }
}

struct BarCell(ProgressBar);

impl<T> ProgressCell<T> for BarCell {
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget> {
        Box::new(self.0.with_ratio(state.ratio()))
    }
}

struct PercentageCell;

impl<T> ProgressCell<T> for PercentageCell {
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget> {
        match state.percent() {
            Some(p) => Text::boxed(format!("{p:>3}%")),
            None => Text::boxed("---%"),
        }
    }
}

struct CompletedCell {
    suffix: &'static str,
}

impl<T> ProgressCell<T> for CompletedCell {
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget> {
        let completed = state.completed as f64;
        let text = match state.total {
            Some(total) => {
                let scale = si_scale(completed.max(total as f64));
                format!(
                    "{}/{}{}{}",
                    scaled(completed, scale),
                    scaled(total as f64, scale),
                    SI_PREFIXES[scale],
                    self.suffix
                )
            }
            None => {
                let scale = si_scale(completed);
                format!("{}{}{}", scaled(completed, scale), SI_PREFIXES[scale], self.suffix)
            }
        };
        Text::boxed(text)
    }
}

struct SpeedCell {
    suffix: &'static str,
}

impl<T> ProgressCell<T> for SpeedCell {
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget> {
        match state.speed {
            Some(speed) if speed.is_finite() && speed >= 0.0 => {
                let scale = si_scale(speed);
                Text::boxed(format!(
                    "{:.1}{}{}/s",
                    speed / 1000f64.powi(scale as i32),
                    SI_PREFIXES[scale],
                    self.suffix
                ))
            }
            _ => Text::boxed(format!("---.-{}/s", self.suffix)),
        }
    }
}

struct ElapsedCell;

impl<T> ProgressCell<T> for ElapsedCell {
    fn render(&self, state: &ProgressState<T>) -> Box<dyn Widget> {
        Text::boxed(format_duration(state.elapsed))
    }
}

const SI_PREFIXES: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

fn si_scale(value: f64) -> usize {
    let mut scale = 0;
    let mut v = value;
    while v >= 1000.0 && scale < SI_PREFIXES.len() - 1 {
        v /= 1000.0;
        scale += 1;
    }
    scale
}

// Whole numbers below 1000, one decimal above.
fn scaled(value: f64, scale: usize) -> String {
    match scale {
        0 => format!("{}", value as u64),
        _ => format!("{:.1}", value / 1000f64.powi(scale as i32)),
    }
}

/// `M:SS` below an hour, `H:MM:SS` above.
pub(crate) fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
    match h {
        0 => format!("{m}:{s:02}"),
        _ => format!("{h}:{m:02}:{s:02}"),
    }
}
