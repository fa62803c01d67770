#![doc = include_str!("../README.md")]

pub mod layout;
pub mod progress;
pub mod widget;
pub mod widgets;
pub(crate) mod writer;

#[cfg(test)]
mod test;

/// Re-exports of all public types and traits.
pub mod prelude {
    pub use crate::layout::{
        Borders, ColumnSpec, ColumnWidth, Flex, HorizontalAlign, HorizontalLayout, Padding, Table,
        VerticalAlign, VerticalLayout,
    };
    pub use crate::progress::{
        BaseProgressBarWidgetMaker, CellDefinition, ProgressBarDefinition, ProgressBarWidgetMaker,
        ProgressCell, ProgressLayout, ProgressLayoutBuilder, ProgressState, Status,
    };
    pub use crate::widget::{EmptyWidget, Lines, Text, WidthRange, Widget};
    pub use crate::widgets::{ProgressBar, Spinner};
    pub use crate::writer::ProgressRenderer;
}

pub use crate::prelude::*;
