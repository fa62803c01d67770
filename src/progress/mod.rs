//! Progress bar definitions and the maker that lays them out.
//!
//! A [`ProgressBarDefinition`] lists the columns. Each frame, the tracker
//! takes a snapshot of every task as a [`ProgressState`] and hands the lot to
//! a [`ProgressBarWidgetMaker`]:
//!
//! ```rust,ignore
//! let definition = ProgressLayoutBuilder::new()
//!     .text_with(|s: &ProgressState<&'static str>| s.context.to_string())
//!     .progress_bar()
//!     .percentage()
//!     .build();
//!
//! let states = [
//!     ProgressState::new("serde").total(320).completed(120),
//!     ProgressState::new("tokio").total(890).completed(890),
//! ];
//! let widget = BaseProgressBarWidgetMaker.build(&definition, &states);
//! println!("{}", widget.render(60));
//! // serde  ███████████████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░   37%
//! // tokio  ███████████████████████████████████████████████  100%
//! ```

mod cells;
mod definition;
mod maker;
mod state;

pub use cells::*;
pub use definition::*;
pub use maker::*;
pub use state::*;
