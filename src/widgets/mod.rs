//! Widgets drawn inside progress cells.
//!
//! # Progress bar
//!
//! [`ProgressBar`] fills the width of its column:
//!
//! ```rust,ignore
//! let bar = ProgressBar::new(Some(0.45));
//! // => ██████████████████░░░░░░░░░░░░░░░░░░░░░░ at 40 columns
//!
//! // Custom fill characters:
//! let bar = ProgressBar::new(Some(0.3)).chars('#', '.');
//! ```
//!
//! # Spinner
//!
//! [`Spinner`] picks a frame from a tick counter:
//!
//! ```rust,ignore
//! let spinner = Spinner::dots(); // ⠋ ⠙ ⠹ ...
//! let frame = spinner.frame_at(state.frame);
//!
//! // Other presets:
//! let s = Spinner::line();  // | / - \
//! let s = Spinner::arrow(); // ← ↖ ↑ ↗ → ↘ ↓ ↙
//! ```

mod progress_bar;
mod spinner;

pub use progress_bar::*;
pub use spinner::*;
