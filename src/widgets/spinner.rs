/// A set of animation frames.
///
/// Spinners hold no position of their own: the frame shown is picked from
/// the frame counter of the state being drawn, so rows redrawn from the same
/// snapshot always look the same.
///
/// ```rust,ignore
/// let spinner = Spinner::dots(); // ⠋ ⠙ ⠹ ...
/// assert_eq!(spinner.frame_at(1), "⠙");
///
/// // Custom frames:
/// let s = Spinner::custom(&["🌑", "🌒", "🌓", "🌔", "🌕"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    frames: &'static [&'static str],
}

impl Spinner {
    /// Braille dot spinner (the most common choice).
    pub fn dots() -> Self {
        Self {
            frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        }
    }

    /// Classic line spinner.
    pub fn line() -> Self {
        Self {
            frames: &["|", "/", "-", "\\"],
        }
    }

    /// Arrow spinner.
    pub fn arrow() -> Self {
        Self {
            frames: &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"],
        }
    }

    /// Custom frames. An empty slice renders as a blank.
    pub fn custom(frames: &'static [&'static str]) -> Self {
        Self { frames }
    }

    /// Frame for the given tick, wrapping around.
    pub fn frame_at(&self, tick: usize) -> &'static str {
        match self.frames.len() {
            0 => "",
            n => self.frames[tick % n],
        }
    }

    /// Widest frame, in terminal columns.
    pub fn width(&self) -> usize {
        self.frames
            .iter()
            .map(|f| crate::widget::display_width(f))
            .max()
            .unwrap_or(0)
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::dots()
    }
}
