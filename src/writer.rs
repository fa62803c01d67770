use std::io::Write;

use tracing::trace;

use crate::progress::{
    BaseProgressBarWidgetMaker, ProgressBarDefinition, ProgressBarWidgetMaker, ProgressState,
};
use crate::widget::Widget;

/// Write target with ANSI cursor control for frame clearing.
///
/// Counts the lines written so the next frame can erase them.
pub struct FrameWriter<'a> {
    target: &'a mut dyn Write,
    frame_lines: usize,
}

impl<'a> FrameWriter<'a> {
    pub(crate) fn new(target: &'a mut dyn Write, frame_lines: usize) -> Self {
        Self {
            target,
            frame_lines,
        }
    }

    /// Moves the cursor to the top of the last frame and erases everything below.
    pub(crate) fn clear_frame(&mut self) -> Result<(), std::io::Error> {
        let lines_drawn = self.frame_lines;
        if lines_drawn > 0 {
            write!(self.target, "\r\x1b[{}A\x1b[2K\x1b[J", lines_drawn)?;
            self.target.flush()?;
        }
        self.frame_lines = 0;
        Ok(())
    }

    pub(crate) fn frame_lines(&self) -> usize {
        self.frame_lines
    }
}

impl<'a> Write for FrameWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.target.write(buf)?;
        self.frame_lines += buf[..written].iter().filter(|&&b| b == b'\n').count();
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.target.flush()
    }
}

/// Redraws progress in place, one frame per call to [`render`].
///
/// ```rust,ignore
/// let mut renderer = ProgressRenderer::new().width(80);
/// loop {
///     let states = tracker.snapshot();
///     renderer.render(&mut std::io::stderr(), &definition, &states)?;
///     if states.iter().all(ProgressState::is_finished) {
///         break;
///     }
///     std::thread::sleep(Duration::from_millis(80));
/// }
/// renderer.finish();
/// ```
///
/// [`render`]: ProgressRenderer::render
#[derive(Debug, Clone)]
pub struct ProgressRenderer<M = BaseProgressBarWidgetMaker> {
    maker: M,
    width: usize,
    frame_lines: usize,
}

impl Default for ProgressRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressRenderer {
    pub fn new() -> Self {
        Self::with_maker(BaseProgressBarWidgetMaker)
    }
}

impl<M: ProgressBarWidgetMaker> ProgressRenderer<M> {
    pub fn with_maker(maker: M) -> Self {
        Self {
            maker,
            width: 80,
            frame_lines: 0,
        }
    }

    /// Terminal columns to lay the frame out in.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the previous frame with the current states.
    pub fn render<T>(
        &mut self, target: &mut dyn Write, definition: &ProgressBarDefinition<T>,
        states: &[ProgressState<T>],
    ) -> Result<(), std::io::Error> {
        let lines = self.maker.build(definition, states).render(self.width);

        let mut frame = FrameWriter::new(target, self.frame_lines);
        frame.clear_frame()?;
        for line in lines.iter() {
            writeln!(frame, "{line}")?;
        }

        trace!(cleared = self.frame_lines, drawn = frame.frame_lines(), "redrew progress frame");
        self.frame_lines = frame.frame_lines();
        frame.flush()
    }

    /// Leaves the last frame on screen; the next render starts below it.
    pub fn finish(&mut self) {
        self.frame_lines = 0;
    }

    /// Lines drawn by the last frame.
    pub fn frame_lines(&self) -> usize {
        self.frame_lines
    }
}
