use std::time::Duration;

/// Lifecycle of a tracked task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    NotStarted,
    Running,
    Paused,
    Finished,
}

/// A snapshot of one task's progress, handed to every cell of a row.
///
/// Nothing here is computed by this crate: the tracker that owns the task
/// fills in counts, speed and timing, and bumps `frame` to animate spinners.
///
/// ```rust,ignore
/// let state = ProgressState::new("serde.crate")
///     .total(320)
///     .completed(120)
///     .speed(48_000.0)
///     .status(Status::Running);
/// assert_eq!(state.ratio(), Some(0.375));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState<T> {
    pub context: T,
    /// Total units of work, or `None` when unknown.
    pub total: Option<u64>,
    pub completed: u64,
    /// Units per second, if the tracker measures it.
    pub speed: Option<f64>,
    pub elapsed: Duration,
    /// Animation frame counter.
    pub frame: usize,
    pub status: Status,
}

impl<T> ProgressState<T> {
    pub fn new(context: T) -> Self {
        Self {
            context,
            total: None,
            completed: 0,
            speed: None,
            elapsed: Duration::ZERO,
            frame: 0,
            status: Status::default(),
        }
    }

    pub fn total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn completed(mut self, completed: u64) -> Self {
        self.completed = completed;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Fraction done in `0.0..=1.0`, or `None` if the total is unknown.
    pub fn ratio(&self) -> Option<f64> {
        match self.total {
            None => None,
            Some(0) => Some(if self.is_finished() { 1.0 } else { 0.0 }),
            Some(total) => Some((self.completed as f64 / total as f64).clamp(0.0, 1.0)),
        }
    }

    /// Whole percent done, rounded down, or `None` if the total is unknown.
    pub fn percent(&self) -> Option<u32> {
        match self.total {
            None => None,
            Some(0) => Some(if self.is_finished() { 100 } else { 0 }),
            Some(total) => Some((self.completed.min(total) as u128 * 100 / total as u128) as u32),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == Status::Finished
    }

    pub fn is_indeterminate(&self) -> bool {
        self.total.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(ProgressState::new(()).total(10).completed(5).ratio(), Some(0.5));
        assert_eq!(ProgressState::new(()).total(10).completed(50).ratio(), Some(1.0));
        assert_eq!(ProgressState::new(()).completed(5).ratio(), None);
    }

    #[test]
    fn percent_rounds_down() {
        assert_eq!(ProgressState::new(()).total(3).completed(2).percent(), Some(66));
        assert_eq!(ProgressState::new(()).total(10).completed(11).percent(), Some(100));
        assert_eq!(ProgressState::new(()).percent(), None);
    }

    #[test]
    fn empty_total_is_done_only_when_finished() {
        let state = ProgressState::new(()).total(0);
        assert_eq!(state.ratio(), Some(0.0));
        assert_eq!(state.status(Status::Finished).ratio(), Some(1.0));
    }
}
