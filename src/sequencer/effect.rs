//! Contract for interval-driven animation units.

/// A self-contained state machine stepped on a fixed interval.
///
/// Implementations carry all of their state and mutate it in [`tick`];
/// the caller owns the interval that drives them and cancels it when the
/// owning region tears down. Ticks arriving after cancellation are a
/// lifecycle bug, so implementations never need to guard against them.
///
/// [`tick`]: TimerEffect::tick
pub trait TimerEffect {
    /// Milliseconds between ticks.
    fn interval_ms(&self) -> u32;

    /// Advance to the next state.
    fn tick(&mut self);
}
