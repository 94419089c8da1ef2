//! Character-by-character text reveal with a dwell-and-reset cycle.
//!
//! The state machine reveals one character per tick, holds the complete
//! text for a fixed dwell, then resets to empty in a single step. The
//! visible prefix is always sliced on a character boundary, so multi-byte
//! text never produces a torn slice.

use crate::sequencer::effect::TimerEffect;

/// Milliseconds between reveal ticks.
pub const TYPE_TICK_MS: u32 = 50;
/// How long the finished text is held before the cycle restarts.
pub const DWELL_MS: u32 = 2000;

const DWELL_TICKS: u32 = DWELL_MS / TYPE_TICK_MS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    source: String,
    len_chars: usize,
    shown: usize,
    dwell_left: u32,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let len_chars = source.chars().count();
        Self {
            source,
            len_chars,
            shown: 0,
            dwell_left: 0,
        }
    }

    /// The currently revealed prefix.
    pub fn visible(&self) -> &str {
        match self.source.char_indices().nth(self.shown) {
            Some((idx, _)) => &self.source[..idx],
            None => &self.source,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.len_chars
    }

    fn step(&mut self) {
        if self.shown < self.len_chars {
            self.shown += 1;
            if self.shown == self.len_chars {
                self.dwell_left = DWELL_TICKS;
            }
        } else if self.dwell_left > 0 {
            self.dwell_left -= 1;
            if self.dwell_left == 0 {
                // Reset is a single transition back to empty; no frame
                // ever observes a partially cleared tail.
                self.shown = 0;
            }
        } else {
            // Zero-length source: stays complete and empty.
            debug_assert_eq!(self.len_chars, 0);
        }
    }
}

impl TimerEffect for Typewriter {
    fn interval_ms(&self) -> u32 {
        TYPE_TICK_MS
    }

    fn tick(&mut self) {
        self.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.visible(), "");
        tw.tick();
        assert_eq!(tw.visible(), "a");
        tw.tick();
        assert_eq!(tw.visible(), "ab");
        tw.tick();
        assert_eq!(tw.visible(), "abc");
        assert!(tw.is_complete());
    }

    #[test]
    fn dwells_then_resets_to_empty_in_one_step() {
        let mut tw = Typewriter::new("hi");
        tw.tick();
        tw.tick();
        assert!(tw.is_complete());

        // Held in full for the whole dwell window.
        for _ in 0..DWELL_TICKS - 1 {
            tw.tick();
            assert_eq!(tw.visible(), "hi");
        }

        // The tick that ends the dwell lands directly on empty.
        tw.tick();
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_complete());

        // And the next cycle starts over from the first character.
        tw.tick();
        assert_eq!(tw.visible(), "h");
    }

    #[test]
    fn slices_multibyte_text_on_character_boundaries() {
        let mut tw = Typewriter::new("véé");
        tw.tick();
        assert_eq!(tw.visible(), "v");
        tw.tick();
        assert_eq!(tw.visible(), "vé");
        tw.tick();
        assert_eq!(tw.visible(), "véé");
        assert!(tw.is_complete());
    }

    #[test]
    fn empty_source_never_panics() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_complete());
        for _ in 0..5 {
            tw.tick();
            assert_eq!(tw.visible(), "");
        }
    }

    #[test]
    fn cycle_length_matches_tick_and_dwell_constants() {
        let mut tw = Typewriter::new("abcd");
        let mut ticks = 0;
        loop {
            tw.tick();
            ticks += 1;
            if tw.visible().is_empty() && ticks > 1 {
                break;
            }
        }
        // Four reveal ticks plus the dwell countdown.
        assert_eq!(ticks, 4 + DWELL_TICKS);
    }
}
