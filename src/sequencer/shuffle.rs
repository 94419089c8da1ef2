//! Card shuffle state for the buyer-resonance demo.
//!
//! The stack holds its cards as a permutation of indices into a fixed
//! card list; the front card sits at position 0. Every advance moves the
//! rearmost card to the front in one step, so the visible churn is a
//! rotation with period `len` and no card is ever dropped or duplicated.

use crate::sequencer::effect::TimerEffect;

/// Milliseconds between shuffle steps.
pub const SHUFFLE_INTERVAL_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStack {
    order: Vec<usize>,
}

impl CardStack {
    pub fn new(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    /// Card indices front to back.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Current stack position of card `card`, 0 = front.
    pub fn position_of(&self, card: usize) -> Option<usize> {
        self.order.iter().position(|&c| c == card)
    }

    /// One shuffle step: the last card becomes the front card, everything
    /// else shifts back by one. A stack with no cards has nothing to
    /// rotate and stays empty.
    pub fn advance(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.order.rotate_right(1);
    }
}

impl TimerEffect for CardStack {
    fn interval_ms(&self) -> u32 {
        SHUFFLE_INTERVAL_MS
    }

    fn tick(&mut self) {
        self.advance();
    }
}

/// Visual treatment of a card at a given stack position. Deeper cards
/// peek out above the front card, slightly smaller and dimmer, and stack
/// under it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackLayer {
    pub top_px: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z: i32,
}

pub fn layer_for_position(position: usize) -> StackLayer {
    let depth = position as f64;
    StackLayer {
        top_px: depth * 20.0,
        scale: 1.0 - depth * 0.05,
        opacity: 1.0 - depth * 0.2,
        z: 10 - position as i32,
    }
}

impl StackLayer {
    pub fn css(&self) -> String {
        format!(
            "top: {}px; transform: scale({}); opacity: {}; z-index: {};",
            self.top_px, self.scale, self.opacity, self.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_last_card_to_front() {
        let mut stack = CardStack::new(3);
        assert_eq!(stack.order(), &[0, 1, 2]);
        stack.advance();
        assert_eq!(stack.order(), &[2, 0, 1]);
        stack.advance();
        assert_eq!(stack.order(), &[1, 2, 0]);
    }

    #[test]
    fn shuffle_has_period_len() {
        let mut stack = CardStack::new(3);
        let initial = stack.clone();
        for _ in 0..3 {
            stack.advance();
        }
        assert_eq!(stack, initial);
    }

    #[test]
    fn every_card_stays_present() {
        let mut stack = CardStack::new(4);
        for _ in 0..7 {
            stack.advance();
            let mut seen = stack.order().to_vec();
            seen.sort_unstable();
            assert_eq!(seen, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn front_card_takes_full_prominence() {
        let front = layer_for_position(0);
        assert_eq!(front.top_px, 0.0);
        assert_eq!(front.scale, 1.0);
        assert_eq!(front.opacity, 1.0);
        assert_eq!(front.z, 10);
    }

    #[test]
    fn prominence_decays_with_depth() {
        let mid = layer_for_position(1);
        let back = layer_for_position(2);
        assert_eq!(mid.top_px, 20.0);
        assert_eq!(back.top_px, 40.0);
        assert!(mid.scale > back.scale);
        assert!(mid.opacity > back.opacity);
        assert!(mid.z > back.z);
    }

    #[test]
    fn empty_stack_ticks_are_inert() {
        let mut stack = CardStack::new(0);
        for _ in 0..3 {
            stack.tick();
            assert!(stack.order().is_empty());
        }
    }

    #[test]
    fn ticks_at_the_shuffle_interval() {
        let mut stack = CardStack::new(3);
        assert_eq!(stack.interval_ms(), SHUFFLE_INTERVAL_MS);
        stack.tick();
        assert_eq!(stack.position_of(2), Some(0));
    }
}
