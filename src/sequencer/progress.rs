//! Scroll progress math, kept free of any DOM types so the scrub and
//! pin behavior is testable without a live viewport.
//!
//! A binding reads the current scroll offset, turns it into a progress
//! value with [`TriggerRange::progress`], and applies a visual mapping as
//! a separate step. Progress is derived fresh from the offset on every
//! read; nothing here accumulates.

use crate::sequencer::ease::{lerp, Ease};

/// A scroll window in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRange {
    pub start: f64,
    pub end: f64,
}

impl TriggerRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Normalized position of `scroll_pos` inside the range, clamped to
    /// `[0, 1]`. A degenerate range (`end <= start`) acts as a step at
    /// `start`.
    pub fn progress(&self, scroll_pos: f64) -> f64 {
        if self.end <= self.start {
            return if scroll_pos < self.start { 0.0 } else { 1.0 };
        }
        ((scroll_pos - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// Visual properties a scrub binding writes to its target element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubStyle {
    pub opacity: f64,
    pub scale: f64,
    pub blur_px: f64,
}

impl ScrubStyle {
    /// The at-rest style: fully visible, unscaled, sharp.
    pub fn identity() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            blur_px: 0.0,
        }
    }

    /// Inline style text for the target element. The element's layout
    /// (sticky pinning) stays in its CSS class; this only carries the
    /// scrubbed properties.
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: scale({}); filter: blur({}px);",
            self.opacity, self.scale, self.blur_px
        )
    }
}

/// The card-handoff scrub: as the next card approaches, the current one
/// recedes to 90% scale, half opacity and a 10px blur, linearly in
/// progress.
pub fn handoff_scrub(progress: f64) -> ScrubStyle {
    let p = Ease::Linear.apply(progress);
    ScrubStyle {
        opacity: lerp(1.0, 0.5, p),
        scale: lerp(1.0, 0.9, p),
        blur_px: lerp(0.0, 10.0, p),
    }
}

/// One-shot threshold reveal: true once the element's viewport-relative
/// top has risen past the given fraction of the viewport height.
pub fn reveal_passed(top_in_viewport: f64, viewport: f64, fraction: f64) -> bool {
    top_in_viewport <= viewport * fraction
}

/// An ordered stack of full-viewport pinned sections.
///
/// Section `i` pins (CSS sticky) while scroll moves through
/// `[top_i, top_i + viewport)` and hands off to section `i + 1` over that
/// same window: the successor's top travels from viewport bottom to
/// viewport top. The last section has no successor and is exempt from the
/// handoff scrub — it never dims.
#[derive(Clone, Debug)]
pub struct PinnedStack {
    tops: Vec<f64>,
    viewport: f64,
}

impl PinnedStack {
    pub fn new(tops: Vec<f64>, viewport: f64) -> Self {
        Self { tops, viewport }
    }

    /// Stack of `count` sections, each one viewport tall, starting at
    /// `section_top` — the protocol section's shape.
    pub fn evenly(section_top: f64, viewport: f64, count: usize) -> Self {
        let tops = (0..count)
            .map(|i| section_top + i as f64 * viewport)
            .collect();
        Self::new(tops, viewport)
    }

    pub fn len(&self) -> usize {
        self.tops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }

    /// The scroll window over which section `i` hands off to its
    /// successor. `None` for the last section.
    pub fn handoff(&self, i: usize) -> Option<TriggerRange> {
        let next_top = *self.tops.get(i + 1)?;
        Some(TriggerRange::new(next_top - self.viewport, next_top))
    }

    /// Scrubbed style for section `i` at the given scroll offset. Pure in
    /// `scroll_pos`: recomputation at the same offset yields the same
    /// style.
    pub fn style_at(&self, i: usize, scroll_pos: f64) -> ScrubStyle {
        match self.handoff(i) {
            Some(range) => handoff_scrub(range.progress(scroll_pos)),
            None => ScrubStyle::identity(),
        }
    }

    /// Index of the section currently held pinned, if any. At most one
    /// section is actively pinned per offset; neighbours may still be
    /// mid-crossfade.
    pub fn active_pinned(&self, scroll_pos: f64) -> Option<usize> {
        let first = *self.tops.first()?;
        let last = *self.tops.last()?;
        if scroll_pos < first || scroll_pos >= last + self.viewport {
            return None;
        }
        let i = self
            .tops
            .iter()
            .rposition(|&top| top <= scroll_pos)
            .unwrap_or(0);
        Some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_outside_the_range() {
        let range = TriggerRange::new(100.0, 200.0);
        assert_eq!(range.progress(-50.0), 0.0);
        assert_eq!(range.progress(100.0), 0.0);
        assert_eq!(range.progress(150.0), 0.5);
        assert_eq!(range.progress(200.0), 1.0);
        assert_eq!(range.progress(900.0), 1.0);
    }

    #[test]
    fn progress_is_idempotent_in_the_offset() {
        let range = TriggerRange::new(0.0, 730.0);
        for offset in [-10.0, 0.0, 123.4, 729.9, 730.0, 5000.0] {
            assert_eq!(range.progress(offset), range.progress(offset));
        }
    }

    #[test]
    fn degenerate_range_steps_at_start() {
        let range = TriggerRange::new(300.0, 300.0);
        assert_eq!(range.progress(299.9), 0.0);
        assert_eq!(range.progress(300.0), 1.0);

        let inverted = TriggerRange::new(300.0, 100.0);
        assert_eq!(inverted.progress(200.0), 0.0);
        assert_eq!(inverted.progress(300.0), 1.0);
    }

    #[test]
    fn handoff_scrub_interpolates_linearly() {
        let rest = handoff_scrub(0.0);
        assert_eq!(rest, ScrubStyle::identity());

        let mid = handoff_scrub(0.5);
        assert!((mid.opacity - 0.75).abs() < 1e-9);
        assert!((mid.scale - 0.95).abs() < 1e-9);
        assert!((mid.blur_px - 5.0).abs() < 1e-9);

        let done = handoff_scrub(1.0);
        assert_eq!(done.opacity, 0.5);
        assert_eq!(done.scale, 0.9);
        assert_eq!(done.blur_px, 10.0);

        // The mapping clamps its own input.
        assert_eq!(handoff_scrub(4.0), done);
        assert_eq!(handoff_scrub(-1.0), rest);
    }

    #[test]
    fn scrub_css_is_stable_for_equal_progress() {
        assert_eq!(handoff_scrub(0.37).css(), handoff_scrub(0.37).css());
    }

    #[test]
    fn last_section_never_dims() {
        let stack = PinnedStack::evenly(1000.0, 800.0, 3);
        for offset in [0.0, 1000.0, 1800.0, 2600.0, 3400.0, 10_000.0] {
            assert_eq!(stack.style_at(2, offset), ScrubStyle::identity());
        }
        // While the earlier sections do.
        assert!(stack.style_at(0, 1800.0).opacity < 1.0);
        assert!(stack.style_at(1, 2600.0).opacity < 1.0);
    }

    #[test]
    fn handoff_windows_cover_each_pin_exactly() {
        let stack = PinnedStack::evenly(1000.0, 800.0, 3);
        // Section 0 pins at 1000 and fades while section 1 approaches,
        // finishing exactly when section 1 pins.
        assert_eq!(stack.handoff(0), Some(TriggerRange::new(1000.0, 1800.0)));
        assert_eq!(stack.handoff(1), Some(TriggerRange::new(1800.0, 2600.0)));
        assert_eq!(stack.handoff(2), None);
    }

    #[test]
    fn at_most_one_section_is_actively_pinned() {
        let stack = PinnedStack::evenly(1000.0, 800.0, 3);
        assert_eq!(stack.active_pinned(0.0), None);
        assert_eq!(stack.active_pinned(999.9), None);
        assert_eq!(stack.active_pinned(1000.0), Some(0));
        assert_eq!(stack.active_pinned(1799.9), Some(0));
        assert_eq!(stack.active_pinned(1800.0), Some(1));
        assert_eq!(stack.active_pinned(2600.0), Some(2));
        assert_eq!(stack.active_pinned(3399.9), Some(2));
        assert_eq!(stack.active_pinned(3400.0), None);
    }

    #[test]
    fn reveal_threshold_matches_viewport_fraction() {
        // Section top at 70% of an 1000px viewport: revealed.
        assert!(reveal_passed(700.0, 1000.0, 0.7));
        assert!(reveal_passed(0.0, 1000.0, 0.7));
        assert!(!reveal_passed(701.0, 1000.0, 0.7));
    }

    #[test]
    fn empty_stack_has_no_pin() {
        let stack = PinnedStack::new(Vec::new(), 800.0);
        assert!(stack.is_empty());
        assert_eq!(stack.active_pinned(123.0), None);
    }
}
