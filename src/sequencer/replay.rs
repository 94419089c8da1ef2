//! A small timeline player for scripted pointer motion.
//!
//! A replay is a sequence of steps, each tweening a subset of pose
//! fields toward absolute targets over a duration, optionally after a
//! hold, optionally firing an event when it completes. The player is
//! fed wall-clock deltas, so an oversized frame (a background tab, a
//! dropped frame) is consumed across as many steps as it covers and
//! every completion event along the way still fires exactly once, in
//! order. The sequence loops forever with a fixed delay between
//! iterations.

use crate::sequencer::ease::{lerp, Ease};

/// Pose of the replayed pointer in its demo panel, in panel-local px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl PointerPose {
    /// Parked pose between loops: at the panel origin, invisible.
    pub fn hidden_at_origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            opacity: 0.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: translate({}px, {}px) scale({}); opacity: {};",
            self.x, self.y, self.scale, self.opacity
        )
    }
}

/// Targets for the fields a step animates; `None` fields keep their
/// current value through the step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseDelta {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub opacity: Option<f64>,
}

impl PoseDelta {
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    pub fn fade(opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            ..Self::default()
        }
    }

    fn applied_to(&self, from: &PointerPose) -> PointerPose {
        PointerPose {
            x: self.x.unwrap_or(from.x),
            y: self.y.unwrap_or(from.y),
            scale: self.scale.unwrap_or(from.scale),
            opacity: self.opacity.unwrap_or(from.opacity),
        }
    }

    fn sample(&self, from: &PointerPose, eased: f64) -> PointerPose {
        PointerPose {
            x: self.x.map_or(from.x, |to| lerp(from.x, to, eased)),
            y: self.y.map_or(from.y, |to| lerp(from.y, to, eased)),
            scale: self.scale.map_or(from.scale, |to| lerp(from.scale, to, eased)),
            opacity: self.opacity.map_or(from.opacity, |to| lerp(from.opacity, to, eased)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReplayStep<E> {
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
    pub to: PoseDelta,
    pub on_complete: Option<E>,
}

impl<E> ReplayStep<E> {
    pub fn new(duration_ms: f64, ease: Ease, to: PoseDelta) -> Self {
        Self {
            delay_ms: 0.0,
            duration_ms,
            ease,
            to,
            on_complete: None,
        }
    }

    /// Hold the current pose this long before the tween starts.
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_event(mut self, event: E) -> Self {
        self.on_complete = Some(event);
        self
    }

    fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

#[derive(Clone, Debug)]
pub struct ReplayPlayer<E> {
    steps: Vec<ReplayStep<E>>,
    loop_delay_ms: f64,
    initial: PointerPose,
    pose: PointerPose,
    step_start_pose: PointerPose,
    /// `steps.len()` means the between-loop hold.
    index: usize,
    elapsed_in_step: f64,
}

impl<E> ReplayPlayer<E> {
    pub fn new(initial: PointerPose, steps: Vec<ReplayStep<E>>, loop_delay_ms: f64) -> Self {
        Self {
            steps,
            loop_delay_ms,
            initial,
            pose: initial,
            step_start_pose: initial,
            index: 0,
            elapsed_in_step: 0.0,
        }
    }

    pub fn pose(&self) -> PointerPose {
        self.pose
    }

    /// One scripted pass, excluding the between-loop hold.
    pub fn cycle_ms(&self) -> f64 {
        self.steps.iter().map(ReplayStep::total_ms).sum()
    }

    /// Consume `dt_ms` of wall time. Completion events for every step
    /// crossed are pushed onto `events` in script order; each loop
    /// iteration fires each step's event once. A script whose steps and
    /// loop delay are all zero-length is treated as inert.
    pub fn advance(&mut self, dt_ms: f64, events: &mut Vec<E>) -> PointerPose
    where
        E: Clone,
    {
        let mut remaining = dt_ms.max(0.0);
        // A cycle that consumes no time can make no progress; bail
        // instead of spinning through it forever.
        if self.steps.is_empty() || self.cycle_ms() + self.loop_delay_ms <= 0.0 {
            return self.pose;
        }
        loop {
            if self.index == self.steps.len() {
                let left = self.loop_delay_ms - self.elapsed_in_step;
                if remaining < left {
                    self.elapsed_in_step += remaining;
                    break;
                }
                remaining -= left;
                self.index = 0;
                self.elapsed_in_step = 0.0;
                self.pose = self.initial;
                self.step_start_pose = self.initial;
                continue;
            }
            let step = &self.steps[self.index];
            let left = step.total_ms() - self.elapsed_in_step;
            if remaining < left {
                self.elapsed_in_step += remaining;
                self.pose = self.sample_current();
                break;
            }
            remaining -= left;
            self.pose = step.to.applied_to(&self.step_start_pose);
            if let Some(event) = step.on_complete.clone() {
                events.push(event);
            }
            self.index += 1;
            self.elapsed_in_step = 0.0;
            self.step_start_pose = self.pose;
        }
        self.pose
    }

    fn sample_current(&self) -> PointerPose {
        let step = &self.steps[self.index];
        let in_tween = self.elapsed_in_step - step.delay_ms;
        if in_tween <= 0.0 {
            return self.step_start_pose;
        }
        if step.duration_ms <= 0.0 {
            return step.to.applied_to(&self.step_start_pose);
        }
        let t = in_tween / step.duration_ms;
        step.to.sample(&self.step_start_pose, step.ease.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Mark {
        Picked,
        Cleared,
    }

    fn demo_player() -> ReplayPlayer<Mark> {
        ReplayPlayer::new(
            PointerPose::hidden_at_origin(),
            vec![
                ReplayStep::new(300.0, Ease::OutQuad, PoseDelta::fade(1.0)),
                ReplayStep::new(1000.0, Ease::InOutCubic, PoseDelta::move_to(120.0, 80.0)),
                ReplayStep::new(100.0, Ease::OutQuad, PoseDelta::scale(0.8)).with_event(Mark::Picked),
                ReplayStep::new(100.0, Ease::OutQuad, PoseDelta::scale(1.0)),
                ReplayStep::new(300.0, Ease::OutQuad, PoseDelta::fade(0.0))
                    .with_delay(500.0)
                    .with_event(Mark::Cleared),
            ],
            1000.0,
        )
    }

    #[test]
    fn untouched_fields_hold_their_value() {
        let mut player = demo_player();
        let mut events = Vec::new();
        let pose = player.advance(300.0, &mut events);
        assert_eq!(pose.opacity, 1.0);
        assert_eq!((pose.x, pose.y, pose.scale), (0.0, 0.0, 1.0));

        let pose = player.advance(1000.0, &mut events);
        assert_eq!((pose.x, pose.y), (120.0, 80.0));
        assert_eq!(pose.opacity, 1.0);
    }

    #[test]
    fn step_delay_holds_the_pose() {
        let mut player = demo_player();
        let mut events = Vec::new();
        // Through the scale bounce, into the delayed fade.
        player.advance(1500.0, &mut events);
        let held = player.advance(250.0, &mut events);
        assert_eq!(held.opacity, 1.0);
        // Past the hold, the fade is under way.
        let fading = player.advance(400.0, &mut events);
        assert!(fading.opacity < 1.0 && fading.opacity > 0.0);
    }

    #[test]
    fn events_fire_once_in_order_even_across_an_oversized_frame() {
        let mut player = demo_player();
        let mut events = Vec::new();
        // One frame that swallows the whole scripted pass.
        player.advance(player.cycle_ms(), &mut events);
        assert_eq!(events, vec![Mark::Picked, Mark::Cleared]);

        // Sitting in the loop delay afterwards fires nothing more.
        events.clear();
        player.advance(500.0, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn a_frame_spanning_two_loops_fires_each_event_per_iteration() {
        let mut player = demo_player();
        let mut events = Vec::new();
        let full_loop = player.cycle_ms() + 1000.0;
        player.advance(full_loop * 2.0, &mut events);
        assert_eq!(
            events,
            vec![Mark::Picked, Mark::Cleared, Mark::Picked, Mark::Cleared]
        );
    }

    #[test]
    fn loop_restarts_from_the_initial_pose() {
        let mut player = demo_player();
        let mut events = Vec::new();
        let pose = player.advance(player.cycle_ms() + 1000.0, &mut events);
        assert_eq!(pose, PointerPose::hidden_at_origin());

        // The next iteration plays the script again from the top.
        events.clear();
        let pose = player.advance(300.0, &mut events);
        assert_eq!(pose.opacity, 1.0);
        assert_eq!((pose.x, pose.y), (0.0, 0.0));
    }

    #[test]
    fn many_small_frames_match_one_large_frame() {
        let mut split = demo_player();
        let mut whole = demo_player();
        let mut events = Vec::new();
        for _ in 0..10 {
            split.advance(170.0, &mut events);
        }
        let expected = whole.advance(1700.0, &mut events);
        assert_eq!(split.pose(), expected);
    }

    #[test]
    fn boundary_exact_frame_completes_the_step_once() {
        let mut player = demo_player();
        let mut events = Vec::new();
        player.advance(1400.0, &mut events);
        assert_eq!(events, vec![Mark::Picked]);
        events.clear();
        player.advance(0.0, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn zero_length_script_never_hangs_or_fires() {
        let mut player = ReplayPlayer::new(
            PointerPose::hidden_at_origin(),
            vec![
                ReplayStep::new(0.0, Ease::Linear, PoseDelta::fade(1.0)).with_event(Mark::Picked),
                ReplayStep::new(0.0, Ease::Linear, PoseDelta::scale(0.8)),
            ],
            0.0,
        );
        let mut events = Vec::new();
        let pose = player.advance(250.0, &mut events);
        assert_eq!(pose, PointerPose::hidden_at_origin());
        assert!(events.is_empty());
    }

    #[test]
    fn zero_and_negative_deltas_are_inert() {
        let mut player = demo_player();
        let mut events = Vec::new();
        let before = player.advance(450.0, &mut events);
        assert_eq!(player.advance(0.0, &mut events), before);
        assert_eq!(player.advance(-16.0, &mut events), before);
    }
}
