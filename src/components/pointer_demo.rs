use web_sys::Element;
use yew::prelude::*;

use crate::sequencer::dom::{set_style, RafLoop};
use crate::sequencer::ease::Ease;
use crate::sequencer::region::Region;
use crate::sequencer::replay::{PointerPose, PoseDelta, ReplayPlayer, ReplayStep};

const WEEK: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// UI reactions scripted into the pointer replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SchedulerCue {
    PickDay(usize),
    Reset,
}

/// The recorded session: fade in, glide to Wednesday, click it, glide to
/// the deploy chip, click, fade out. Holds between moves sell the pause
/// a real operator leaves.
fn pointer_script() -> Vec<ReplayStep<SchedulerCue>> {
    vec![
        ReplayStep::new(300.0, Ease::OutQuad, PoseDelta::fade(1.0)),
        ReplayStep::new(1000.0, Ease::InOutCubic, PoseDelta::move_to(120.0, 80.0)),
        ReplayStep::new(100.0, Ease::OutQuad, PoseDelta::scale(0.8))
            .with_event(SchedulerCue::PickDay(3)),
        ReplayStep::new(100.0, Ease::OutQuad, PoseDelta::scale(1.0)),
        ReplayStep::new(1000.0, Ease::InOutCubic, PoseDelta::move_to(220.0, 180.0))
            .with_delay(500.0),
        ReplayStep::new(100.0, Ease::OutQuad, PoseDelta::scale(0.8)),
        ReplayStep::new(100.0, Ease::OutQuad, PoseDelta::scale(1.0)),
        ReplayStep::new(300.0, Ease::OutQuad, PoseDelta::fade(0.0))
            .with_delay(500.0)
            .with_event(SchedulerCue::Reset),
    ]
}

#[function_component(OptimizationScheduler)]
pub fn optimization_scheduler() -> Html {
    let active_day = use_state_eq(|| None::<usize>);
    let cursor_ref = use_node_ref();

    {
        let active_day = active_day.clone();
        let cursor_ref = cursor_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut region = Region::new("pointer-demo");
                {
                    // The replay owns the cursor's inline pose; clear it
                    // once the frame loop is stopped.
                    let cursor_ref = cursor_ref.clone();
                    region.defer(move || {
                        if let Some(cursor) = cursor_ref.cast::<Element>() {
                            let _ = cursor.remove_attribute("style");
                        }
                    });
                }
                let mut player =
                    ReplayPlayer::new(PointerPose::hidden_at_origin(), pointer_script(), 1000.0);
                let mut last_timestamp: Option<f64> = None;
                let mut cues = Vec::new();
                let frames = RafLoop::start(move |timestamp| {
                    let dt = last_timestamp.map_or(0.0, |previous| timestamp - previous);
                    last_timestamp = Some(timestamp);

                    cues.clear();
                    let pose = player.advance(dt, &mut cues);
                    if let Some(cursor) = cursor_ref.cast::<Element>() {
                        set_style(&cursor, &pose.css());
                    }
                    for cue in cues.drain(..) {
                        match cue {
                            SchedulerCue::PickDay(day) => active_day.set(Some(day)),
                            SchedulerCue::Reset => active_day.set(None),
                        }
                    }
                });
                region.defer(move || drop(frames));
                move || drop(region)
            },
            (),
        );
    }

    html! {
        <div class="demo-card">
            <div class="demo-card-head">
                <h3 class="demo-title">{"Continuous Optimization"}</h3>
                <p class="demo-sub">{"Improve your existing websites copy and newsletters."}</p>
            </div>
            <div class="scheduler-stage">
                <div class="day-grid">
                    { WEEK.iter().enumerate().map(|(i, day)| {
                        let picked = *active_day == Some(i);
                        html! {
                            <div key={i} class={classes!("day-cell", picked.then(|| "picked"))}>
                                {*day}
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
                <div class="chip-row">
                    <div class={classes!("deploy-chip", active_day.is_some().then(|| "armed"))}>
                        {"Deploy Update"}
                    </div>
                </div>
                <div ref={cursor_ref} class="demo-cursor">
                    <svg viewBox="0 0 24 24" width="24" height="24" fill="#1A1A1A"
                        stroke="#1A1A1A" stroke-width="1.5" stroke-linejoin="round">
                        <path d="m4 4 7.07 17 2.51-7.39L21 11.07z" />
                    </svg>
                </div>
            </div>
        </div>
    }
}
