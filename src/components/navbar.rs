use web_sys::MouseEvent;
use yew::prelude::*;

use crate::sequencer::dom::{bind_scroll_frames, scroll_offset, smooth_scroll_to};
use crate::sequencer::region::Region;

/// Scroll depth past which the floating pill picks up a solid backdrop.
const SCROLLED_AT_PX: f64 = 50.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let mut region = Region::new("navbar");
                bind_scroll_frames(&mut region, move || {
                    is_scrolled.set(scroll_offset() > SCROLLED_AT_PX);
                });
                move || drop(region)
            },
            (),
        );
    }

    let on_start = Callback::from(|_: MouseEvent| smooth_scroll_to("cta"));

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "nav-scrolled"))}>
            <div class="nav-brand">{"Copy Capture"}</div>
            <div class="nav-links">
                <a href="#features" class="hover-lift">{"Features"}</a>
                <a href="#philosophy" class="hover-lift">{"Philosophy"}</a>
                <a href="#protocol" class="hover-lift">{"Protocol"}</a>
            </div>
            <button class="magnetic-btn nav-cta" onclick={on_start}>
                <span class="btn-bg"></span>
                <span class="btn-content">{"Start Now"}</span>
            </button>
        </nav>
    }
}
