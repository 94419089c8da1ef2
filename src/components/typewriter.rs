use yew::prelude::*;

use crate::sequencer::dom::use_timer_effect;
use crate::sequencer::typewriter::Typewriter;

const FEED_SCRIPT: &str = "Analyzing existing copy... Identifying weak value propositions... Injecting high-converting frameworks... Optimizing for industry dominance... Ready.";

/// Terminal-styled panel typing out the optimization feed on a loop.
#[function_component(DominanceFeed)]
pub fn dominance_feed() -> Html {
    let feed = use_timer_effect("typewriter", || Typewriter::new(FEED_SCRIPT));

    html! {
        <div class="demo-card demo-card-dark">
            <div class="demo-card-head demo-head-row">
                <div>
                    <h3 class="demo-title on-dark">{"Industry Dominance"}</h3>
                    <p class="demo-sub on-dark">{"Improve existing website copy to be the best."}</p>
                </div>
                <div class="live-badge">
                    <div class="live-dot"></div>
                    {"Live Feed"}
                </div>
            </div>
            <div class="feed-terminal">
                { feed.visible().to_string() }
                <span class="feed-caret"></span>
            </div>
        </div>
    }
}
