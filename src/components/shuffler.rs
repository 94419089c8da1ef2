use yew::prelude::*;

use crate::sequencer::dom::use_timer_effect;
use crate::sequencer::shuffle::{layer_for_position, CardStack};

const CARDS: [(&str, &str); 3] = [
    (
        "Buyer Psychology",
        "Mapping the exact triggers that make your audience choose you.",
    ),
    (
        "Desire Engineering",
        "Structuring arguments that build undeniable want.",
    ),
    (
        "Friction Removal",
        "Eliminating objections before they even arise.",
    ),
];

/// Stacked diagnosis cards that rotate every few seconds, rear card
/// springing to the front.
#[function_component(ResonanceShuffler)]
pub fn resonance_shuffler() -> Html {
    let stack = use_timer_effect("shuffler", || CardStack::new(CARDS.len()));

    html! {
        <div class="demo-card">
            <div class="demo-card-head">
                <h3 class="demo-title">{"Buyer Resonance"}</h3>
                <p class="demo-sub">{"Write copy that makes buyers want to choose you."}</p>
            </div>
            <div class="shuffle-stage">
                { CARDS.iter().enumerate().map(|(card, (title, desc))| {
                    // DOM order stays fixed; only the layer styles move,
                    // so the CSS transition carries each reorder.
                    let position = stack.position_of(card).unwrap_or(card);
                    let layer = layer_for_position(position);
                    html! {
                        <div key={card} class="shuffle-card" style={layer.css()}>
                            <div class="shuffle-card-index">{format!("0{}", card + 1)}</div>
                            <h4 class="shuffle-card-title">{*title}</h4>
                            <p class="shuffle-card-desc">{*desc}</p>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}
