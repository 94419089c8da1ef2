use std::cell::Cell;
use std::rc::Rc;

use chrono::Datelike;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::pointer_demo::OptimizationScheduler;
use crate::components::shuffler::ResonanceShuffler;
use crate::components::typewriter::DominanceFeed;
use crate::config;
use crate::lead_form::{FormAck, LeadFields, SubmitOutcome, SubmitState};
use crate::sequencer::dom::{
    bind_scroll_frames, document_top, ensure_class, scroll_offset, set_style, smooth_scroll_to,
    viewport_height,
};
use crate::sequencer::progress::{reveal_passed, PinnedStack};
use crate::sequencer::region::Region;

const PROTOCOL_PHASES: [(&str, &str); 3] = [
    (
        "Discovery & Extraction",
        "We mine your business for the raw materials of persuasion. Understanding your product, \
         your market, and the exact psychological triggers of your buyers.",
    ),
    (
        "Architecture",
        "Structuring the argument. We build wireframes of logic and emotion, ensuring every \
         sentence pulls the reader deeper into the funnel.",
    ),
    (
        "Conversion",
        "The final polish. Injecting power words, removing friction, and optimizing the \
         call-to-action to maximize your conversion rate.",
    ),
];

/// POST the lead to the relay. Only a 2xx advances the visitor-facing
/// state; failures are logged to the console and otherwise swallowed.
async fn deliver_lead(fields: &LeadFields) -> SubmitOutcome {
    let response = Request::post(config::get_form_endpoint())
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(fields.form_body())
        .send()
        .await;
    match response {
        Ok(response) => {
            if response.ok() {
                match response.json::<FormAck>().await {
                    Ok(ack) => log::info!("lead relay ack: {}", ack.message),
                    Err(_) => log::info!("lead relay accepted"),
                }
                SubmitOutcome::Accepted
            } else {
                gloo_console::error!(format!(
                    "lead delivery rejected: {} {}",
                    response.status(),
                    response.status_text()
                ));
                SubmitOutcome::Rejected(response.status())
            }
        }
        Err(error) => {
            gloo_console::error!(format!("lead delivery failed: {}", error));
            SubmitOutcome::ConnectionFailed
        }
    }
}

#[function_component(NoiseOverlay)]
fn noise_overlay() -> Html {
    html! {
        <svg class="noise-overlay" xmlns="http://www.w3.org/2000/svg">
            <filter id="noiseFilter">
                <feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="3" stitchTiles="stitch" />
            </filter>
            <rect width="100%" height="100%" filter="url(#noiseFilter)" />
        </svg>
    }
}

fn arrow_icon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </svg>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let on_cta = Callback::from(|_: MouseEvent| smooth_scroll_to("cta"));

    html! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src="https://images.unsplash.com/photo-1518531933037-91b2f5f229cc?q=80&w=2574&auto=format&fit=crop"
                    alt="Dark forest moss" fetchpriority="high" decoding="sync" />
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">
                    <span class="hero-text hero-title-top" style="animation-delay: 200ms">
                        {"Persuasion is the"}
                    </span>
                    <span class="hero-text hero-drama" style="animation-delay: 280ms">
                        {"Advantage."}
                    </span>
                </h1>
                <p class="hero-text hero-lede" style="animation-delay: 360ms">
                    {"Writing copy that makes people want to buy from you. Precision language engineered for conversion."}
                </p>
                <div class="hero-text hero-actions" style="animation-delay: 440ms">
                    <button class="magnetic-btn hero-cta" onclick={on_cta}>
                        <span class="btn-bg"></span>
                        <span class="btn-content">{"Enter Email Below"}{arrow_icon()}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    use_effect_with_deps(
        move |_| {
            let mut region = Region::new("features");
            let document = window().unwrap().document().unwrap();
            let fired = Cell::new(false);
            bind_scroll_frames(&mut region, move || {
                // One-shot: once revealed the cards stay put.
                if fired.get() {
                    return;
                }
                if let Some(section) = document.query_selector("#features").ok().flatten() {
                    let top = section.get_bounding_client_rect().top();
                    if reveal_passed(top, viewport_height(), 0.7) {
                        ensure_class(&section, "revealed", true);
                        fired.set(true);
                    }
                }
            });
            move || drop(region)
        },
        (),
    );

    html! {
        <section id="features" class="features-section">
            <div class="features-inner">
                <div class="features-head">
                    <h2 class="section-title">{"Functional Artifacts"}</h2>
                    <p class="section-lede">
                        {"We don't just write words. We engineer persuasion systems designed to capture attention and convert it into revenue."}
                    </p>
                </div>
                <div class="feature-grid">
                    <div class="feature-card"><ResonanceShuffler /></div>
                    <div class="feature-card"><DominanceFeed /></div>
                    <div class="feature-card"><OptimizationScheduler /></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(PhilosophySection)]
fn philosophy_section() -> Html {
    use_effect_with_deps(
        move |_| {
            let mut region = Region::new("philosophy");
            let document = window().unwrap().document().unwrap();
            let fired = Cell::new(false);
            bind_scroll_frames(&mut region, move || {
                if fired.get() {
                    return;
                }
                if let Some(section) = document.query_selector("#philosophy").ok().flatten() {
                    let top = section.get_bounding_client_rect().top();
                    if reveal_passed(top, viewport_height(), 0.6) {
                        ensure_class(&section, "revealed", true);
                        fired.set(true);
                    }
                }
            });
            move || drop(region)
        },
        (),
    );

    html! {
        <section id="philosophy" class="philosophy-section">
            <div class="philosophy-texture">
                <img src="https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2564&auto=format&fit=crop"
                    alt="Organic texture" loading="lazy" decoding="async" />
            </div>
            <div class="philosophy-inner">
                <p class="phil-line phil-setup">
                    {"Most copywriting focuses on: generic templates and empty words."}
                </p>
                <h2 class="phil-line phil-claim">
                    {"We focus on: "}<span class="accent">{"psychological resonance."}</span>
                </h2>
            </div>
        </section>
    }
}

#[function_component(ProtocolSection)]
fn protocol_section() -> Html {
    use_effect_with_deps(
        move |_| {
            let mut region = Region::new("protocol");
            let document = window().unwrap().document().unwrap();
            {
                // The scrub owns these inline styles and tags; unbinding
                // hands the cards back to their CSS defaults. Runs after
                // the listeners are gone, so nothing re-applies them.
                let document = document.clone();
                region.defer(move || {
                    for i in 0..PROTOCOL_PHASES.len() {
                        if let Some(card) = document
                            .query_selector(&format!(".protocol-card-{}", i + 1))
                            .ok()
                            .flatten()
                        {
                            let _ = card.remove_attribute("style");
                        }
                        if let Some(tag) = document
                            .query_selector(&format!(".phase-tag-{}", i + 1))
                            .ok()
                            .flatten()
                        {
                            ensure_class(&tag, "live", false);
                        }
                    }
                });
            }
            bind_scroll_frames(&mut region, move || {
                let section = match document.query_selector("#protocol").ok().flatten() {
                    Some(section) => section,
                    None => return,
                };
                let viewport = viewport_height();
                if viewport <= 0.0 {
                    return;
                }
                // Geometry is re-derived every frame, so a resize or a
                // late reflow never leaves stale trigger ranges behind.
                let stack =
                    PinnedStack::evenly(document_top(&section), viewport, PROTOCOL_PHASES.len());
                let scroll = scroll_offset();
                let active = stack.active_pinned(scroll);
                for i in 0..stack.len() {
                    if let Some(card) = document
                        .query_selector(&format!(".protocol-card-{}", i + 1))
                        .ok()
                        .flatten()
                    {
                        set_style(&card, &stack.style_at(i, scroll).css());
                    }
                    if let Some(tag) = document
                        .query_selector(&format!(".phase-tag-{}", i + 1))
                        .ok()
                        .flatten()
                    {
                        ensure_class(&tag, "live", active == Some(i));
                    }
                }
            });
            move || drop(region)
        },
        (),
    );

    html! {
        <section id="protocol" class="protocol-section">
            { protocol_card(1, PROTOCOL_PHASES[0].0, PROTOCOL_PHASES[0].1, compass_art()) }
            { protocol_card(2, PROTOCOL_PHASES[1].0, PROTOCOL_PHASES[1].1, architecture_art()) }
            { protocol_card(3, PROTOCOL_PHASES[2].0, PROTOCOL_PHASES[2].1, waveform_art()) }
        </section>
    }
}

fn protocol_card(index: usize, title: &'static str, desc: &'static str, art: Html) -> Html {
    html! {
        <div class={format!("protocol-card protocol-card-{}", index)}>
            <div class="protocol-grid">
                <div class="protocol-copy">
                    <div class={format!("phase-tag phase-tag-{}", index)}>
                        {format!("Phase 0{}", index)}
                    </div>
                    <h3 class="protocol-title">{title}</h3>
                    <p class="protocol-desc">{desc}</p>
                </div>
                <div class="protocol-art">{art}</div>
            </div>
        </div>
    }
}

fn compass_art() -> Html {
    html! {
        <svg class="compass-spin" viewBox="0 0 100 100" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="50" cy="50" r="40" stroke-dasharray="4 4" />
            <circle cx="50" cy="50" r="25" />
            <path d="M50 10 L50 90 M10 50 L90 50" stroke-dasharray="2 4" />
        </svg>
    }
}

fn architecture_art() -> Html {
    html! {
        <div class="arch-wrap">
            <div class="arch-grid">
                { (0..25).map(|i| html! { <div key={i} class="arch-cell"></div> }).collect::<Html>() }
            </div>
            <div class="laser-scan"></div>
        </div>
    }
}

fn waveform_art() -> Html {
    html! {
        <svg class="waveform" viewBox="0 0 200 100" fill="none" stroke="currentColor" stroke-width="3">
            <path class="wave-pulse" stroke-dasharray="500" stroke-dashoffset="500"
                d="M0 50 L40 50 L50 20 L60 80 L70 50 L200 50" />
        </svg>
    }
}

/// Delivery outcomes fold into the submission state at dispatch time,
/// over whatever the state is right then. Two racing attempts therefore
/// cannot regress the form: once one of them lands an acceptance, a
/// later failure reduces `Submitted` and leaves it locked.
impl Reducible for SubmitState {
    type Action = SubmitOutcome;

    fn reduce(self: Rc<Self>, outcome: SubmitOutcome) -> Rc<Self> {
        Rc::new(self.next(outcome))
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    let email = use_state(String::new);
    let submit_state = use_reducer_eq(SubmitState::default);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit_state.is_locked() {
                return;
            }
            let fields = LeadFields::new((*email).clone());
            if fields.is_blank() {
                return;
            }
            let submit_state = submit_state.clone();
            spawn_local(async move {
                let outcome = deliver_lead(&fields).await;
                submit_state.dispatch(outcome);
            });
        })
    };

    html! {
        <section id="cta" class="cta-section">
            <div class="cta-panel">
                <div class="cta-texture">
                    <img src="https://images.unsplash.com/photo-1518531933037-91b2f5f229cc?q=80&w=2574&auto=format&fit=crop"
                        alt="Texture" loading="lazy" decoding="async" />
                </div>
                <div class="cta-content">
                    <h2 class="cta-title">{"Ready to capture your audience?"}</h2>
                    <p class="cta-lede">
                        {"Enter your email address in the form below to start transforming your copy into your biggest competitive advantage."}
                    </p>
                    <form class="cta-form" onsubmit={onsubmit}>
                        <input
                            type="email"
                            name="email"
                            class="cta-input"
                            placeholder="Enter your email address"
                            required={true}
                            value={(*email).clone()}
                            oninput={oninput}
                            disabled={submit_state.is_locked()}
                        />
                        <button type="submit" class="magnetic-btn cta-submit"
                            disabled={submit_state.is_locked()}>
                            <span class="btn-bg"></span>
                            <span class="btn-content">{submit_state.button_label()}</span>
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

fn footer() -> Html {
    let year = chrono::Utc::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{"Copy Capture"}</h3>
                        <p>{"Writing copy that makes people want to buy from you."}</p>
                    </div>
                    <div class="footer-col">
                        <h4>{"Navigation"}</h4>
                        <ul>
                            <li><a href="#features">{"Features"}</a></li>
                            <li><a href="#philosophy">{"Philosophy"}</a></li>
                            <li><a href="#protocol">{"Protocol"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-col">
                        <h4>{"Legal"}</h4>
                        <ul>
                            <li><a href="/privacy-policy">{"Privacy Policy"}</a></li>
                            <li><a href="/terms">{"Terms of Service"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-base">
                    <div class="footer-copy">
                        {format!("© {} Copy Capture. All rights reserved.", year)}
                    </div>
                    <div class="status-pill">
                        <div class="status-dot"></div>
                        {"System Operational"}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start each visit at the top so entrance and reveal states line up
    // with a fresh scroll position.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="page">
            <NoiseOverlay />
            <header>
                <Navbar />
            </header>
            <main>
                <Hero />
                <FeaturesSection />
                <PhilosophySection />
                <ProtocolSection />
                <CtaSection />
            </main>
            { footer() }
            <style>
                {r#"
                * { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    background: #F2F0E9;
                    color: #1A1A1A;
                    font-family: 'Plus Jakarta Sans', sans-serif;
                }
                ::selection { background: #CC5833; color: #F2F0E9; }

                .noise-overlay {
                    position: fixed;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    z-index: 90;
                    pointer-events: none;
                    opacity: 0.04;
                }

                .navbar {
                    position: fixed;
                    top: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    width: 90%;
                    max-width: 64rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid transparent;
                    color: #F2F0E9;
                    mix-blend-mode: difference;
                    transition: background 0.5s, color 0.5s, border-color 0.5s;
                }
                .navbar.nav-scrolled {
                    mix-blend-mode: normal;
                    background: rgba(242, 240, 233, 0.6);
                    backdrop-filter: blur(24px);
                    -webkit-backdrop-filter: blur(24px);
                    color: #2E4036;
                    border-color: rgba(46, 64, 54, 0.1);
                }
                .nav-brand {
                    font-family: 'Outfit', sans-serif;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    font-size: 1.125rem;
                }
                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.875rem;
                }
                .nav-links a { color: inherit; text-decoration: none; }
                .hover-lift { display: inline-block; transition: transform 0.3s ease; }
                .hover-lift:hover { transform: translateY(-3px); }

                .magnetic-btn {
                    position: relative;
                    overflow: hidden;
                    border: none;
                    cursor: pointer;
                    background: #CC5833;
                    color: #F2F0E9;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.875rem;
                    font-weight: 500;
                    border-radius: 9999px;
                }
                .nav-cta { padding: 0.5rem 1.25rem; }
                .magnetic-btn .btn-bg {
                    position: absolute;
                    inset: 0;
                    background: #2E4036;
                    border-radius: inherit;
                    transform: scaleX(0);
                    transform-origin: left center;
                    transition: transform 0.45s cubic-bezier(0.33, 1, 0.68, 1);
                }
                .magnetic-btn:hover .btn-bg { transform: scaleX(1); }
                .magnetic-btn:disabled { cursor: default; opacity: 0.7; }
                .magnetic-btn:disabled .btn-bg { transform: scaleX(0); }
                .btn-content {
                    position: relative;
                    z-index: 1;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .hero {
                    position: relative;
                    height: 100dvh;
                    width: 100%;
                    overflow: hidden;
                    display: flex;
                    align-items: flex-end;
                    padding: 0 1.5rem 6rem;
                }
                .hero-backdrop { position: absolute; inset: 0; z-index: 0; }
                .hero-backdrop img { width: 100%; height: 100%; object-fit: cover; }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #1A1A1A, rgba(26, 26, 26, 0.6) 40%, transparent);
                }
                .hero-content { position: relative; z-index: 1; max-width: 56rem; width: 100%; }
                .hero-title { display: flex; flex-direction: column; gap: 0.5rem; margin: 0; color: #F2F0E9; }
                .hero-title-top { font-weight: 700; font-size: 2.5rem; letter-spacing: -0.02em; }
                .hero-drama {
                    font-family: 'Cormorant Garamond', serif;
                    font-style: italic;
                    font-weight: 500;
                    font-size: 5rem;
                    line-height: 0.85;
                }
                .hero-lede {
                    margin: 2rem 0 0;
                    color: rgba(242, 240, 233, 0.8);
                    font-family: 'Outfit', sans-serif;
                    font-size: 1.125rem;
                    max-width: 36rem;
                }
                .hero-actions { margin-top: 2.5rem; }
                .hero-cta { padding: 1rem 2rem; }
                .hero-text {
                    opacity: 0;
                    animation: rise-in 1.2s cubic-bezier(0.25, 1, 0.5, 1) forwards;
                }
                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .features-section { padding: 8rem 1.5rem; background: #F2F0E9; }
                .features-inner { max-width: 80rem; margin: 0 auto; }
                .features-head { margin-bottom: 5rem; }
                .section-title {
                    font-weight: 700;
                    font-size: 2.25rem;
                    letter-spacing: -0.02em;
                    color: #2E4036;
                    margin: 0;
                }
                .section-lede {
                    font-family: 'Outfit', sans-serif;
                    font-size: 1.125rem;
                    color: rgba(26, 26, 26, 0.6);
                    margin: 1rem 0 0;
                    max-width: 36rem;
                }
                .feature-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
                .feature-card { opacity: 0; }
                .features-section.revealed .feature-card {
                    animation: card-rise 1s cubic-bezier(0.25, 1, 0.5, 1) forwards;
                }
                .features-section.revealed .feature-card:nth-child(2) { animation-delay: 0.15s; }
                .features-section.revealed .feature-card:nth-child(3) { animation-delay: 0.3s; }
                @keyframes card-rise {
                    from { opacity: 0; transform: translateY(60px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .demo-card {
                    background: #F2F0E9;
                    border: 1px solid rgba(46, 64, 54, 0.1);
                    border-radius: 2rem;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(26, 26, 26, 0.06);
                    height: 400px;
                    display: flex;
                    flex-direction: column;
                    position: relative;
                    overflow: hidden;
                }
                .demo-card-dark {
                    background: #1A1A1A;
                    border-color: rgba(46, 64, 54, 0.2);
                    color: #F2F0E9;
                }
                .demo-card-head { margin-bottom: 1.5rem; }
                .demo-head-row { display: flex; align-items: center; justify-content: space-between; }
                .demo-title { font-weight: 700; font-size: 1.5rem; color: #2E4036; margin: 0; }
                .demo-title.on-dark { color: #F2F0E9; }
                .demo-sub {
                    font-family: 'Outfit', sans-serif;
                    color: rgba(26, 26, 26, 0.7);
                    margin: 0.5rem 0 0;
                }
                .demo-sub.on-dark { color: rgba(242, 240, 233, 0.7); }

                .shuffle-stage { position: relative; flex: 1; margin-top: 1rem; }
                .shuffle-card {
                    position: absolute;
                    width: 100%;
                    background: #FFFFFF;
                    border: 1px solid rgba(46, 64, 54, 0.05);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(26, 26, 26, 0.05);
                    transition: all 700ms cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .shuffle-card-index {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    color: #CC5833;
                    margin-bottom: 0.5rem;
                }
                .shuffle-card-title { font-weight: 600; font-size: 1.125rem; color: #2E4036; margin: 0; }
                .shuffle-card-desc {
                    font-family: 'Outfit', sans-serif;
                    font-size: 0.875rem;
                    color: rgba(26, 26, 26, 0.6);
                    margin: 0.25rem 0 0;
                }

                .live-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    color: #CC5833;
                    background: rgba(204, 88, 51, 0.1);
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    white-space: nowrap;
                }
                .live-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #CC5833;
                    animation: soft-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                @keyframes soft-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.35; }
                }
                .feed-terminal {
                    flex: 1;
                    background: rgba(0, 0, 0, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: rgba(242, 240, 233, 0.8);
                    overflow: hidden;
                }
                .feed-caret {
                    display: inline-block;
                    width: 0.5rem;
                    height: 1rem;
                    background: #CC5833;
                    margin-left: 0.25rem;
                    vertical-align: middle;
                    animation: soft-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }

                .scheduler-stage { flex: 1; position: relative; margin-top: 1rem; }
                .day-grid {
                    display: grid;
                    grid-template-columns: repeat(7, 1fr);
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }
                .day-cell {
                    aspect-ratio: 1;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    background: rgba(46, 64, 54, 0.05);
                    color: rgba(46, 64, 54, 0.5);
                    transition: background-color 0.3s, color 0.3s;
                }
                .day-cell.picked { background: #CC5833; color: #F2F0E9; }
                .chip-row { display: flex; justify-content: flex-end; }
                .deploy-chip {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    background: rgba(46, 64, 54, 0.1);
                    color: rgba(46, 64, 54, 0.5);
                    transition: background-color 0.3s, color 0.3s;
                }
                .deploy-chip.armed { background: #2E4036; color: #F2F0E9; }
                .demo-cursor {
                    position: absolute;
                    top: 0;
                    left: 0;
                    z-index: 10;
                    pointer-events: none;
                    opacity: 0;
                    will-change: transform, opacity;
                }

                .philosophy-section {
                    position: relative;
                    padding: 10rem 1.5rem;
                    background: #1A1A1A;
                    overflow: hidden;
                }
                .philosophy-texture { position: absolute; inset: 0; z-index: 0; opacity: 0.2; }
                .philosophy-texture img { width: 100%; height: 100%; object-fit: cover; }
                .philosophy-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 64rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .phil-line { opacity: 0; }
                .philosophy-section.revealed .phil-line {
                    animation: line-rise 1.2s cubic-bezier(0.25, 1, 0.5, 1) forwards;
                }
                .philosophy-section.revealed .phil-line:nth-child(2) { animation-delay: 0.2s; }
                @keyframes line-rise {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .phil-setup {
                    font-family: 'Outfit', sans-serif;
                    font-size: 1.25rem;
                    color: rgba(242, 240, 233, 0.6);
                    margin: 0 0 2rem;
                }
                .phil-claim {
                    font-family: 'Cormorant Garamond', serif;
                    font-style: italic;
                    font-weight: 500;
                    font-size: 3rem;
                    line-height: 1.1;
                    color: #F2F0E9;
                    margin: 0;
                }
                .phil-claim .accent { color: #CC5833; }

                .protocol-section { position: relative; background: #F2F0E9; }
                .protocol-card {
                    position: sticky;
                    top: 0;
                    height: 100dvh;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #F2F0E9;
                    will-change: transform, opacity, filter;
                }
                .protocol-grid {
                    max-width: 64rem;
                    width: 100%;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .phase-tag {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.875rem;
                    color: #CC5833;
                    margin-bottom: 1.5rem;
                    transition: text-shadow 0.3s;
                }
                .phase-tag.live { text-shadow: 0 0 14px rgba(204, 88, 51, 0.55); }
                .protocol-title { font-weight: 700; font-size: 2.25rem; color: #2E4036; margin: 0 0 1.5rem; }
                .protocol-desc {
                    font-family: 'Outfit', sans-serif;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(26, 26, 26, 0.7);
                    margin: 0;
                }
                .protocol-art {
                    aspect-ratio: 1;
                    background: rgba(46, 64, 54, 0.05);
                    border: 1px solid rgba(46, 64, 54, 0.1);
                    border-radius: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    color: #2E4036;
                }
                .compass-spin { width: 50%; height: 50%; animation: spin 20s linear infinite; }
                @keyframes spin { to { transform: rotate(360deg); } }
                .arch-wrap { width: 100%; height: 100%; position: relative; padding: 3rem; }
                .arch-grid {
                    width: 100%;
                    height: 100%;
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    grid-template-rows: repeat(5, 1fr);
                    gap: 0.5rem;
                }
                .arch-cell { background: rgba(46, 64, 54, 0.2); border-radius: 0.125rem; }
                .laser-scan {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: #CC5833;
                    box-shadow: 0 0 15px rgba(204, 88, 51, 0.8);
                    z-index: 1;
                    animation: scan-sweep 3s ease-in-out infinite alternate;
                }
                @keyframes scan-sweep {
                    from { top: 0; }
                    to { top: calc(100% - 4px); }
                }
                .waveform { width: 66%; height: 66%; color: #CC5833; }
                .wave-pulse { animation: dash-draw 2s ease-in-out infinite; }
                @keyframes dash-draw { to { stroke-dashoffset: 0; } }

                .cta-section {
                    padding: 8rem 1.5rem;
                    background: #F2F0E9;
                    display: flex;
                    justify-content: center;
                }
                .cta-panel {
                    max-width: 56rem;
                    width: 100%;
                    background: #2E4036;
                    border-radius: 3rem;
                    padding: 3rem 1.5rem;
                    text-align: center;
                    position: relative;
                    overflow: hidden;
                }
                .cta-texture { position: absolute; inset: 0; opacity: 0.1; }
                .cta-texture img { width: 100%; height: 100%; object-fit: cover; }
                .cta-content { position: relative; z-index: 1; }
                .cta-title {
                    font-family: 'Cormorant Garamond', serif;
                    font-style: italic;
                    font-weight: 500;
                    font-size: 3rem;
                    color: #F2F0E9;
                    margin: 0 0 1.5rem;
                }
                .cta-lede {
                    font-family: 'Outfit', sans-serif;
                    font-size: 1.125rem;
                    color: rgba(242, 240, 233, 0.8);
                    max-width: 36rem;
                    margin: 0 auto 2.5rem;
                }
                .cta-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 32rem;
                    margin: 0 auto;
                }
                .cta-input {
                    flex: 1;
                    background: rgba(242, 240, 233, 0.1);
                    border: 1px solid rgba(242, 240, 233, 0.2);
                    border-radius: 9999px;
                    padding: 1rem 1.5rem;
                    color: #F2F0E9;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.875rem;
                    transition: border-color 0.3s;
                    outline: none;
                }
                .cta-input::placeholder { color: rgba(242, 240, 233, 0.5); }
                .cta-input:focus { border-color: #CC5833; }
                .cta-input:disabled { opacity: 0.6; }
                .cta-submit { padding: 1rem 2rem; }

                .site-footer {
                    background: #1A1A1A;
                    color: #F2F0E9;
                    padding: 5rem 1.5rem 2.5rem;
                    border-radius: 4rem 4rem 0 0;
                    margin-top: -2rem;
                    position: relative;
                    z-index: 2;
                }
                .footer-inner { max-width: 80rem; margin: 0 auto; }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    margin-bottom: 5rem;
                }
                .footer-brand h3 {
                    font-family: 'Outfit', sans-serif;
                    font-weight: 600;
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }
                .footer-brand p {
                    font-family: 'Outfit', sans-serif;
                    color: rgba(242, 240, 233, 0.6);
                    max-width: 24rem;
                    margin: 0;
                }
                .footer-col h4 {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    color: rgba(242, 240, 233, 0.4);
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin: 0 0 1.5rem;
                }
                .footer-col ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .footer-col a {
                    font-family: 'Outfit', sans-serif;
                    color: rgba(242, 240, 233, 0.8);
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .footer-col a:hover { color: #CC5833; }
                .footer-base {
                    border-top: 1px solid rgba(242, 240, 233, 0.1);
                    padding-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-copy {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    color: rgba(242, 240, 233, 0.4);
                }
                .status-pill {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    color: rgba(242, 240, 233, 0.6);
                    background: rgba(242, 240, 233, 0.05);
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                }
                .status-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #22C55E;
                    animation: soft-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }

                @media (min-width: 768px) {
                    .nav-links { display: flex; }
                    .hero { padding: 0 3rem 6rem; }
                    .hero-title-top { font-size: 3.75rem; }
                    .hero-drama { font-size: 8rem; }
                    .hero-lede { font-size: 1.25rem; }
                    .features-section { padding: 8rem 3rem; }
                    .section-title { font-size: 3rem; }
                    .feature-grid { grid-template-columns: repeat(3, 1fr); }
                    .philosophy-section { padding: 10rem 3rem; }
                    .phil-setup { font-size: 1.5rem; }
                    .phil-claim { font-size: 5.5rem; }
                    .protocol-grid { grid-template-columns: 1fr 1fr; padding: 0 3rem; }
                    .protocol-title { font-size: 3.5rem; }
                    .cta-panel { padding: 5rem; }
                    .cta-title { font-size: 4.5rem; }
                    .cta-form { flex-direction: row; }
                    .site-footer { padding: 5rem 3rem 2.5rem; }
                    .footer-grid { grid-template-columns: 2fr 1fr 1fr; }
                    .footer-base { flex-direction: row; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::prelude::Reducible;

    use crate::lead_form::{SubmitOutcome, SubmitState};

    // Two attempts in flight at once: the first resolves with an
    // acceptance, the second with failures. Each outcome reduces the
    // state current at its arrival, so the late failures land on
    // `Submitted` and cannot reopen the form.
    #[test]
    fn late_failure_cannot_undo_a_landed_acceptance() {
        let state = Rc::new(SubmitState::default());
        let state = state.reduce(SubmitOutcome::Accepted);
        let state = state.reduce(SubmitOutcome::ConnectionFailed);
        let state = state.reduce(SubmitOutcome::Rejected(502));
        assert_eq!(*state, SubmitState::Submitted);
        assert!(state.is_locked());
        assert_eq!(state.button_label(), "Notified");
    }

    #[test]
    fn failed_attempts_reduce_back_to_an_open_form() {
        let state = Rc::new(SubmitState::default());
        let state = state.reduce(SubmitOutcome::Rejected(422));
        let state = state.reduce(SubmitOutcome::ConnectionFailed);
        assert_eq!(*state, SubmitState::Idle);
        assert!(!state.is_locked());
        assert_eq!(state.button_label(), "Book a Call");
    }
}
