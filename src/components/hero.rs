//! Scroll-linked hero: a tall region whose sticky inner viewport pans a
//! full-bleed image and fades the text panel as the visitor scrolls through.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::curves::HeroVisualState;
use crate::scroll::pinned_progress;

fn current_progress(section: &web_sys::Element) -> f64 {
    let rect = section.get_bounding_client_rect();
    let viewport = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    pinned_progress(rect.top(), rect.height(), viewport)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let progress = use_state(|| 0.0_f64);
    let section_ref = use_node_ref();

    // One listener for scroll and resize; both invalidate the same sample.
    {
        let progress = progress.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let update = Closure::wrap(Box::new({
                        let progress = progress.clone();
                        let section_ref = section_ref.clone();
                        move || {
                            if let Some(section) = section_ref.cast::<web_sys::Element>() {
                                progress.set(current_progress(&section));
                            }
                        }
                    }) as Box<dyn FnMut()>);

                    for event in ["scroll", "resize"] {
                        let _ = window.add_event_listener_with_callback(
                            event,
                            update.as_ref().unchecked_ref(),
                        );
                    }
                    // Initial sample, in case the browser restored a scroll
                    // position on load.
                    if let Some(section) = section_ref.cast::<web_sys::Element>() {
                        progress.set(current_progress(&section));
                    }

                    Box::new(move || {
                        if let Some(window) = web_sys::window() {
                            for event in ["scroll", "resize"] {
                                let _ = window.remove_event_listener_with_callback(
                                    event,
                                    update.as_ref().unchecked_ref(),
                                );
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // All three properties come from the same sample; the scroll position is
    // the time base, so no extra easing is applied on top of the curves.
    let visual = HeroVisualState::at(*progress);
    // The panning layer rests at left: -8%, so curve 0% is the resting
    // position and -67% lands the total pan at roughly -75%.
    let image_style = format!("transform: translateX({}%);", visual.image_x_pct);
    let text_style = format!(
        "opacity: {}; transform: translateY({}%);",
        visual.text_opacity, visual.text_y_pct
    );
    let indicator_style = format!("opacity: {};", visual.text_opacity);

    html! {
        <section ref={section_ref} class="hero-region">
            <style>
            {r#".hero-region {
                position: relative;
                height: 600vh;
            }
            .hero-viewport {
                position: sticky;
                top: 0;
                height: 100vh;
                overflow: hidden;
            }
            .hero-backdrop {
                position: absolute;
                inset: 0;
            }
            .hero-pan-layer {
                position: absolute;
                top: 0;
                bottom: 0;
                left: -8%;
                width: 400%;
                height: 100%;
            }
            .hero-pan-layer img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                object-position: center;
            }
            .hero-wash-left {
                position: absolute;
                inset: 0;
                width: 50%;
                background: linear-gradient(to right, #FDFCFA, rgba(253, 252, 250, 0.6), transparent);
            }
            .hero-wash-vertical {
                position: absolute;
                inset: 0;
                background: linear-gradient(to top, rgba(253, 252, 250, 0.3), transparent, rgba(253, 252, 250, 0.2));
            }
            .hero-text {
                position: relative;
                z-index: 10;
                height: 100%;
                display: flex;
                align-items: center;
                padding: 0 4rem;
            }
            .hero-card {
                max-width: 28rem;
                background: rgba(255, 255, 255, 0.7);
                backdrop-filter: blur(4px);
                border-radius: 1rem;
                padding: 2.5rem;
                animation: hero-enter 1s ease-out 0.5s both;
            }
            .hero-kicker {
                font-size: 0.75rem;
                letter-spacing: 0.3em;
                text-transform: uppercase;
                color: rgba(44, 36, 32, 0.4);
                margin-bottom: 2rem;
            }
            .hero-card h1 {
                font-family: 'Cormorant Garamond', serif;
                font-size: 3rem;
                font-weight: 400;
                line-height: 1.15;
                color: #2C2420;
                margin: 0 0 2rem;
            }
            .hero-card p {
                font-size: 0.875rem;
                line-height: 1.7;
                color: rgba(44, 36, 32, 0.6);
                margin: 0;
            }
            .hero-cta {
                display: inline-flex;
                align-items: center;
                gap: 0.75rem;
                margin-top: 3rem;
                font-size: 0.75rem;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                color: rgba(44, 36, 32, 0.6);
                text-decoration: none;
                transition: color 0.3s;
            }
            .hero-cta:hover { color: #2C2420; }
            .hero-cta .cta-line {
                width: 1.5rem;
                height: 1px;
                background: currentColor;
                transition: width 0.3s;
            }
            .hero-cta:hover .cta-line { width: 2.5rem; }
            .scroll-indicator {
                position: absolute;
                bottom: 2rem;
                left: 4rem;
                z-index: 10;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 0.5rem;
                font-size: 10px;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                color: rgba(44, 36, 32, 0.3);
            }
            .scroll-indicator .chevron {
                animation: indicator-bounce 1.2s infinite;
            }
            @keyframes hero-enter {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes indicator-bounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(4px); }
            }
            @media (max-width: 768px) {
                .hero-text { padding: 0 1.5rem; }
                .hero-card h1 { font-size: 1.75rem; }
                .scroll-indicator { left: 50%; transform: translateX(-50%); }
            }"#}
            </style>
            <div class="hero-viewport">
                <div class="hero-backdrop">
                    <div class="hero-pan-layer" style={image_style}>
                        <img src="/images/landing.jpg" alt="Miriam Sokol Makeup" />
                    </div>
                    <div class="hero-wash-left"></div>
                    <div class="hero-wash-vertical"></div>
                </div>
                <div class="hero-text" style={text_style}>
                    <div class="hero-card">
                        <p class="hero-kicker">{"New Jersey"}</p>
                        <h1>{"Beauty That Feels Like You"}</h1>
                        <p>
                            {"Two decades of artistry. A space where you can exhale \
                              and leave feeling a little more in love with the face \
                              looking back at you."}
                        </p>
                        <a href="#contact" class="hero-cta">
                            {"Get in touch"}
                            <span class="cta-line"></span>
                        </a>
                    </div>
                </div>
                <div class="scroll-indicator" style={indicator_style}>
                    <span>{"Scroll"}</span>
                    <span class="chevron">{"\u{2304}"}</span>
                </div>
            </div>
        </section>
    }
}
