//! Testimonial rotator: dot controls select a quote absolutely, no timer.

use yew::prelude::*;

use crate::content;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let active = use_state(|| 0_usize);
    // Bumped on every dot click, including re-clicks of the active dot, so
    // each selection gets a fresh key for the quote node.
    let selection = use_state(|| 0_usize);

    let dots = content::TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let onclick = {
                let active = active.clone();
                let selection = selection.clone();
                Callback::from(move |_: MouseEvent| {
                    active.set(i);
                    selection.set(*selection + 1);
                })
            };
            let class = if i == *active {
                "testimonial-dot current"
            } else {
                "testimonial-dot"
            };
            html! { <button {class} {onclick} aria-label={format!("Show testimonial {}", i + 1)}></button> }
        })
        .collect::<Html>();

    let testimonial = &content::TESTIMONIALS[*active];

    html! {
        <section class="testimonials-section">
            <style>
            {r#".testimonials-section {
                padding: 8rem 1.5rem;
                background: #F7F5F2;
            }
            .testimonials-inner {
                max-width: 42rem;
                margin: 0 auto;
                text-align: center;
            }
            .testimonial-quote {
                animation: quote-enter 0.5s ease-out both;
            }
            .testimonial-quote blockquote {
                font-size: 1.25rem;
                font-style: italic;
                line-height: 1.7;
                color: #2C2420;
                margin: 0 0 2rem;
            }
            .testimonial-quote cite {
                font-size: 0.75rem;
                font-style: normal;
                color: rgba(44, 36, 32, 0.4);
            }
            .testimonial-dots {
                display: flex;
                justify-content: center;
                gap: 0.5rem;
                margin-top: 3rem;
            }
            .testimonial-dot {
                width: 6px;
                height: 6px;
                padding: 0;
                border: none;
                border-radius: 50%;
                background: rgba(44, 36, 32, 0.2);
                cursor: pointer;
                transition: background-color 0.3s;
            }
            .testimonial-dot.current { background: #2C2420; }
            @keyframes quote-enter {
                from { opacity: 0; }
                to { opacity: 1; }
            }"#}
            </style>
            <div class="testimonials-inner">
                // Keyed by selection, not index: re-selecting the active
                // quote still recreates the node and replays the entrance
                // fade.
                <div class="testimonial-quote" key={*selection}>
                    <blockquote>{format!("\u{201C}{}\u{201D}", testimonial.quote)}</blockquote>
                    <cite>{testimonial.author}</cite>
                </div>
                <div class="testimonial-dots">
                    {dots}
                </div>
            </div>
        </section>
    }
}
