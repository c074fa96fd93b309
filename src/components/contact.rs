//! Inquiry form: field state, the submission lifecycle, and the call to the
//! backend inquiry endpoint.

use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::inquiry::{Category, Inquiry, InquiryForm, SubmissionState};

async fn submit_inquiry(form: &InquiryForm) -> Result<(), gloo_net::Error> {
    let response = Request::post(&format!("{}/api/inquiry", config::get_backend_url()))
        .json(form)?
        .send()
        .await?;
    if response.ok() {
        Ok(())
    } else {
        Err(gloo_net::Error::GlooError(format!(
            "inquiry endpoint returned status {}",
            response.status()
        )))
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let inquiry = use_state(Inquiry::default);

    let edit_field = |write: fn(&mut InquiryForm, String)| {
        let inquiry = inquiry.clone();
        move |value: String| {
            let mut next = (*inquiry).clone();
            write(&mut next.form, value);
            inquiry.set(next);
        }
    };

    let on_first_name = {
        let edit = edit_field(|form, v| form.first_name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_last_name = {
        let edit = edit_field(|form, v| form.last_name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_phone = {
        let edit = edit_field(|form, v| form.phone = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_message = {
        let edit = edit_field(|form, v| form.message = v);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit(area.value());
        })
    };
    let on_category = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*inquiry).clone();
            next.form.category = Category::from_value(&select.value());
            inquiry.set(next);
        })
    };

    let onsubmit = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*inquiry).clone();
            if !next.begin_submit() {
                return;
            }
            let payload = next.form.clone();
            let in_flight = next.clone();
            inquiry.set(next);

            let inquiry = inquiry.clone();
            spawn_local(async move {
                let mut done = in_flight;
                match submit_inquiry(&payload).await {
                    Ok(()) => done.submit_succeeded(),
                    Err(err) => {
                        log!("inquiry submission failed:", err.to_string());
                        done.submit_failed();
                    }
                }
                inquiry.set(done);
            });
        })
    };

    let submitting = inquiry.state == SubmissionState::Submitting;
    let form = &inquiry.form;

    let body = if inquiry.state == SubmissionState::Success {
        html! {
            <div class="contact-thanks">
                <p class="thanks-main">{"Thank you for reaching out."}</p>
                <p class="thanks-sub">{"I will be in touch soon."}</p>
            </div>
        }
    } else {
        html! {
            <form {onsubmit} class="contact-form">
                <div class="field-row">
                    <div class="field">
                        <input
                            type="text"
                            required=true
                            placeholder="First name"
                            value={form.first_name.clone()}
                            oninput={on_first_name}
                        />
                        <label>{"First name"}</label>
                    </div>
                    <div class="field">
                        <input
                            type="text"
                            required=true
                            placeholder="Last name"
                            value={form.last_name.clone()}
                            oninput={on_last_name}
                        />
                        <label>{"Last name"}</label>
                    </div>
                </div>
                <div class="field">
                    <input
                        type="tel"
                        required=true
                        placeholder="Phone"
                        value={form.phone.clone()}
                        oninput={on_phone}
                    />
                    <label>{"Phone number"}</label>
                </div>
                <div class="field">
                    <select required=true onchange={on_category}>
                        <option value="" disabled=true selected={form.category.is_none()}>
                            {"Select inquiry type"}
                        </option>
                        {
                            Category::ALL.iter().map(|category| html! {
                                <option
                                    value={category.value()}
                                    selected={form.category == Some(*category)}
                                >
                                    {category.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
                <div class="field">
                    <textarea
                        rows="3"
                        placeholder="Message"
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    <label>{"Message (optional)"}</label>
                </div>
                <div class="submit-row">
                    <button type="submit" disabled={submitting} class="submit-button">
                        <span>{ if submitting { "Sending..." } else { "Send inquiry" } }</span>
                        <span class="submit-line"></span>
                    </button>
                </div>
                {
                    if inquiry.state == SubmissionState::Error {
                        html! {
                            <p class="contact-error">
                                {"Something went wrong. Please try again."}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </form>
        }
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
            {r#".contact-section {
                padding: 8rem 1.5rem;
            }
            .contact-inner {
                max-width: 36rem;
                margin: 0 auto;
            }
            .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
            .field-row {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1rem;
            }
            .field { position: relative; }
            .field input,
            .field select,
            .field textarea {
                width: 100%;
                background: transparent;
                border: none;
                border-bottom: 1px solid rgba(44, 36, 32, 0.1);
                padding: 0.75rem 0;
                font-size: 0.875rem;
                font-family: inherit;
                color: #2C2420;
                outline: none;
                transition: border-color 0.3s;
                resize: none;
            }
            .field input:focus,
            .field select:focus,
            .field textarea:focus { border-bottom-color: #C9B896; }
            .field input::placeholder,
            .field textarea::placeholder { color: transparent; }
            .field label {
                position: absolute;
                left: 0;
                top: 0.75rem;
                font-size: 0.75rem;
                color: rgba(44, 36, 32, 0.4);
                pointer-events: none;
                transition: all 0.2s;
            }
            .field input:focus + label,
            .field input:not(:placeholder-shown) + label,
            .field textarea:focus + label,
            .field textarea:not(:placeholder-shown) + label {
                top: -0.5rem;
                font-size: 10px;
                color: #C9B896;
            }
            .submit-row { padding-top: 1.5rem; }
            .submit-button {
                display: inline-flex;
                align-items: center;
                gap: 0.75rem;
                background: none;
                border: none;
                padding: 0;
                font-size: 0.75rem;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                color: #2C2420;
                cursor: pointer;
            }
            .submit-button:disabled { cursor: wait; opacity: 0.6; }
            .submit-line {
                width: 2rem;
                height: 1px;
                background: #C9B896;
                transition: width 0.3s;
            }
            .submit-button:hover:enabled .submit-line { width: 3rem; }
            .contact-error { font-size: 0.75rem; color: #c0392b; }
            .contact-thanks {
                text-align: center;
                padding: 4rem 0;
                animation: thanks-enter 0.4s ease-out both;
            }
            .thanks-main { font-size: 0.875rem; color: #2C2420; margin: 0 0 0.5rem; }
            .thanks-sub { font-size: 0.75rem; color: rgba(44, 36, 32, 0.5); margin: 0; }
            @keyframes thanks-enter {
                from { opacity: 0; transform: translateY(10px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @media (max-width: 640px) {
                .field-row { grid-template-columns: 1fr; }
            }"#}
            </style>
            <div class="contact-inner">
                <p class="section-kicker">{"Contact"}</p>
                <h2 class="section-title">{"Let us work together"}</h2>
                <p class="section-lede">
                    {"Whether it is your wedding day, a special event, or just because."}
                </p>
                {body}
            </div>
        </section>
    }
}
