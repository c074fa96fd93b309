use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod curves;
mod inquiry;
mod scroll;

mod components {
    pub mod contact;
    pub mod hero;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

/// Page scroll offset past which the nav pill gets its shadow.
const NAV_SHADOW_THRESHOLD: f64 = 20.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::wrap(Box::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                let offset = win.scroll_y().unwrap_or(0.0);
                                is_scrolled.set(offset > NAV_SHADOW_THRESHOLD);
                            }
                        }
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    // Initial sample, in case the browser restored a scroll
                    // position on load.
                    let offset = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > NAV_SHADOW_THRESHOLD);

                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Selecting any link closes the overlay before the anchor jump, so the
    // menu never persists across a navigation.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |class: &'static str, close: &Callback<MouseEvent>| {
        content::NAV_LINKS
            .iter()
            .map(|(label, anchor)| {
                html! {
                    <a href={*anchor} {class} onclick={close.clone()}>{*label}</a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <>
        <style>
        {r#".nav-shell {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            padding: 1rem 1rem 0;
        }
        .nav-pill {
            max-width: 64rem;
            margin: 0 auto;
            padding: 0.75rem 1.5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.95);
            backdrop-filter: blur(4px);
            transition: box-shadow 0.5s;
        }
        .nav-pill.scrolled {
            box-shadow: 0 4px 20px -4px rgba(0, 0, 0, 0.08);
        }
        .nav-brand {
            font-family: 'Cormorant Garamond', serif;
            font-size: 1rem;
            letter-spacing: -0.01em;
            color: #2C2420;
            text-decoration: none;
        }
        .nav-links {
            display: flex;
            align-items: center;
            gap: 2rem;
        }
        .nav-link {
            font-size: 0.75rem;
            color: rgba(44, 36, 32, 0.6);
            text-decoration: none;
            transition: color 0.3s;
        }
        .nav-link:hover { color: #2C2420; }
        .burger-menu {
            display: none;
            flex-direction: column;
            gap: 4px;
            background: none;
            border: none;
            padding: 0.25rem;
            cursor: pointer;
        }
        .burger-menu span {
            display: block;
            width: 16px;
            height: 1.5px;
            background: #2C2420;
            transition: transform 0.3s, opacity 0.3s;
        }
        .burger-menu.open span:nth-child(1) { transform: translateY(5.5px) rotate(45deg); }
        .burger-menu.open span:nth-child(2) { opacity: 0; }
        .burger-menu.open span:nth-child(3) { transform: translateY(-5.5px) rotate(-45deg); }
        .mobile-overlay {
            position: fixed;
            inset: 0;
            z-index: 40;
            background: #FDFCFA;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 2rem;
            animation: overlay-enter 0.3s ease-out both;
        }
        .mobile-overlay a {
            font-size: 1.125rem;
            color: #2C2420;
            text-decoration: none;
        }
        @keyframes overlay-enter {
            from { opacity: 0; }
            to { opacity: 1; }
        }
        @media (max-width: 768px) {
            .nav-links { display: none; }
            .burger-menu { display: flex; }
        }"#}
        </style>
        <div class="nav-shell">
            <nav class={classes!("nav-pill", (*is_scrolled).then_some("scrolled"))}>
                <a href="#" class="nav-brand">{"MiriamSokolMakeup"}</a>
                <div class="nav-links">
                    {links("nav-link", &close_menu)}
                    <a href="#contact" class="nav-link">{"Inquire"}</a>
                </div>
                <button class={classes!("burger-menu", (*menu_open).then_some("open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </div>
        {
            if *menu_open {
                html! {
                    <div class="mobile-overlay">
                        {links("mobile-link", &close_menu)}
                    </div>
                }
            } else {
                html! {}
            }
        }
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
