//! The single page: hero, services, portfolio, about, testimonials, contact.

use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::testimonials::Testimonials;
use crate::content;

fn services_section() -> Html {
    let cards = content::SERVICES
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let style = format!("animation-delay: {}ms;", i * 100);
            html! {
                <div class="service-card" {style}>
                    <div class="service-image">
                        <img src={service.image} alt={service.title} />
                    </div>
                    <div class="service-body">
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <a href="#contact" class="service-link">
                            {"Inquire"}
                            <span class="service-link-line"></span>
                        </a>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="services" class="services-section">
            <div class="section-inner wide">
                <p class="section-kicker">{"Services"}</p>
                <h2 class="section-title">{"Bridal, events, and more"}</h2>
                <div class="services-grid">
                    {cards}
                </div>
            </div>
        </section>
    }
}

fn portfolio_section() -> Html {
    let tiles = (1..=4)
        .map(|n| {
            html! {
                <div class="portfolio-tile">
                    <img src={format!("/images/portfolio/{}.jpg", n)} alt={format!("Portfolio {}", n)} />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="portfolio" class="portfolio-section">
            <div class="section-inner">
                <p class="section-kicker">{"Portfolio"}</p>
                <h2 class="section-title">{"Selected work"}</h2>
                <div class="portfolio-grid">
                    {tiles}
                </div>
            </div>
        </section>
    }
}

fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="section-inner narrow">
                <p class="section-kicker">{"About"}</p>
                <h2 class="section-title">{"I'm Miriam"}</h2>
                <div class="about-copy">
                    <p>
                        {"After two decades in this industry, I have learned that the \
                          best makeup has nothing to do with trends or techniques. It \
                          is about how you feel when you sit in my chair."}
                    </p>
                    <p>
                        {"When someone comes to me, I want them to exhale. To soften. \
                          To feel seen in a way they did not know they needed."}
                    </p>
                    <p>{"I do not mask women. I magnify what is already there."}</p>
                </div>
                <div class="about-images">
                    <div class="about-image">
                        <img src="/images/about-1.jpg" alt="Miriam" />
                    </div>
                    <div class="about-image">
                        <img src="/images/about-2.jpg" alt="Miriam at work" />
                    </div>
                </div>
            </div>
        </section>
    }
}

fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <span>{"MiriamSokolMakeup"}</span>
                <span>{"New Jersey"}</span>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="page">
            <style>
            {r#"body {
                margin: 0;
                background: #FDFCFA;
                font-family: 'Inter', sans-serif;
                color: #2C2420;
                -webkit-font-smoothing: antialiased;
            }
            .page { min-height: 100vh; }
            .section-inner { max-width: 60rem; margin: 0 auto; }
            .section-inner.wide { max-width: 72rem; }
            .section-inner.narrow { max-width: 46rem; }
            .section-kicker {
                font-size: 0.75rem;
                letter-spacing: 0.3em;
                text-transform: uppercase;
                color: rgba(44, 36, 32, 0.4);
                margin: 0 0 1rem;
            }
            .section-title {
                font-family: 'Cormorant Garamond', serif;
                font-size: 1.875rem;
                font-weight: 400;
                color: #2C2420;
                margin: 0 0 3rem;
            }
            .section-lede {
                font-size: 0.875rem;
                color: rgba(44, 36, 32, 0.5);
                margin: -2rem 0 3rem;
            }
            .services-section { padding: 8rem 1.5rem; }
            .services-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 2rem;
            }
            .service-card {
                background: linear-gradient(135deg, #FFFDFB, #FAF8F5, #F5F1EC);
                border-radius: 2px;
                overflow: hidden;
                box-shadow: 0 12px 50px -15px rgba(44, 36, 32, 0.15);
                transition: transform 0.5s, box-shadow 0.5s;
                animation: card-enter 0.7s ease-out both;
            }
            .service-card:hover {
                transform: translateY(-4px);
                box-shadow: 0 25px 70px -20px rgba(44, 36, 32, 0.2);
            }
            .service-image {
                aspect-ratio: 4 / 3;
                background: linear-gradient(135deg, #EDE7E0, #E2DAD0, #D6CCBF);
                padding: 1rem;
                box-sizing: border-box;
            }
            .service-image img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                border-radius: 2px;
            }
            .service-body { padding: 2rem; }
            .service-body h3 {
                font-family: 'Cormorant Garamond', serif;
                font-size: 1.125rem;
                font-weight: 500;
                margin: 0 0 0.75rem;
            }
            .service-body p {
                font-size: 13px;
                line-height: 1.7;
                color: rgba(44, 36, 32, 0.5);
                margin: 0 0 1.5rem;
            }
            .service-link {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding-top: 1rem;
                border-top: 1px solid rgba(201, 184, 150, 0.1);
                font-size: 10px;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                color: #9C8B7E;
                text-decoration: none;
                transition: color 0.3s;
            }
            .service-link:hover { color: #2C2420; }
            .service-link-line {
                width: 0.75rem;
                height: 1px;
                background: currentColor;
                transition: width 0.3s;
            }
            .service-link:hover .service-link-line { width: 1.25rem; }
            .portfolio-section { padding: 8rem 1.5rem; background: #F7F5F2; }
            .portfolio-grid {
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 0.75rem;
            }
            .portfolio-tile {
                aspect-ratio: 3 / 4;
                background: #E8E4DF;
                overflow: hidden;
            }
            .portfolio-tile img { width: 100%; height: 100%; object-fit: cover; }
            .about-section { padding: 8rem 1.5rem; }
            .about-copy p {
                font-size: 0.875rem;
                line-height: 1.8;
                color: rgba(44, 36, 32, 0.6);
                margin: 0 0 1.5rem;
            }
            .about-images {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1rem;
                margin-top: 5rem;
            }
            .about-image {
                aspect-ratio: 4 / 3;
                background: #E8E4DF;
                overflow: hidden;
            }
            .about-image img { width: 100%; height: 100%; object-fit: cover; }
            .site-footer {
                padding: 2rem 1.5rem;
                border-top: 1px solid rgba(44, 36, 32, 0.1);
            }
            .footer-inner {
                max-width: 60rem;
                margin: 0 auto;
                display: flex;
                justify-content: space-between;
                font-size: 0.75rem;
                color: rgba(44, 36, 32, 0.4);
            }
            @keyframes card-enter {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @media (max-width: 768px) {
                .services-grid { grid-template-columns: 1fr; }
                .portfolio-grid { grid-template-columns: 1fr 1fr; }
                .about-images { grid-template-columns: 1fr; }
            }"#}
            </style>
            <Hero />
            {services_section()}
            {portfolio_section()}
            {about_section()}
            <Testimonials />
            <Contact />
            {footer()}
        </div>
    }
}
