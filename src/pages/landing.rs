use std::rc::Rc;

use yew::prelude::*;

use crate::components::card::FeatureCard;
use crate::components::progress_ring::ProgressRing;
use crate::config::LandingConfig;
use crate::content::CardDeck;
use crate::hooks::use_scroll_state;
use crate::placement::layout;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub deck: Rc<CardDeck>,
    pub config: LandingConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let LandingProps { deck, config } = props;
    let card_count = deck.len();

    // Scroll to top only on initial mount
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

    let scroll = use_scroll_state(card_count, config.coalesce_ms);
    let placements = use_memo(
        |&(active, count)| layout(active, count),
        (scroll.active_index, card_count),
    );

    html! {
        <div class="landing-page">
            <style>{ PAGE_STYLES }</style>

            <header class="hero">
                <div class="hero-content">
                    <h1>{"The Future is Here"}</h1>
                    <p class="hero-subtitle">
                        {"Discover how our innovative features can transform your business and unlock new possibilities"}
                    </p>
                    <div class="scroll-hint">
                        <p>{"Scroll to explore"}</p>
                    </div>
                </div>
            </header>

            {
                if deck.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="card-runway" style={format!("height: {}vh;", card_count * 100)}>
                            <div class="card-stage">
                                {
                                    for deck.cards().iter().zip(placements.iter()).map(|(card, placement)| html! {
                                        <FeatureCard
                                            key={card.id.to_string()}
                                            card={card.clone()}
                                            placement={*placement}
                                            transition_ms={config.transition_ms}
                                        />
                                    })
                                }
                            </div>
                        </section>
                    }
                }
            }

            <footer class="closing-cta">
                <div class="closing-content">
                    <h2>{"Ready to Get Started?"}</h2>
                    <p>{"Transform your workflow with our comprehensive suite of tools and features"}</p>
                    <button class="journey-button">{"Start Your Journey"}</button>
                </div>
            </footer>

            <ProgressRing
                progress={scroll.progress}
                radius={config.ring_radius}
                arc_length={config.ring_arc_length}
            />
        </div>
    }
}

const PAGE_STYLES: &str = r#"
    body {
        margin: 0;
        font-family: system-ui, -apple-system, sans-serif;
    }

    .hero, .closing-cta {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        text-align: center;
        padding: 0 1.5rem;
    }

    .hero {
        background: linear-gradient(to bottom right, #111827, #1f2937);
    }

    .closing-cta {
        background: linear-gradient(to bottom right, #1f2937, #111827);
    }

    .hero h1 {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }

    .closing-cta h2 {
        font-size: 3rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }

    .hero-subtitle, .closing-content p {
        font-size: 1.25rem;
        max-width: 42rem;
        margin: 0 auto 2rem auto;
        color: #d1d5db;
    }

    .scroll-hint {
        font-size: 0.875rem;
        color: #9ca3af;
        animation: bounce 1s infinite;
    }

    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: translateY(0); }
    }

    .card-runway {
        position: relative;
    }

    .card-stage {
        position: sticky;
        top: 0;
        height: 100vh;
        overflow: hidden;
        background: #f9fafb;
    }

    .journey-button {
        background: #2563eb;
        color: white;
        border: none;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
        transition: all 300ms;
    }

    .journey-button:hover {
        background: #1d4ed8;
        transform: scale(1.05);
    }

    .gradient-blue-cyan { background: linear-gradient(to bottom right, #3b82f6, #22d3ee); }
    .gradient-purple-pink { background: linear-gradient(to bottom right, #a855f7, #f472b6); }
    .gradient-green-emerald { background: linear-gradient(to bottom right, #22c55e, #34d399); }
    .gradient-orange-red { background: linear-gradient(to bottom right, #f97316, #f87171); }
"#;
