use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::{Card, CardTheme};
use crate::placement::PlacementDescriptor;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub card: Card,
    pub placement: PlacementDescriptor,
    pub transition_ms: u32,
}

/// The accent token tints the icon on its solid white badge.
fn icon_badge_style(theme: &CardTheme) -> String {
    format!("color: {};", theme.accent_color())
}

/// One card of the stack, absolutely positioned inside the sticky stage.
#[styled_component]
pub fn FeatureCard(props: &FeatureCardProps) -> Html {
    let FeatureCardProps { card, placement, transition_ms } = props;

    let shell = css!(
        r#"
        position: absolute;
        transform-origin: top left;

        .card-body {
            height: 90vh;
            border-radius: 1rem;
            padding: 1.5rem;
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
            display: flex;
            flex-direction: column;
            justify-content: space-between;
            color: white;
            position: relative;
            overflow: hidden;
        }

        .card-header {
            display: flex;
            align-items: center;
            margin-bottom: 1.5rem;
        }

        .card-icon-wrap {
            background: white;
            padding: 0.75rem;
            border-radius: 0.75rem;
            margin-right: 1rem;
        }

        h2 {
            font-size: 1.875rem;
            font-weight: 700;
            margin: 0 0 0.5rem 0;
        }

        .card-subtitle, .card-description {
            opacity: 0.9;
        }

        .card-features li {
            display: flex;
            align-items: center;
            font-size: 0.875rem;
            margin-bottom: 0.75rem;
        }

        .card-features li::before {
            content: "";
            width: 0.5rem;
            height: 0.5rem;
            background: white;
            border-radius: 50%;
            margin-right: 0.75rem;
        }

        .learn-more {
            background: rgba(255, 255, 255, 0.2);
            color: white;
            border: none;
            padding: 0.5rem 1.5rem;
            border-radius: 0.5rem;
            font-weight: 600;
            cursor: pointer;
            transition: all 300ms;
        }

        .learn-more:hover {
            background: rgba(255, 255, 255, 0.3);
            transform: scale(1.05);
        }
        "#
    );

    let style = format!(
        "{} transition: all {}ms ease-out;",
        placement.to_style(),
        transition_ms
    );

    html! {
        <div
            class={classes!(shell, "feature-card", placement.phase.as_str())}
            style={style}
            data-card-id={card.id.to_string()}
        >
            <div class={classes!("card-body", card.theme.gradient_class())}>
                <div class="card-content">
                    <div class="card-header">
                        <div class="card-icon-wrap" style={icon_badge_style(&card.theme)}>
                            <Icon icon={card.icon} />
                        </div>
                        <div>
                            <h2>{ &card.title }</h2>
                            <p class="card-subtitle">{ &card.subtitle }</p>
                        </div>
                    </div>
                    <p class="card-description">{ &card.description }</p>
                    <h3>{"Key Features:"}</h3>
                    <ul class="card-features">
                        { for card.features.iter().map(|feature| html! { <li>{ feature }</li> }) }
                    </ul>
                </div>
                <div>
                    <button class="learn-more">
                        {"Learn More"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CardDeck;

    #[test]
    fn test_icon_badge_uses_accent_color() {
        let deck = CardDeck::embedded().unwrap();
        let styles: Vec<String> = deck.cards().iter().map(|c| icon_badge_style(&c.theme)).collect();
        assert_eq!(styles[0], "color: #2563eb;");
        assert_eq!(styles[3], "color: #ea580c;");
    }
}
