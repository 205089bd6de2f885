use stylist::yew::styled_component;
use yew::prelude::*;

use crate::indicator::{dash_array, percentage_label};

#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    pub progress: f64,
    pub radius: f64,
    pub arc_length: f64,
}

#[styled_component]
pub fn ProgressRing(props: &ProgressRingProps) -> Html {
    let wrapper = css!(
        r#"
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        z-index: 50;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
        border-radius: 9999px;
        padding: 1rem;

        .ring {
            width: 4rem;
            height: 4rem;
            position: relative;
        }

        svg {
            width: 100%;
            height: 100%;
            transform: rotate(-90deg);
        }

        .ring-fill {
            transition: all 300ms;
        }

        .ring-label {
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
            font-size: 0.875rem;
            font-weight: 600;
        }
        "#
    );

    let radius = props.radius.to_string();

    html! {
        <div class={wrapper}>
            <div class="ring">
                <svg viewBox="0 0 100 100">
                    <circle cx="50" cy="50" r={radius.clone()}
                        stroke="rgba(255,255,255,0.2)" stroke-width="8" fill="none" />
                    <circle class="ring-fill" cx="50" cy="50" r={radius}
                        stroke="#3B82F6" stroke-width="8" fill="none"
                        stroke-dasharray={dash_array(props.progress, props.arc_length)} />
                </svg>
                <span class="ring-label">{ percentage_label(props.progress) }</span>
            </div>
        </div>
    }
}
