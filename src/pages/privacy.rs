use chrono::Local;
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::content::PRIVACY_SECTIONS;

#[derive(Properties, PartialEq)]
pub struct PrivacyPolicyProps {
    pub on_back: Callback<MouseEvent>,
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(props: &PrivacyPolicyProps) -> Html {
    let last_updated = Local::now().format("%-d/%-m/%Y").to_string();

    html! {
        <div class="legal-content">
            <div class="legal-card">
                <button class="back-link" onclick={props.on_back.clone()}>
                    <SvgIcon icon={Icon::ArrowRight} class="flipped" />
                    {"Back to Home"}
                </button>

                <h1>{"Privacy Policy"}</h1>
                <p class="legal-updated">{format!("Last Updated: {}", last_updated)}</p>

                <div class="legal-sections">
                    { for PRIVACY_SECTIONS.iter().map(|s| html! {
                        <section key={s.heading}>
                            <h2>{s.heading}</h2>
                            <p>{s.body}</p>
                        </section>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    padding: 6rem 1rem 3rem;
                    background: var(--surface-alt);
                }

                .legal-card {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 3rem;
                    border-radius: 1rem;
                    background: var(--card);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .back-link {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    color: #059669;
                    font-weight: 500;
                }

                .back-link:hover { color: #10b981; }

                .flipped { transform: rotate(180deg); }

                .legal-content h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .legal-updated { color: #64748b; margin-bottom: 2rem; }

                .legal-sections {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    color: var(--muted);
                }

                .legal-content h2 {
                    color: #059669;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }

                @media (max-width: 768px) {
                    .legal-card { padding: 2rem; }
                    .legal-content h1 { font-size: 1.875rem; }
                }
                "#}
            </style>
        </div>
    }
}
