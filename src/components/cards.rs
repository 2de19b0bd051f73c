use yew::prelude::*;

use super::icons::{Icon, SvgIcon};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-card__icon">
                <SvgIcon icon={props.icon} />
            </div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TechBadgeProps {
    pub label: AttrValue,
}

#[function_component(TechBadge)]
pub fn tech_badge(props: &TechBadgeProps) -> Html {
    html! {
        <span class="tech-badge">{ props.label.clone() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessStepProps {
    pub step: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(ProcessStepCard)]
pub fn process_step_card(props: &ProcessStepProps) -> Html {
    html! {
        <div class="process-step">
            <span class="process-step__dot"></span>
            <span class="process-step__number">{ props.step.clone() }</span>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}
