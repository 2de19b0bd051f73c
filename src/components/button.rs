use yew::prelude::*;

use super::icons::{Icon, SvgIcon};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub icon: Option<Icon>,
    #[prop_or(String::from("button"))]
    pub kind: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let onclick = props.onclick.clone();

    html! {
        <button
            type={props.kind.clone()}
            class={classes!("btn", props.variant.class(), props.class.clone())}
            {onclick}
        >
            { for props.children.iter() }
            {
                if let Some(icon) = props.icon {
                    html! { <SvgIcon icon={icon} class="btn-icon" /> }
                } else {
                    html! {}
                }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
