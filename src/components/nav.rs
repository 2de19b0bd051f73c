use yew::prelude::*;

use super::button::{Button, ButtonVariant};
use super::icons::{Icon, SvgIcon};
use crate::config::{BRAND, BRAND_TLD};
use crate::state::{Page, Section, Theme, ViewAction};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub dispatch: Callback<ViewAction>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let onclick = props.dispatch.reform(|_: MouseEvent| ViewAction::ToggleTheme);

    html! {
        <button class={classes!("theme-toggle", props.class.clone())} {onclick} aria-label="Toggle Dark Mode">
            {
                if theme.is_dark() {
                    html! { <SvgIcon icon={Icon::Sun} class="theme-toggle__sun" /> }
                } else {
                    html! { <SvgIcon icon={Icon::Moon} class="theme-toggle__moon" /> }
                }
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub page: Page,
    pub menu_open: bool,
    pub dispatch: Callback<ViewAction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { page, menu_open, dispatch } = props;

    let go_home = dispatch.reform(|_: MouseEvent| ViewAction::NavigateTo(Page::Home));

    let logo = html! {
        <div class="nav-logo" onclick={go_home}>
            <span class="nav-logo__brand">{BRAND}<span class="nav-logo__tld">{BRAND_TLD}</span></span>
        </div>
    };

    // The privacy page only gets the logo and the theme switch.
    if *page == Page::Privacy {
        return html! {
            <nav class="top-nav compact">
                <div class="nav-content">
                    { logo }
                    <ThemeToggle dispatch={dispatch.clone()} />
                </div>
            </nav>
        };
    }

    let section_link = |section: Section, class: &'static str| {
        let onclick = dispatch.reform(move |_: MouseEvent| ViewAction::ScrollToSection(section));
        html! {
            <button key={section.id()} class={class} {onclick}>{section.label()}</button>
        }
    };

    let toggle_menu = dispatch.reform(|e: MouseEvent| {
        e.prevent_default();
        ViewAction::ToggleMenu
    });

    let build_my_app = dispatch.reform(|_: MouseEvent| ViewAction::ScrollToSection(Section::Contact));

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                { logo }

                <div class="nav-desktop">
                    { for Section::ALL.iter().map(|s| section_link(*s, "nav-link")) }
                    <ThemeToggle dispatch={dispatch.clone()} />
                    <Button variant={ButtonVariant::Primary} onclick={build_my_app}>
                        {"Build My App"}
                    </Button>
                </div>

                <div class="nav-mobile-controls">
                    <ThemeToggle dispatch={dispatch.clone()} class="spaced" />
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <SvgIcon icon={if *menu_open { Icon::X } else { Icon::Menu }} />
                    </button>
                </div>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for Section::ALL.iter().map(|s| section_link(*s, "mobile-menu__link")) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
