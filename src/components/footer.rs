use chrono::{Datelike, Local};
use yew::prelude::*;

use super::icons::{Icon, SvgIcon};
use crate::config::{self, BRAND, BRAND_TLD};
use crate::state::{Page, Section, ViewAction};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub dispatch: Callback<ViewAction>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let scroll_to = |section: Section| {
        props
            .dispatch
            .reform(move |_: MouseEvent| ViewAction::ScrollToSection(section))
    };
    let open_privacy = props
        .dispatch
        .reform(|_: MouseEvent| ViewAction::NavigateTo(Page::Privacy));

    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-brand__name">{format!("{}{}", BRAND, BRAND_TLD)}</span>
                        <p>{"Empowering businesses with intelligent web solutions. Your partner in the AI revolution."}</p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            <li><button onclick={scroll_to(Section::Features)}>{"Features"}</button></li>
                            <li><button onclick={scroll_to(Section::Process)}>{"Process"}</button></li>
                            <li><button onclick={open_privacy}>{"Privacy Policy"}</button></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Connect"}</h4>
                        <ul>
                            <li><a href={config::LINKEDIN_LINK}>{"LinkedIn"}</a></li>
                            <li><a href={config::mailto_link()}>{"Email"}</a></li>
                            <li><a href={config::WHATSAPP_LINK}>{"WhatsApp"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}{}. All rights reserved.", year, BRAND, BRAND_TLD)}</p>
                    <div class="footer-bottom__icons">
                        <SvgIcon icon={Icon::Terminal} />
                        <SvgIcon icon={Icon::Code} />
                    </div>
                </div>
            </div>
        </footer>
    }
}
