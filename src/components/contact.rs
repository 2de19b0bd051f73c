use log::info;
use yew::prelude::*;

use super::button::{Button, ButtonVariant};
use super::icons::{Icon, SvgIcon};
use crate::config;
use crate::state::Section;

#[derive(Properties, PartialEq)]
struct ContactLinkProps {
    href: AttrValue,
    icon: Icon,
    accent: &'static str,
    label: &'static str,
    value: AttrValue,
    #[prop_or(false)]
    external: bool,
}

#[function_component(ContactLink)]
fn contact_link(props: &ContactLinkProps) -> Html {
    let (target, rel) = if props.external {
        (Some("_blank"), Some("noreferrer"))
    } else {
        (None, None)
    };

    html! {
        <a href={props.href.clone()} {target} {rel} class="contact-link">
            <div class={classes!("contact-link__icon", props.accent)}>
                <SvgIcon icon={props.icon} />
            </div>
            <div>
                <p class="contact-link__label">{props.label}</p>
                <p class="contact-link__value">{props.value.clone()}</p>
            </div>
        </a>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    // The form is a placeholder; nothing leaves the page.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted; submission is not wired up");
    });

    html! {
        <section id={Section::Contact.id()} class="contact-section">
            <div class="container contact-grid">
                <div>
                    <h2>{"Ready to Matrix Your Business?"}</h2>
                    <p class="lead">
                        {"Let's discuss how we can build your vision. Reach out via WhatsApp, Email, or LinkedIn, or fill out the form."}
                    </p>

                    <div class="contact-links">
                        <ContactLink
                            href={config::WHATSAPP_LINK}
                            icon={Icon::MessageCircle}
                            accent="green"
                            label="WhatsApp"
                            value={config::PHONE_DISPLAY}
                            external=true
                        />
                        <ContactLink
                            href={config::PHONE_LINK}
                            icon={Icon::Phone}
                            accent="blue"
                            label="Call Us"
                            value={config::PHONE_DISPLAY}
                        />
                        <ContactLink
                            href={config::mailto_link()}
                            icon={Icon::Mail}
                            accent="red"
                            label="Email"
                            value={config::CONTACT_EMAIL}
                        />
                        <ContactLink
                            href={config::LINKEDIN_LINK}
                            icon={Icon::Linkedin}
                            accent="indigo"
                            label="LinkedIn"
                            value={format!("Connect with {}", config::LINKEDIN_NAME)}
                            external=true
                        />
                    </div>
                </div>

                <div class="contact-form-card">
                    <h3>{"Request a Consultation"}</h3>
                    <form class="contact-form" {onsubmit}>
                        <div>
                            <label for="contact-name">{"Name"}</label>
                            <input id="contact-name" type="text" placeholder="Your Name" />
                        </div>
                        <div>
                            <label for="contact-email">{"Email"}</label>
                            <input id="contact-email" type="email" placeholder="your@email.com" />
                        </div>
                        <div>
                            <label for="contact-idea">{"Project Idea"}</label>
                            <textarea id="contact-idea" rows="4" placeholder="Tell us about your AI needs..."></textarea>
                        </div>
                        <Button variant={ButtonVariant::Primary} kind="submit" class="full-width">
                            {"Send Message"}
                        </Button>
                        <p class="form-note">{"By submitting this form, you agree to our privacy policy."}</p>
                    </form>
                </div>
            </div>
        </section>
    }
}
