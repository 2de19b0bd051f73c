use log::{debug, info};
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod state;
mod components {
    pub mod button;
    pub mod cards;
    pub mod contact;
    pub mod footer;
    pub mod icons;
    pub mod nav;
}
mod pages {
    pub mod home;
    pub mod privacy;
}

use components::nav::Nav;
use dom::BrowserViewport;
use pages::{home::Home, privacy::PrivacyPolicy};
use state::{Page, Theme, ViewAction, ViewState};

fn render_page(page: Page, dispatch: &Callback<ViewAction>) -> Html {
    info!("Rendering {} page", page.name());
    match page {
        Page::Home => {
            let on_mounted = dispatch.reform(|_: ()| ViewAction::HomeMounted);
            html! { <Home dispatch={dispatch.clone()} {on_mounted} /> }
        }
        Page::Privacy => {
            let on_back = dispatch.reform(|_: MouseEvent| ViewAction::NavigateTo(Page::Home));
            html! { <PrivacyPolicy {on_back} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let state = use_reducer(ViewState::default);

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: ViewAction| {
            debug!("View action: {:?}", action);
            dispatcher.dispatch(action);
        })
    };

    // Scroll requests are carried out after the DOM commit of the render
    // that armed them.
    {
        let scroll = state.scroll;
        use_effect_with_deps(
            move |_| {
                if let Some(request) = scroll {
                    dom::perform(&BrowserViewport, request);
                }
                || ()
            },
            state.scroll_ticket,
        );
    }

    html! {
        <ContextProvider<Theme> context={state.theme}>
            <div class={classes!("app-root", state.theme.css_class())}>
                <Nav page={state.page} menu_open={state.menu_open} dispatch={dispatch.clone()} />
                { render_page(state.page, &dispatch) }
                <style>
                    {r#"
                    .app-root {
                        --surface: #ffffff;
                        --surface-alt: #f8fafc;
                        --card: #ffffff;
                        --border: #f1f5f9;
                        --text: #0f172a;
                        --muted: #475569;
                        min-height: 100vh;
                        background: var(--surface);
                        color: var(--text);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        transition: background-color 0.3s ease, color 0.3s ease;
                    }

                    .app-root.dark {
                        --surface: #0f172a;
                        --surface-alt: #1e293b;
                        --card: #1e293b;
                        --border: #334155;
                        --text: #ffffff;
                        --muted: #94a3b8;
                    }

                    .app-root button {
                        background: none;
                        border: none;
                        color: inherit;
                        font: inherit;
                        cursor: pointer;
                    }

                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }

                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .section-heading h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .section-heading p { color: var(--muted); font-size: 1.125rem; }

                    .gradient-text {
                        background: linear-gradient(to right, #059669, #2dd4bf);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .icon { width: 1.5rem; height: 1.5rem; flex-shrink: 0; }

                    .top-nav {
                        position: fixed;
                        width: 100%;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #e2e8f0;
                    }

                    .dark .top-nav {
                        background: rgba(15, 23, 42, 0.9);
                        border-bottom-color: #1e293b;
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .top-nav.compact .nav-content { height: 4rem; }

                    .nav-logo { cursor: pointer; }

                    .nav-logo__brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #059669, #14b8a6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .nav-logo__tld { -webkit-text-fill-color: var(--text); }

                    .nav-desktop {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link, .mobile-menu__link {
                        color: var(--muted);
                        font-weight: 500;
                        padding: 0.5rem 0.75rem;
                        transition: color 0.3s ease;
                    }

                    .nav-link:hover, .mobile-menu__link:hover { color: #059669; }

                    .theme-toggle {
                        padding: 0.5rem;
                        border-radius: 999px;
                        display: flex;
                        align-items: center;
                    }

                    .theme-toggle:hover { background: var(--surface-alt); }
                    .theme-toggle.spaced { margin-right: 0.5rem; }
                    .theme-toggle__sun { color: #facc15; }
                    .theme-toggle__moon { color: #475569; }

                    .nav-mobile-controls, .mobile-menu { display: none; }

                    .burger-menu {
                        padding: 0.5rem;
                        border-radius: 0.375rem;
                        color: var(--muted);
                    }

                    .burger-menu:hover { background: #059669; color: #fff; }

                    .mobile-menu {
                        flex-direction: column;
                        padding: 0.5rem 0.5rem 0.75rem;
                        background: var(--surface);
                        border-bottom: 1px solid var(--border);
                    }

                    .mobile-menu__link { display: block; width: 100%; text-align: left; }

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        transition: all 0.3s ease;
                    }

                    .btn:hover { transform: translateY(-4px); }
                    .btn-icon { width: 1.25rem; height: 1.25rem; }
                    .btn.full-width { width: 100%; }

                    .app-root .btn-primary {
                        background: #059669;
                        color: #fff;
                        box-shadow: 0 10px 15px rgba(16, 185, 129, 0.3);
                    }

                    .app-root .btn-primary:hover { background: #10b981; }

                    .app-root .btn-outline {
                        border: 2px solid #059669;
                        color: #059669;
                    }

                    .app-root .btn-outline:hover { background: #ecfdf5; }
                    .dark .btn-outline { color: #34d399; border-color: #34d399; }
                    .dark .btn-outline:hover { background: #1e293b; }

                    .contact-section { padding: 6rem 0; background: var(--surface-alt); }

                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }

                    .contact-section h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .contact-section .lead { font-size: 1.125rem; color: var(--muted); margin-bottom: 2rem; }

                    .contact-links { display: flex; flex-direction: column; gap: 1.5rem; }

                    .contact-link {
                        display: flex;
                        align-items: center;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: var(--card);
                        color: inherit;
                        text-decoration: none;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: box-shadow 0.3s ease;
                    }

                    .contact-link:hover { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }

                    .contact-link__icon {
                        width: 3rem;
                        height: 3rem;
                        margin-right: 1rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .contact-link__icon.green { background: #dcfce7; color: #16a34a; }
                    .contact-link__icon.blue { background: #dbeafe; color: #2563eb; }
                    .contact-link__icon.red { background: #fee2e2; color: #dc2626; }
                    .contact-link__icon.indigo { background: #e0e7ff; color: #4f46e5; }

                    .contact-link__label { font-size: 0.875rem; color: #64748b; }
                    .contact-link__value { font-size: 1.125rem; font-weight: 700; }

                    .contact-form-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: var(--surface);
                        border: 1px solid var(--border);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }

                    .contact-form-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; }

                    .contact-form { display: flex; flex-direction: column; gap: 1rem; }

                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.25rem;
                    }

                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #cbd5e1;
                        background: var(--card);
                        color: var(--text);
                        outline: none;
                    }

                    .contact-form input:focus, .contact-form textarea:focus {
                        box-shadow: 0 0 0 2px #10b981;
                    }

                    .form-note { font-size: 0.75rem; text-align: center; color: #64748b; margin-top: 1rem; }

                    .site-footer {
                        padding: 3rem 0;
                        background: #0f172a;
                        color: #cbd5e1;
                        border-top: 1px solid #1e293b;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }

                    .footer-brand__name {
                        display: block;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 1rem;
                    }

                    .footer-brand p { color: #94a3b8; max-width: 24rem; }

                    .site-footer h4 { color: #fff; font-weight: 700; margin-bottom: 1rem; }
                    .site-footer ul { list-style: none; padding: 0; }
                    .site-footer li { margin-bottom: 0.5rem; }
                    .site-footer a { color: inherit; text-decoration: none; }
                    .site-footer a:hover, .site-footer button:hover { color: #34d399; }

                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid #1e293b;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        font-size: 0.875rem;
                    }

                    .footer-bottom__icons { display: flex; gap: 1.5rem; color: #475569; }

                    @media (max-width: 768px) {
                        .nav-desktop { display: none; }
                        .nav-mobile-controls { display: flex; align-items: center; }
                        .mobile-menu { display: flex; }
                        .contact-grid, .footer-grid { grid-template-columns: 1fr; }
                        .footer-bottom { flex-direction: column; gap: 1rem; }
                    }
                    "#}
                </style>
            </div>
        </ContextProvider<Theme>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
