use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::cards::{FeatureCard, ProcessStepCard, TechBadge};
use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::icons::{Icon, SvgIcon};
use crate::config::BRAND;
use crate::content::{FEATURES, PROCESS_STEPS, TECH_STACK, VALUE_PROPS};
use crate::state::{Section, ViewAction};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub dispatch: Callback<ViewAction>,
    /// Emitted once the page is in the DOM so deferred section scrolls can run.
    pub on_mounted: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    {
        let on_mounted = props.on_mounted.clone();
        use_effect_with_deps(
            move |_| {
                on_mounted.emit(());
                || ()
            },
            (), // mount only
        );
    }

    let scroll_to = |section: Section| {
        props
            .dispatch
            .reform(move |_: MouseEvent| ViewAction::ScrollToSection(section))
    };

    html! {
        <div class="landing">
            <section class="hero">
                <div class="hero-grid-decoration"></div>
                <div class="container hero-layout">
                    <div class="hero-copy">
                        <div class="hero-pill">
                            <SvgIcon icon={Icon::Zap} class="pill-icon" />
                            {"Next-Gen AI Development"}
                        </div>
                        <h1>
                            {"Forging Intelligent "}<br />
                            <span class="gradient-text">{"Digital Realities"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {format!("{} builds custom, high-performance web applications powered by cutting-edge Artificial Intelligence. Automate workflows, predict trends, and scale effortlessly.", BRAND)}
                        </p>
                        <div class="hero-cta-group">
                            <Button variant={ButtonVariant::Primary} onclick={scroll_to(Section::Contact)} icon={Icon::ArrowRight}>
                                {"Start Your Project"}
                            </Button>
                            <Button variant={ButtonVariant::Outline} onclick={scroll_to(Section::Features)}>
                                {"Explore Features"}
                            </Button>
                        </div>
                    </div>

                    <div class="hero-visual">
                        <div class="mock-window">
                            <div class="mock-window__bar">
                                <span class="dot red"></span>
                                <span class="dot yellow"></span>
                                <span class="dot green"></span>
                            </div>
                            <div class="mock-window__body">
                                <div class="mock-status">
                                    <span>{"System Status"}</span>
                                    <span class="pulse">{"● Online"}</span>
                                </div>
                                <div class="mock-progress"><div class="mock-progress__fill"></div></div>
                                <div class="mock-stats">
                                    <div>
                                        <span class="mock-stats__label">{"AI Model"}</span>
                                        <span class="mock-stats__value">{format!("{}-2.0", BRAND)}</span>
                                    </div>
                                    <div>
                                        <span class="mock-stats__label">{"Latency"}</span>
                                        <span class="mock-stats__value">{"04ms"}</span>
                                    </div>
                                </div>
                                <div class="mock-footnote">{"Analysis Complete. Optimization +400%."}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="value-props">
                <div class="container">
                    <div class="section-heading">
                        <h2>{format!("Why {}?", BRAND)}</h2>
                        <p>{"We don't just write code; we engineer intelligence."}</p>
                    </div>
                    <div class="value-grid">
                        { for VALUE_PROPS.iter().map(|v| html! {
                            <div class="value-prop" key={v.title}>
                                <div class={classes!("value-prop__icon", v.accent)}>
                                    <SvgIcon icon={v.icon} />
                                </div>
                                <h3>{v.title}</h3>
                                <p>{v.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Features.id()} class="features">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Powerful Features for Modern Business"}</h2>
                        <p>{"Everything you need to launch a world-class AI application."}</p>
                    </div>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|f| html! {
                            <FeatureCard key={f.title} icon={f.icon} title={f.title} description={f.description} />
                        }) }
                    </div>
                    <div class="tech-stack">
                        <p class="tech-stack__title">{"Powered By Best-in-Class Technology"}</p>
                        <div class="tech-stack__badges">
                            { for TECH_STACK.iter().map(|tech| html! {
                                <TechBadge key={*tech} label={*tech} />
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id={Section::Process.id()} class="process">
                <div class="blob blob--emerald"></div>
                <div class="blob blob--blue"></div>
                <div class="container">
                    <div class="process-heading">
                        <h2>{"Our Development Process"}</h2>
                        <div class="underline"></div>
                    </div>
                    <div class="process-grid">
                        { for PROCESS_STEPS.iter().map(|s| html! {
                            <ProcessStepCard key={s.step} step={s.step} title={s.title} description={s.description} />
                        }) }
                    </div>
                </div>
            </section>

            <ContactSection />

            <Footer dispatch={props.dispatch.clone()} />

            <style>
                {r#"
                .hero {
                    position: relative;
                    padding: 8rem 0 5rem;
                    overflow: hidden;
                }

                .hero-grid-decoration {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                    pointer-events: none;
                    background-image:
                        linear-gradient(to right, #10b981 1px, transparent 1px),
                        linear-gradient(to bottom, #10b981 1px, transparent 1px);
                    background-size: 4rem 4rem;
                }

                .dark .hero-grid-decoration {
                    opacity: 0.2;
                }

                .hero-layout {
                    position: relative;
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 4rem;
                    align-items: center;
                }

                .hero-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: #d1fae5;
                    color: #047857;
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }

                .dark .hero-pill {
                    background: rgba(6, 78, 59, 0.5);
                    color: #6ee7b7;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    font-weight: 800;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: var(--muted);
                    max-width: 42rem;
                    margin-bottom: 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .mock-window {
                    border-radius: 1rem;
                    padding: 0.5rem;
                    background: linear-gradient(to top right, #e2e8f0, #f1f5f9);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transform: rotate(3deg);
                    transition: transform 0.5s ease;
                }

                .mock-window:hover {
                    transform: rotate(0deg);
                }

                .dark .mock-window {
                    background: linear-gradient(to top right, #1e293b, #334155);
                }

                .mock-window__bar {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    background: #1e293b;
                    border-radius: 0.75rem 0.75rem 0 0;
                }

                .dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; }
                .dot.red { background: #ef4444; }
                .dot.yellow { background: #eab308; }
                .dot.green { background: #22c55e; }

                .mock-window__body {
                    background: #0f172a;
                    border-radius: 0 0 0.75rem 0.75rem;
                    padding: 1.5rem;
                    font-family: monospace;
                    font-size: 0.875rem;
                    color: #64748b;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .mock-status {
                    display: flex;
                    justify-content: space-between;
                    color: #34d399;
                }

                .pulse { animation: pulse 2s infinite; }

                @keyframes pulse {
                    50% { opacity: 0.5; }
                }

                .mock-progress {
                    height: 0.5rem;
                    background: #334155;
                    border-radius: 999px;
                    overflow: hidden;
                }

                .mock-progress__fill {
                    height: 100%;
                    width: 75%;
                    background: #10b981;
                }

                .mock-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .mock-stats > div {
                    background: #1e293b;
                    border: 1px solid #334155;
                    border-radius: 0.25rem;
                    padding: 0.75rem;
                }

                .mock-stats__label { display: block; font-size: 0.75rem; color: #94a3b8; }
                .mock-stats__value { color: #fff; font-weight: 700; }
                .mock-footnote { text-align: center; font-size: 0.75rem; color: #475569; }

                .value-props { padding: 5rem 0; background: var(--surface-alt); }

                .value-grid, .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .value-prop { text-align: center; padding: 1.5rem; }

                .value-prop__icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .value-prop__icon.blue { background: #dbeafe; color: #2563eb; }
                .value-prop__icon.purple { background: #f3e8ff; color: #9333ea; }
                .value-prop__icon.emerald { background: #d1fae5; color: #059669; }

                .features { padding: 6rem 0; background: var(--surface); }

                .feature-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: var(--card);
                    border: 1px solid var(--border);
                    box-shadow: 0 20px 25px rgba(226, 232, 240, 0.5);
                    transition: border-color 0.3s ease;
                }

                .dark .feature-card { box-shadow: none; }
                .feature-card:hover { border-color: #10b981; }

                .feature-card__icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #d1fae5;
                    color: #059669;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .feature-card:hover .feature-card__icon { transform: scale(1.1); }

                .tech-stack {
                    margin-top: 5rem;
                    padding-top: 2.5rem;
                    border-top: 1px solid var(--border);
                    text-align: center;
                }

                .tech-stack__title {
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #64748b;
                    margin-bottom: 1.5rem;
                }

                .tech-stack__badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }

                .tech-badge {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: var(--surface-alt);
                    border: 1px solid var(--border);
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                .tech-badge:hover { border-color: #10b981; }

                .process {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 0;
                    background: #0f172a;
                    color: #fff;
                }

                .blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    opacity: 0.2;
                }

                .blob--emerald { top: -5rem; right: -5rem; background: #059669; }
                .blob--blue { bottom: -5rem; left: -5rem; background: #2563eb; }

                .process-heading { margin-bottom: 3rem; }

                .underline { height: 0.25rem; width: 5rem; background: #10b981; border-radius: 0.25rem; }

                .process-grid {
                    position: relative;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .process-step {
                    position: relative;
                    padding-left: 2rem;
                    border-left: 2px solid #334155;
                    transition: border-color 0.3s ease;
                }

                .process-step:hover { border-color: #10b981; }

                .process-step__dot {
                    position: absolute;
                    left: -9px;
                    top: 0;
                    width: 1rem;
                    height: 1rem;
                    border-radius: 50%;
                    background: #10b981;
                }

                .process-step__number {
                    position: absolute;
                    top: -1rem;
                    right: 1rem;
                    font-size: 3rem;
                    font-weight: 700;
                    color: #1e293b;
                    opacity: 0.5;
                    user-select: none;
                }

                .process-step p { color: #94a3b8; }

                @media (max-width: 1024px) {
                    .hero-layout { grid-template-columns: 1fr; text-align: center; }
                    .hero-cta-group { justify-content: center; }
                    .feature-grid { grid-template-columns: repeat(2, 1fr); }
                }

                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.25rem; }
                    .value-grid, .feature-grid, .process-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
