mod carousel;
mod contact;
mod observe;
mod portfolio;
mod window_fx;

use crate::config::SiteConfig;
use crate::content::{NAV_LINKS, SKILLS, STATS};
use crate::effects::NavigationMenu;
use crate::error::{Result, SiteError};
use crate::motion::REVEAL_CLASS;
use crate::telemetry::{log_event, set_min_level, LogLevel};
use crate::theme::{Theme, ThemeController, ThemeStore};
use js_sys::{Function, Reflect};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage,
};
use yew::prelude::*;

use carousel::TestimonialCarousel;
use contact::ContactSection;
use observe::{use_reveal, Counter};
use portfolio::PortfolioSection;

const MOUNT_POINT_ID: &str = "app";
const CONFIG_ATTRIBUTE: &str = "data-config";
const DARK_CLASS: &str = "dark";

fn document() -> Result<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or(SiteError::BrowserApi("document"))
}

fn element_by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

fn html_element_by_id(id: &str) -> Result<HtmlElement> {
    element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::MissingElement(id.to_string()))
}

fn skip_missing<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log_event(LogLevel::Debug, "dom.skip", json!({ "reason": err.to_string() }));
            None
        }
    }
}

fn scroll_into_view(id: &str, block: ScrollLogicalPosition) {
    let Some(target) = skip_missing(element_by_id(id)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn open_external(url: &str) {
    let opened = window()
        .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
        .flatten()
        .is_some();
    log_event(LogLevel::Info, "nav.external", json!({ "url": url, "opened": opened }));
}

struct LocalThemeStore;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

impl ThemeStore for LocalThemeStore {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

fn apply_theme(theme: Theme) {
    let Some(root) = skip_missing(document()).and_then(|d| d.document_element()) else {
        return;
    };

    let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Ok(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn read_site_config(mount: &Element) -> SiteConfig {
    let Some(raw) = mount.get_attribute(CONFIG_ATTRIBUTE) else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log_event(
            LogLevel::Warn,
            "config.fallback",
            json!({ "reason": err.to_string() }),
        );
        SiteConfig::default()
    })
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[derive(Properties, PartialEq)]
struct RevealSectionProps {
    id: AttrValue,
    #[prop_or_default]
    class: Classes,
    threshold: f64,
    #[prop_or_default]
    children: Html,
}

#[function_component(RevealSection)]
fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.threshold);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("section", props.class.clone(), revealed.then_some(REVEAL_CLASS))}
        >
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    index: usize,
    threshold: f64,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.threshold);
    let skill = &SKILLS[props.index];

    html! {
        <div ref={node} class={classes!("skill-card", revealed.then_some(REVEAL_CLASS))}>
            <h3>{skill.name}</h3>
            <p class="muted">{skill.detail}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let controller = use_mut_ref(|| ThemeController::new(LocalThemeStore));
    let theme = {
        let controller = controller.clone();
        use_state(move || controller.borrow_mut().initialize(system_prefers_dark()))
    };
    let menu = use_state(NavigationMenu::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let listeners = window_fx::install(&config);
            move || drop(listeners)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let next = controller.borrow_mut().toggle();
            apply_theme_with_transition(next);
            log_event(LogLevel::Info, "theme.toggle", json!({ "theme": next.as_str() }));
            theme.set(next);
        })
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let on_nav_link = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let nav_links = |class: &'static str| -> Html {
        html! {
            <>
                { for NAV_LINKS.iter().map(|link| html! {
                    <a class={class} href={link.href} onclick={on_nav_link.clone()}>{link.label}</a>
                }) }
            </>
        }
    };

    html! {
        <>
            <div id="preloader" class="preloader" aria-hidden="true">
                <span class="preloader-ring"></span>
            </div>
            <div id="cursor" class="cursor-dot" aria-hidden="true"></div>
            <div id="cursor-trail" class="cursor-trail" aria-hidden="true"></div>

            <header class="site-header">
                <a class="brand" href="#home">{"Charles"}<span class="accent">{"."}</span></a>
                <nav class="desktop-nav" aria-label="Primary">{nav_links("nav-link")}</nav>
                <div class="header-actions">
                    <button
                        id="themeToggle"
                        class="icon-btn"
                        type="button"
                        aria-label={(*theme).toggle_label()}
                        aria-pressed={(*theme).is_dark().to_string()}
                        onclick={on_toggle_theme}
                    >
                        <span aria-hidden="true">{(*theme).icon()}</span>
                    </button>
                    <button
                        id="mobileMenuBtn"
                        class="icon-btn md:hidden"
                        type="button"
                        aria-controls="mobileMenu"
                        aria-expanded={menu.is_open().to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span aria-hidden="true">{"☰"}</span>
                        <span class="sr-only">{"Toggle navigation"}</span>
                    </button>
                </div>
                <nav
                    id="mobileMenu"
                    class={classes!("mobile-menu", (!menu.is_open()).then_some("hidden"))}
                    aria-label="Mobile"
                >
                    {nav_links("mobile-link")}
                </nav>
            </header>

            <main id="content">
                <section id="home" class="hero">
                    <div class="blob blob-one animate-blob" aria-hidden="true"></div>
                    <div class="blob blob-two animate-blob" aria-hidden="true"></div>
                    <div class="blob blob-three animate-blob" aria-hidden="true"></div>
                    <p class="eyebrow">{"UI/UX designer & front-end developer"}</p>
                    <h1>{"Hi, I'm Charles. I design interfaces people enjoy using."}</h1>
                    <div class="hero-actions">
                        <a class="btn-primary" href="#portfolio">{"View my work"}</a>
                        <a class="btn-ghost" href="#contact">{"Let's talk"}</a>
                    </div>
                </section>

                <RevealSection id="about" threshold={config.reveal_threshold}>
                    <h2>{"About"}</h2>
                    <p>
                        {"I help startups and small businesses turn ideas into clean, accessible products, from the first wireframe to the final hand-off."}
                    </p>
                    <ul class="stats">
                        { for STATS.iter().map(|stat| html! {
                            <li>
                                <Counter
                                    target={stat.target}
                                    suffix={stat.suffix}
                                    duration_ms={config.counter_duration_ms}
                                    threshold={config.counter_threshold}
                                />
                                <span class="muted">{stat.label}</span>
                            </li>
                        }) }
                    </ul>
                </RevealSection>

                <RevealSection id="skills" threshold={config.reveal_threshold}>
                    <h2>{"Skills"}</h2>
                    <div class="skill-grid">
                        { for (0..SKILLS.len()).map(|index| html! {
                            <SkillCard {index} threshold={config.reveal_threshold} />
                        }) }
                    </div>
                </RevealSection>

                <PortfolioSection config={config.clone()} />

                <RevealSection id="testimonials" threshold={config.reveal_threshold}>
                    <h2>{"What clients say"}</h2>
                    <TestimonialCarousel config={config.clone()} />
                </RevealSection>

                <RevealSection id="contact" threshold={config.reveal_threshold}>
                    <h2>{"Contact"}</h2>
                    <ContactSection config={config.clone()} />
                </RevealSection>
            </main>

            <footer class="site-footer">
                <p>{"© "}<span id="year">{current_year().to_string()}</span>{" Charles. All rights reserved."}</p>
            </footer>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(root) = skip_missing(element_by_id(MOUNT_POINT_ID)) else {
        log_event(LogLevel::Warn, "app.unmounted", json!({ "mount": MOUNT_POINT_ID }));
        return;
    };

    let config = read_site_config(&root);
    set_min_level(config.log_level);
    log_event(
        LogLevel::Info,
        "app.start",
        json!({
            "seeAllThreshold": config.see_all_threshold,
            "carouselIntervalMs": config.carousel_interval_ms,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config: Rc::new(config) }).render();
}
