use super::{open_external, scroll_into_view};
use crate::config::SiteConfig;
use crate::content::{portfolio_cards, FILTER_TABS, PROJECTS};
use crate::motion::REVEAL_CLASS;
use crate::portfolio::{ExpansionPlan, PortfolioFilter, ScrollTarget, Timing, ALL_CATEGORIES};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::ScrollLogicalPosition;
use yew::prelude::*;

use super::observe::use_reveal;

const SECTION_ID: &str = "portfolio";

fn card_id(index: usize) -> String {
    format!("project-{index}")
}

fn schedule_plan(
    plan: ExpansionPlan,
    filter: Rc<RefCell<PortfolioFilter>>,
    force: UseForceUpdateHandle,
) {
    let ExpansionPlan {
        generation,
        reveals,
        scroll,
        scroll_delay_ms,
    } = plan;

    for reveal in reveals {
        let filter = filter.clone();
        let force = force.clone();
        Timeout::new(reveal.delay_ms, move || {
            if filter.borrow_mut().reveal(reveal.card, generation) {
                force.force_update();
            }
        })
        .forget();
    }

    let scroll = move || {
        if !filter.borrow().is_current(generation) {
            return;
        }

        match scroll {
            ScrollTarget::Card(index) => {
                scroll_into_view(&card_id(index), ScrollLogicalPosition::Center)
            }
            ScrollTarget::SectionStart => {
                scroll_into_view(SECTION_ID, ScrollLogicalPosition::Start)
            }
        }
    };

    if scroll_delay_ms == 0 {
        scroll();
    } else {
        Timeout::new(scroll_delay_ms, scroll).forget();
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
    visible: bool,
    threshold: f64,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.threshold);
    let project = &PROJECTS[props.index];

    html! {
        <article
            ref={node}
            id={card_id(props.index)}
            class={classes!(
                "portfolio-item",
                project.overflow.then_some("hidden-more"),
                (project.overflow && props.visible).then_some("show"),
                revealed.then_some(REVEAL_CLASS),
            )}
            data-category={project.category}
            style={(!props.visible).then_some("display: none")}
        >
            <img src={project.image} alt={project.title} loading="lazy" />
            <div class="portfolio-copy">
                <h3>{project.title}</h3>
                <p class="muted">{project.summary}</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(PortfolioSection)]
pub fn portfolio_section(props: &PortfolioProps) -> Html {
    let config = props.config.clone();
    let filter = {
        let timing = Timing {
            threshold: config.see_all_threshold,
            stagger_ms: config.reveal_stagger_ms,
            scroll_delay_ms: config.reveal_scroll_delay_ms,
        };
        use_mut_ref(move || {
            let mut filter = PortfolioFilter::new(portfolio_cards(), timing);
            filter.select_category(ALL_CATEGORIES);
            filter
        })
    };
    let force = use_force_update();
    let section = use_node_ref();
    let section_revealed = use_reveal(section.clone(), config.reveal_threshold);

    let on_toggle = {
        let filter = filter.clone();
        let force = force.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(plan) = filter.borrow_mut().toggle_expansion() else {
                return;
            };
            force.force_update();
            schedule_plan(plan, filter.clone(), force.clone());
        })
    };

    let on_more_designs = {
        let url = config.more_designs_url.clone();
        Callback::from(move |_: MouseEvent| open_external(&url))
    };

    let (visible, active_tabs, see_all_visible, expanded, label) = {
        let view = filter.borrow();
        let visible: Vec<bool> = (0..PROJECTS.len()).map(|index| view.is_visible(index)).collect();
        let active_tabs: Vec<bool> = FILTER_TABS
            .iter()
            .map(|tab| view.is_active_tab(tab.filter))
            .collect();
        (
            visible,
            active_tabs,
            view.expand_control_visible(),
            view.state().expanded,
            view.label(),
        )
    };

    let tabs = FILTER_TABS.iter().zip(active_tabs).map(|(tab, active)| {
        let onclick = {
            let filter = filter.clone();
            let force = force.clone();
            let category = tab.filter;
            Callback::from(move |_: MouseEvent| {
                filter.borrow_mut().select_category(category);
                force.force_update();
            })
        };

        html! {
            <button
                class={classes!("tab", active.then_some("active"))}
                type="button"
                data-filter={tab.filter}
                {onclick}
            >
                {tab.label}
            </button>
        }
    });

    html! {
        <section
            ref={section}
            id={SECTION_ID}
            class={classes!("section", section_revealed.then_some(REVEAL_CLASS))}
        >
            <h2>{"Portfolio"}</h2>
            <div class="tabs" role="tablist">{ for tabs }</div>

            <div class="portfolio-grid">
                { for (0..PROJECTS.len()).map(|index| html! {
                    <ProjectCard
                        key={index}
                        {index}
                        visible={visible[index]}
                        threshold={config.reveal_threshold}
                    />
                }) }
                <div
                    class="more-designs-container"
                    role="link"
                    tabindex="0"
                    onclick={on_more_designs}
                >
                    <p>{"More designs"}</p>
                    <span class="muted">{"Browse the full UI gallery ↗"}</span>
                </div>
            </div>

            <div
                id="seeAllContainer"
                class={classes!("see-all-container", (!see_all_visible).then_some("hidden"))}
            >
                <button
                    id="seeAllBtn"
                    class={classes!("see-all-btn", expanded.then_some("expanded"))}
                    type="button"
                    onclick={on_toggle}
                >
                    <span class="see-all-text">{label}</span>
                </button>
            </div>
        </section>
    }
}
