use crate::carousel::Carousel;
use crate::config::SiteConfig;
use crate::content::TESTIMONIALS;
use crate::telemetry::{log_event, LogLevel};
use gloo_timers::callback::Interval;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

type SharedCarousel = Rc<RefCell<Option<Carousel>>>;
type TimerSlot = Rc<RefCell<Option<Interval>>>;

fn restart_timer(
    carousel: &SharedCarousel,
    timer: &TimerSlot,
    force: &UseForceUpdateHandle,
    period_ms: u32,
) {
    let Some(epoch) = carousel.borrow().as_ref().map(Carousel::epoch) else {
        return;
    };

    let carousel = carousel.clone();
    let force = force.clone();
    let interval = Interval::new(period_ms, move || {
        let advanced = carousel
            .borrow_mut()
            .as_mut()
            .is_some_and(|carousel| carousel.tick(epoch));
        if advanced {
            force.force_update();
        }
    });

    *timer.borrow_mut() = Some(interval);
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &CarouselProps) -> Html {
    let period_ms = props.config.carousel_interval_ms;
    let carousel = use_mut_ref(|| Carousel::new(TESTIMONIALS.len()));
    let timer = use_mut_ref(|| None::<Interval>);
    let force = use_force_update();

    {
        let carousel = carousel.clone();
        let timer = timer.clone();
        let force = force.clone();
        use_effect_with((), move |_| {
            restart_timer(&carousel, &timer, &force, period_ms);
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    let Some(view) = carousel.borrow().clone() else {
        return html! {};
    };

    let dots = (0..view.len()).map(|dot| {
        let onclick = {
            let carousel = carousel.clone();
            let timer = timer.clone();
            let force = force.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(active) = carousel.borrow_mut().as_mut() {
                    active.select_slide(dot as i64);
                    log_event(
                        LogLevel::Info,
                        "carousel.select",
                        json!({ "index": active.active_index() }),
                    );
                }
                force.force_update();
                restart_timer(&carousel, &timer, &force, period_ms);
            })
        };

        html! {
            <button
                class={classes!("dot", view.is_active(dot).then_some("active"))}
                type="button"
                data-index={dot.to_string()}
                aria-label={format!("Show testimonial {}", dot + 1)}
                {onclick}
            />
        }
    });

    html! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div
                    id="carousel"
                    class="carousel-track"
                    style={format!("transform: {}", view.track_transform())}
                >
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <figure class="slide">
                            <blockquote>{testimonial.quote}</blockquote>
                            <figcaption>
                                <strong>{testimonial.author}</strong>
                                <span class="muted">{testimonial.role}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
            <div class="dots">{ for dots }</div>
        </div>
    }
}
