use crate::config::SiteConfig;
use crate::contact::{ContactDraft, ContactForm, Step};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const SUCCESS_CLASS: &str = "is-sent";
const BUSY_CLASS: &str = "opacity-70";

fn run_submission(
    form: Rc<RefCell<ContactForm>>,
    force: UseForceUpdateHandle,
    first_delay_ms: u32,
) {
    spawn_local(async move {
        let mut delay_ms = first_delay_ms;
        loop {
            TimeoutFuture::new(delay_ms).await;
            let step = form.borrow_mut().advance();
            force.force_update();

            match step {
                Step::Wait(next) => delay_ms = next,
                Step::Reset | Step::Ignored => break,
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let (sending_ms, sent_ms) = (props.config.form_sending_ms, props.config.form_sent_ms);
    let form = use_mut_ref(move || ContactForm::new(sending_ms, sent_ms));
    let force = use_force_update();

    let onsubmit = {
        let form = form.clone();
        let force = force.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Step::Wait(delay_ms) = form.borrow_mut().submit() else {
                return;
            };
            force.force_update();
            run_submission(form.clone(), force.clone(), delay_ms);
        })
    };

    let on_input = |update: fn(&mut ContactDraft, String)| {
        let form = form.clone();
        let force = force.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| event.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
                .unwrap_or_default();
            update(form.borrow_mut().draft_mut(), value);
            force.force_update();
        })
    };

    let view = form.borrow().clone();
    let draft = view.draft().clone();
    let disabled = view.trigger_disabled();

    html! {
        <form id="contactForm" class="contact-form" {onsubmit}>
            <label>
                <span>{"Name"}</span>
                <input
                    name="name"
                    type="text"
                    required={true}
                    value={draft.name}
                    oninput={on_input(|draft, value| draft.name = value)}
                />
            </label>
            <label>
                <span>{"Email"}</span>
                <input
                    name="email"
                    type="email"
                    required={true}
                    value={draft.email}
                    oninput={on_input(|draft, value| draft.email = value)}
                />
            </label>
            <label>
                <span>{"Message"}</span>
                <textarea
                    name="message"
                    rows="5"
                    required={true}
                    value={draft.message}
                    oninput={on_input(|draft, value| draft.message = value)}
                />
            </label>
            <button
                id="sendBtn"
                type="submit"
                class={classes!(
                    "send-btn",
                    disabled.then_some(BUSY_CLASS),
                    view.succeeded().then_some(SUCCESS_CLASS),
                )}
                {disabled}
            >
                <span class="send-label">{view.label()}</span>
            </button>
        </form>
    }
}
