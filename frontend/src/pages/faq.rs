use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FAQ;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    id: String,
    children: Children,
}

/// Collapsible question. Opens itself when the URL hash points at it.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    {
        let is_open = is_open.clone();
        let id = props.id.clone();

        use_effect_with_deps(
            move |_| {
                let check_hash = move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let target = format!("#{}", id);
                    if window.location().hash().ok().as_deref() != Some(target.as_str()) {
                        return;
                    }
                    is_open.set(true);
                    // Give the answer a moment to expand before scrolling.
                    let id = id.clone();
                    Timeout::new(100, move || {
                        if let Some(element) = web_sys::window()
                            .and_then(|w| w.document())
                            .and_then(|doc| doc.get_element_by_id(&id))
                        {
                            element.scroll_into_view_with_bool(true);
                        }
                    })
                    .forget();
                };

                check_hash();

                let callback = Closure::<dyn Fn()>::new(check_hash);
                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "hashchange",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("card", "faq-item", is_open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq" class="page-section">
            <h2>{"FAQ"}</h2>
            <div class="two-column faq-grid">
                { for FAQ.iter().map(|entry| html! {
                    <FaqItem question={entry.question} id={entry.id}>
                        <p>{entry.answer}</p>
                    </FaqItem>
                }) }
            </div>
        </section>
    }
}
