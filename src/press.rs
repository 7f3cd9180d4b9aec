use gloo::events::EventListener;
use web_sys::HtmlElement;

use smart_doc_gen_core::PressEvent;

use crate::dom::set_style;

pub(crate) fn bind_press_feedback(buttons: &[HtmlElement]) -> Vec<EventListener> {
    buttons
        .iter()
        .flat_map(|button| {
            PressEvent::ALL.into_iter().map(move |press| {
                let target = button.clone();
                EventListener::new(button, press.event_type(), move |_event| {
                    set_style(&target, "transform", &press.transform());
                })
            })
        })
        .collect()
}
