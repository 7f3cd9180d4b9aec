use gloo::events::EventListener;
use web_sys::{HtmlElement, HtmlFormElement};

use smart_doc_gen_core::LOADING_DISPLAY;

use crate::dom::set_style;

/// Shows the indicator when the form submits. The submission itself is left
/// alone and the indicator stays up until the next page replaces it.
pub(crate) fn bind_loading_indicator(
    form: &HtmlFormElement,
    indicator: HtmlElement,
) -> EventListener {
    EventListener::new(form, "submit", move |_event| {
        set_style(&indicator, "display", LOADING_DISPLAY);
    })
}
