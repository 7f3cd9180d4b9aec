mod bindings;
mod dom;
mod loading;
mod page_config;
mod press;
mod preview;
#[cfg(test)]
mod test_support;

use std::cell::RefCell;

use gloo::console;
use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::bindings::PageBindings;
use crate::preview::PreviewHooks;

thread_local! {
    static PAGE_BINDINGS: RefCell<Option<PageBindings>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        console::warn!("boot: document unavailable");
        return;
    };
    on_ready(&document, |document| {
        let Some(root) = document.document_element() else {
            console::warn!("boot: document element missing");
            return;
        };
        let bindings = start(document, &root, PreviewHooks::alert());
        PAGE_BINDINGS.with(|slot| {
            *slot.borrow_mut() = Some(bindings);
        });
    });
}

/// Runs `run` once the document has been parsed.
fn on_ready<F>(document: &Document, run: F)
where
    F: FnOnce(&Document) + 'static,
{
    if document.ready_state() == "loading" {
        defer_until_loaded(document, run).forget();
    } else {
        run(document);
    }
}

fn defer_until_loaded<F>(document: &Document, run: F) -> EventListener
where
    F: FnOnce(&Document) + 'static,
{
    let ready = document.clone();
    EventListener::once(document, "DOMContentLoaded", move |_event| run(&ready))
}

fn start(document: &Document, root: &Element, hooks: PreviewHooks) -> PageBindings {
    let search = document
        .location()
        .and_then(|location| location.search().ok())
        .unwrap_or_default();
    let config = page_config::load_page_config(document, &search);
    bindings::mount(root, &config, hooks)
}
