use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, Element, Event, EventTarget, File, FilePropertyBag, HtmlInputElement};

use crate::preview::PreviewHooks;

const WAIT_LIMIT_MS: f64 = 2000.0;

pub(crate) fn fixture(html: &str) -> Element {
    console_error_panic_hook::set_once();
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let root = document.create_element("div").expect("create fixture root");
    root.set_inner_html(html);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append fixture root");
    root
}

pub(crate) fn make_file(name: &str, mime: &str, bytes: &[u8]) -> File {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).buffer());
    let options = FilePropertyBag::new();
    options.set_type(mime);
    File::new_with_u8_array_sequence_and_options(&parts, name, &options).expect("create file")
}

pub(crate) fn select_files(input: &HtmlInputElement, files: &[File]) {
    let transfer = DataTransfer::new().expect("create data transfer");
    for file in files {
        transfer.items().add_with_file(file).expect("add file");
    }
    input.set_files(transfer.files().as_ref());
    dispatch(input, "change");
}

pub(crate) fn dispatch(target: &EventTarget, event_type: &str) {
    let event = Event::new(event_type).expect("create event");
    target.dispatch_event(&event).expect("dispatch event");
}

pub(crate) fn element<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .expect("query selector")
        .unwrap_or_else(|| panic!("{selector} missing from fixture"))
        .dyn_into::<T>()
        .unwrap_or_else(|_| panic!("{selector} has unexpected type"))
}

pub(crate) fn recording_hooks() -> (PreviewHooks, Rc<RefCell<Vec<String>>>) {
    let alerts = Rc::new(RefCell::new(Vec::new()));
    let recorded = alerts.clone();
    let hooks = PreviewHooks {
        on_reject: Rc::new(move |message| recorded.borrow_mut().push(message.to_string())),
    };
    (hooks, alerts)
}

pub(crate) async fn wait_until<F: Fn() -> bool>(condition: F) {
    let start = Date::now();
    while !condition() {
        if Date::now() - start > WAIT_LIMIT_MS {
            panic!("condition not met after {WAIT_LIMIT_MS}ms");
        }
        TimeoutFuture::new(10).await;
    }
}

/// Gives pending reads a chance to finish before asserting nothing changed.
pub(crate) async fn settle() {
    TimeoutFuture::new(50).await;
}
