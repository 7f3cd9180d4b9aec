use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlImageElement, HtmlInputElement};

use smart_doc_gen_core::{
    encode_data_url, evaluate_selection, Completion, ReadOrdering, ReadSequencer, SelectedFile,
    SelectionOutcome, PREVIEW_DISPLAY,
};

use crate::dom::{js_err, set_style};

pub(crate) struct PreviewTarget {
    pub(crate) input: HtmlInputElement,
    pub(crate) image: HtmlImageElement,
}

#[derive(Clone)]
pub(crate) struct PreviewHooks {
    pub(crate) on_reject: Rc<dyn Fn(&str)>,
}

impl PreviewHooks {
    /// Blocking `window.alert`, as the upload page expects.
    pub(crate) fn alert() -> Self {
        Self {
            on_reject: Rc::new(|message| gloo::dialogs::alert(message)),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct PreviewOptions {
    pub(crate) ordering: ReadOrdering,
    pub(crate) invalid_type_message: String,
}

pub(crate) fn bind_image_preview(
    target: PreviewTarget,
    options: PreviewOptions,
    hooks: PreviewHooks,
) -> EventListener {
    let PreviewTarget { input, image } = target;
    let sequencer = Rc::new(RefCell::new(ReadSequencer::new(options.ordering)));
    let source = input.clone();
    EventListener::new(&input, "change", move |_event| {
        let file = first_file(&source);
        match evaluate_selection(file.as_ref().map(describe_file)) {
            SelectionOutcome::Ignore => {}
            SelectionOutcome::Reject(err) => {
                console::log!("preview: rejected", err.to_string());
                (hooks.on_reject)(&options.invalid_type_message);
            }
            SelectionOutcome::Read(selected) => {
                let Some(file) = file else {
                    return;
                };
                let ticket = sequencer.borrow_mut().begin();
                let sequencer = sequencer.clone();
                let image = image.clone();
                spawn_local(async move {
                    let bytes = match read_file_bytes(&file).await {
                        Ok(bytes) => bytes,
                        Err(message) => {
                            console::warn!("preview: read failed", selected.name, message);
                            return;
                        }
                    };
                    let completion = sequencer.borrow_mut().complete(ticket);
                    if let Completion::Stale { ticket, newest } = completion {
                        console::log!("preview: stale read dropped", ticket.0, newest.0);
                        return;
                    }
                    show_preview(&image, &encode_data_url(&selected.mime, &bytes));
                });
            }
        }
    })
}

fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}

fn describe_file(file: &File) -> SelectedFile {
    SelectedFile {
        name: file.name(),
        mime: file.type_(),
    }
}

async fn read_file_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(js_err)?;
    let array = js_sys::Uint8Array::new(&buffer);
    Ok(array.to_vec())
}

fn show_preview(image: &HtmlImageElement, url: &str) {
    image.set_src(url);
    set_style(image, "display", PREVIEW_DISPLAY);
}
