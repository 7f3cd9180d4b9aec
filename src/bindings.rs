use gloo::console;
use gloo::events::EventListener;
use web_sys::Element;

use smart_doc_gen_core::PageConfig;

use crate::dom::{resolve_elements, PageElements};
use crate::loading::bind_loading_indicator;
use crate::press::bind_press_feedback;
use crate::preview::{bind_image_preview, PreviewHooks, PreviewOptions};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct MountSummary {
    pub(crate) previews: usize,
    pub(crate) loading: bool,
    pub(crate) buttons: usize,
}

/// Every listener attached to the page. Dropping it detaches them all.
pub(crate) struct PageBindings {
    listeners: Vec<EventListener>,
    summary: MountSummary,
}

impl PageBindings {
    pub(crate) fn summary(&self) -> MountSummary {
        self.summary
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

pub(crate) fn mount(root: &Element, config: &PageConfig, hooks: PreviewHooks) -> PageBindings {
    let elements = resolve_elements(root, config);
    let bindings = attach(elements, config, hooks);
    let summary = bindings.summary();
    console::log!(
        "bindings: mounted",
        config.layout.to_string(),
        summary.previews as u32,
        summary.loading,
        summary.buttons as u32,
        bindings.listener_count() as u32
    );
    bindings
}

fn attach(elements: PageElements, config: &PageConfig, hooks: PreviewHooks) -> PageBindings {
    let PageElements {
        previews,
        form,
        loading,
        buttons,
    } = elements;
    let mut listeners = Vec::new();
    let mut summary = MountSummary::default();

    let options = PreviewOptions {
        ordering: config.read_ordering,
        invalid_type_message: config.invalid_type_message.clone(),
    };
    for target in previews {
        listeners.push(bind_image_preview(target, options.clone(), hooks.clone()));
        summary.previews += 1;
    }

    if let (Some(form), Some(indicator)) = (form, loading) {
        listeners.push(bind_loading_indicator(&form, indicator));
        summary.loading = true;
    }

    summary.buttons = buttons.len();
    listeners.extend(bind_press_feedback(&buttons));

    PageBindings { listeners, summary }
}
