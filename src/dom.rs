use gloo::console;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement};

use smart_doc_gen_core::PageConfig;

use crate::preview::PreviewTarget;

/// Element handles resolved once at startup. Every binding works on these
/// handles only and never queries the page itself.
pub(crate) struct PageElements {
    pub(crate) previews: Vec<PreviewTarget>,
    pub(crate) form: Option<HtmlFormElement>,
    pub(crate) loading: Option<HtmlElement>,
    pub(crate) buttons: Vec<HtmlElement>,
}

pub(crate) fn resolve_elements(root: &Element, config: &PageConfig) -> PageElements {
    let previews = config
        .preview_pairs(|pair| {
            query::<HtmlInputElement>(root, &pair.input).is_some()
                && query::<HtmlImageElement>(root, &pair.image).is_some()
        })
        .into_iter()
        .filter_map(|pair| {
            Some(PreviewTarget {
                input: query(root, &pair.input)?,
                image: query(root, &pair.image)?,
            })
        })
        .collect();
    let selectors = &config.selectors;
    PageElements {
        previews,
        form: query(root, &selectors.form),
        loading: query(root, &selectors.loading),
        buttons: query_all(root, &selectors.buttons),
    }
}

pub(crate) fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    match root.query_selector(selector) {
        Ok(Some(element)) => element.dyn_into::<T>().ok(),
        Ok(None) => None,
        Err(err) => {
            console::warn!("dom: invalid selector", selector.to_string(), js_err(err));
            None
        }
    }
}

pub(crate) fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let nodes = match root.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            console::warn!("dom: invalid selector", selector.to_string(), js_err(err));
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        console::warn!("dom: style update failed", property.to_string(), js_err(err));
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
