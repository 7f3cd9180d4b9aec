use gloo::console;
use web_sys::{Document, UrlSearchParams};

use smart_doc_gen_core::config::CONFIG_SCRIPT_ID;
use smart_doc_gen_core::{ConfigError, PageConfig, PageConfigOverrides};

const BODY_ATTRIBUTES: &[(&str, &str)] = &[
    ("layout", "data-layout"),
    ("read-ordering", "data-read-ordering"),
];
const QUERY_KEYS: &[&str] = &["layout", "read_ordering"];

/// Builds the page configuration from, in increasing priority, the defaults,
/// the embedded JSON config, `<body data-*>` attributes and the query string.
pub(crate) fn load_page_config(document: &Document, search: &str) -> PageConfig {
    let mut config = PageConfig::default();
    match embedded_overrides(document) {
        Ok(Some(overrides)) => apply(&mut config, "embedded", overrides),
        Ok(None) => {}
        Err(err) => console::warn!("config: embedded ignored", err.to_string()),
    }
    apply(&mut config, "body", body_overrides(document));
    apply(&mut config, "query", query_overrides(search));
    config
}

fn apply(config: &mut PageConfig, source: &str, overrides: PageConfigOverrides) {
    if overrides.is_empty() {
        return;
    }
    for err in config.apply(overrides) {
        console::warn!("config: invalid value", source.to_string(), err.to_string());
    }
}

fn embedded_overrides(document: &Document) -> Result<Option<PageConfigOverrides>, ConfigError> {
    let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return Ok(None);
    };
    let raw = script.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    PageConfigOverrides::from_json(&raw).map(Some)
}

fn body_overrides(document: &Document) -> PageConfigOverrides {
    let Some(body) = document.body() else {
        return PageConfigOverrides::default();
    };
    PageConfigOverrides::from_pairs(
        BODY_ATTRIBUTES
            .iter()
            .filter_map(|(key, attribute)| Some((*key, body.get_attribute(attribute)?))),
    )
}

fn query_overrides(search: &str) -> PageConfigOverrides {
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return PageConfigOverrides::default();
    };
    PageConfigOverrides::from_pairs(
        QUERY_KEYS
            .iter()
            .filter_map(|key| Some((*key, params.get(key)?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_doc_gen_core::{PageLayout, ReadOrdering};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
    }

    #[wasm_bindgen_test]
    fn query_string_overrides_defaults() {
        let config = load_page_config(&document(), "?layout=single&read_ordering=latest-selection");
        assert_eq!(config.layout, PageLayout::Single);
        assert_eq!(config.read_ordering, ReadOrdering::LatestSelection);
    }

    #[wasm_bindgen_test]
    fn invalid_query_values_keep_defaults() {
        let config = load_page_config(&document(), "?layout=grid&read_ordering=");
        assert_eq!(config.layout, PageLayout::Auto);
        assert_eq!(config.read_ordering, ReadOrdering::LastCompletion);
    }

    #[wasm_bindgen_test]
    fn body_attributes_sit_below_query() {
        let document = document();
        let body = document.body().expect("body available");
        body.set_attribute("data-layout", "dual").expect("set layout");
        body.set_attribute("data-read-ordering", "latest-selection")
            .expect("set ordering");

        let config = load_page_config(&document, "?layout=single");

        body.remove_attribute("data-layout").expect("clear layout");
        body.remove_attribute("data-read-ordering").expect("clear ordering");
        assert_eq!(config.layout, PageLayout::Single);
        assert_eq!(config.read_ordering, ReadOrdering::LatestSelection);
    }

    #[wasm_bindgen_test]
    fn embedded_json_sets_selectors() {
        let document = document();
        let script = document.create_element("script").expect("create script");
        script.set_id(CONFIG_SCRIPT_ID);
        script.set_attribute("type", "application/json").expect("set type");
        script.set_text_content(Some(
            r##"{
                "invalid_type_message": "Choose an image",
                "selectors": { "loading": "#spinner" }
            }"##,
        ));
        document
            .body()
            .expect("body available")
            .append_child(&script)
            .expect("append script");

        let config = load_page_config(&document, "");

        script.remove();
        assert_eq!(config.invalid_type_message, "Choose an image");
        assert_eq!(config.selectors.loading, "#spinner");
        assert_eq!(config.layout, PageLayout::Auto);
    }
}
