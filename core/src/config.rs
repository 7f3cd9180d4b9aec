use std::fmt;

use serde::Deserialize;

use crate::sequence::ReadOrdering;

pub const DEFAULT_INVALID_TYPE_MESSAGE: &str = "画像ファイルを選んでください。";

pub const SINGLE_INPUT_SELECTOR: &str = "input[type=\"file\"]";
pub const SINGLE_IMAGE_SELECTOR: &str = ".image-preview img";
pub const FORM_SELECTOR: &str = "form";
pub const LOADING_SELECTOR: &str = "#loading";
pub const BUTTON_SELECTOR: &str = "button, .btn-submit, .btn-download";

pub const CONFIG_SCRIPT_ID: &str = "page-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PreviewPair {
    pub input: String,
    pub image: String,
}

impl PreviewPair {
    pub fn new(input: &str, image: &str) -> Self {
        Self {
            input: input.to_string(),
            image: image.to_string(),
        }
    }
}

/// Which preview pairs a page carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageLayout {
    /// Dual pairs that exist on the page, else the single pair.
    #[default]
    Auto,
    Single,
    Dual,
}

impl PageLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            PageLayout::Auto => "auto",
            PageLayout::Single => "single",
            PageLayout::Dual => "dual",
        }
    }
}

impl fmt::Display for PageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageLayout {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "auto" => Ok(PageLayout::Auto),
            "single" => Ok(PageLayout::Single),
            "dual" => Ok(PageLayout::Dual),
            other => Err(ConfigError::UnknownLayout(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSelectors {
    pub single_preview: PreviewPair,
    pub dual_previews: Vec<PreviewPair>,
    pub form: String,
    pub loading: String,
    pub buttons: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            single_preview: PreviewPair::new(SINGLE_INPUT_SELECTOR, SINGLE_IMAGE_SELECTOR),
            dual_previews: vec![
                PreviewPair::new("#imageFile", "#previewImg1"),
                PreviewPair::new("#imageFile2", "#previewImg2"),
            ],
            form: FORM_SELECTOR.to_string(),
            loading: LOADING_SELECTOR.to_string(),
            buttons: BUTTON_SELECTOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub layout: PageLayout,
    pub read_ordering: ReadOrdering,
    pub invalid_type_message: String,
    pub selectors: PageSelectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            layout: PageLayout::default(),
            read_ordering: ReadOrdering::default(),
            invalid_type_message: DEFAULT_INVALID_TYPE_MESSAGE.to_string(),
            selectors: PageSelectors::default(),
        }
    }
}

impl PageConfig {
    /// Picks the preview pairs to bind. `exists` reports whether both
    /// selectors of a pair match an element on the page.
    pub fn preview_pairs<F>(&self, exists: F) -> Vec<PreviewPair>
    where
        F: Fn(&PreviewPair) -> bool,
    {
        let single = &self.selectors.single_preview;
        let dual = self.selectors.dual_previews.iter();
        match self.layout {
            PageLayout::Single => exists(single).then(|| single.clone()).into_iter().collect(),
            PageLayout::Dual => dual.filter(|pair| exists(pair)).cloned().collect(),
            PageLayout::Auto => {
                let pairs: Vec<PreviewPair> = dual.filter(|pair| exists(pair)).cloned().collect();
                if !pairs.is_empty() {
                    return pairs;
                }
                exists(single).then(|| single.clone()).into_iter().collect()
            }
        }
    }

    /// Applies overrides on top of the current values. Invalid entries are
    /// skipped and returned so the caller can report them.
    pub fn apply(&mut self, overrides: PageConfigOverrides) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(layout) = overrides.layout {
            match layout.parse::<PageLayout>() {
                Ok(layout) => self.layout = layout,
                Err(err) => errors.push(err),
            }
        }
        if let Some(ordering) = overrides.read_ordering {
            match ordering.parse::<ReadOrdering>() {
                Ok(ordering) => self.read_ordering = ordering,
                Err(err) => errors.push(err),
            }
        }
        if let Some(message) = overrides.invalid_type_message {
            if message.trim().is_empty() {
                errors.push(ConfigError::EmptyValue("invalid_type_message"));
            } else {
                self.invalid_type_message = message;
            }
        }
        if let Some(selectors) = overrides.selectors {
            selectors.apply(&mut self.selectors, &mut errors);
        }
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfigOverrides {
    pub layout: Option<String>,
    pub read_ordering: Option<String>,
    pub invalid_type_message: Option<String>,
    pub selectors: Option<SelectorOverrides>,
}

impl PageConfigOverrides {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::InvalidJson(err.to_string()))
    }

    /// Reads `layout` and `read-ordering` style key/value pairs, as found in
    /// `data-*` attributes or the query string. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut overrides = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "layout" => overrides.layout = Some(value.into()),
                "read_ordering" | "read-ordering" | "readOrdering" => {
                    overrides.read_ordering = Some(value.into())
                }
                _ => {}
            }
        }
        overrides
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorOverrides {
    pub single_preview: Option<PreviewPair>,
    pub dual_previews: Option<Vec<PreviewPair>>,
    pub form: Option<String>,
    pub loading: Option<String>,
    pub buttons: Option<String>,
}

impl SelectorOverrides {
    fn apply(self, selectors: &mut PageSelectors, errors: &mut Vec<ConfigError>) {
        if let Some(pair) = self.single_preview {
            match validate_pair(pair) {
                Ok(pair) => selectors.single_preview = pair,
                Err(err) => errors.push(err),
            }
        }
        if let Some(pairs) = self.dual_previews {
            let mut valid = Vec::with_capacity(pairs.len());
            for pair in pairs {
                match validate_pair(pair) {
                    Ok(pair) => valid.push(pair),
                    Err(err) => errors.push(err),
                }
            }
            selectors.dual_previews = valid;
        }
        for (field, value, slot) in [
            ("selectors.form", self.form, &mut selectors.form),
            ("selectors.loading", self.loading, &mut selectors.loading),
            ("selectors.buttons", self.buttons, &mut selectors.buttons),
        ] {
            let Some(value) = value else {
                continue;
            };
            if value.trim().is_empty() {
                errors.push(ConfigError::EmptyValue(field));
            } else {
                *slot = value;
            }
        }
    }
}

fn validate_pair(pair: PreviewPair) -> Result<PreviewPair, ConfigError> {
    if pair.input.trim().is_empty() {
        return Err(ConfigError::EmptyValue("preview input selector"));
    }
    if pair.image.trim().is_empty() {
        return Err(ConfigError::EmptyValue("preview image selector"));
    }
    Ok(pair)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownLayout(String),
    UnknownReadOrdering(String),
    EmptyValue(&'static str),
    InvalidJson(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownLayout(value) => {
                write!(f, "unknown layout '{value}' (expected auto, single or dual)")
            }
            ConfigError::UnknownReadOrdering(value) => write!(
                f,
                "unknown read ordering '{value}' (expected last-completion or latest-selection)"
            ),
            ConfigError::EmptyValue(field) => write!(f, "{field} must not be empty"),
            ConfigError::InvalidJson(message) => write!(f, "invalid config json: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
