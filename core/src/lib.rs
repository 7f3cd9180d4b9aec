pub mod config;
pub mod data_url;
pub mod media;
pub mod sequence;
pub mod style;

pub use config::{ConfigError, PageConfig, PageConfigOverrides, PageLayout, PreviewPair};
pub use data_url::{encode_data_url, DataUrl, DataUrlError};
pub use media::{evaluate_selection, is_image_mime, SelectedFile, SelectionError, SelectionOutcome};
pub use sequence::{Completion, ReadOrdering, ReadSequencer, ReadTicket};
pub use style::{PressEvent, LOADING_DISPLAY, PREVIEW_DISPLAY};
