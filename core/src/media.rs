use std::fmt;

pub const IMAGE_MIME_PREFIX: &str = "image/";

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with(IMAGE_MIME_PREFIX)
}

/// What the browser reports about the first selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NotAnImage { name: String, mime: String },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NotAnImage { name, mime } if mime.is_empty() => {
                write!(f, "{name} has no declared media type")
            }
            SelectionError::NotAnImage { name, mime } => {
                write!(f, "{name} is {mime}, expected {IMAGE_MIME_PREFIX}*")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Ignore,
    Reject(SelectionError),
    Read(SelectedFile),
}

/// Decides what a `change` event on a preview input should do. Only the
/// first file of a selection is considered.
pub fn evaluate_selection<I>(files: I) -> SelectionOutcome
where
    I: IntoIterator<Item = SelectedFile>,
{
    let Some(file) = files.into_iter().next() else {
        return SelectionOutcome::Ignore;
    };
    if !is_image_mime(&file.mime) {
        return SelectionOutcome::Reject(SelectionError::NotAnImage {
            name: file.name,
            mime: file.mime,
        });
    }
    SelectionOutcome::Read(file)
}
