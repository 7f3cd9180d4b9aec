use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

const DATA_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes bytes as `data:<mime>;base64,<payload>`, the same shape
/// `FileReader.readAsDataURL` produces.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    let payload = STANDARD.encode(bytes);
    let capacity =
        DATA_SCHEME.len() + mime.len() + BASE64_MARKER.len() + 1 + payload.len();
    let mut url = String::with_capacity(capacity);
    url.push_str(DATA_SCHEME);
    url.push_str(mime);
    url.push_str(BASE64_MARKER);
    url.push(',');
    url.push_str(&payload);
    url
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    pub fn parse(value: &str) -> Result<Self, DataUrlError> {
        let rest = value
            .strip_prefix(DATA_SCHEME)
            .ok_or(DataUrlError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingPayload)?;
        let mime = header
            .strip_suffix(BASE64_MARKER)
            .ok_or(DataUrlError::NotBase64)?;
        let bytes = STANDARD
            .decode(payload.as_bytes())
            .map_err(|err| DataUrlError::InvalidPayload(err.to_string()))?;
        Ok(Self {
            mime: mime.to_string(),
            bytes,
        })
    }
}

impl std::str::FromStr for DataUrl {
    type Err = DataUrlError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataUrlError {
    MissingScheme,
    MissingPayload,
    NotBase64,
    InvalidPayload(String),
}

impl fmt::Display for DataUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataUrlError::MissingScheme => write!(f, "data url must start with {DATA_SCHEME}"),
            DataUrlError::MissingPayload => write!(f, "data url has no payload separator"),
            DataUrlError::NotBase64 => write!(f, "data url is not base64 encoded"),
            DataUrlError::InvalidPayload(message) => {
                write!(f, "invalid base64 payload: {message}")
            }
        }
    }
}

impl std::error::Error for DataUrlError {}
