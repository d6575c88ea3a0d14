use std::time::Duration;

use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// API root; endpoint paths are joined below it.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` leaves slow requests pending until the server answers.
    pub request_timeout: Option<Duration>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

impl GatewaySettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Parses the API root, making sure it ends with `/`.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("{raw} cannot be used as an API root"),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
