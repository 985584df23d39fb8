use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Url;
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use super::{EditionSource, FetchError};
use crate::dates::format_date;
use crate::edition::Edition;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches editions from the edition API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    /// Create a source for `base_url` (scheme and host, optional path prefix).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] when the base URL is empty or not
    /// absolute, and [`FetchError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        // Validate once up front so fetches only fail on the network.
        edition_url(&base_url, "0", NaiveDate::default())?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("broadsheet/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl EditionSource for HttpSource {
    fn fetch(&self, region_id: &str, date: NaiveDate) -> Result<Edition, FetchError> {
        let url = edition_url(&self.base_url, region_id, date)?;
        debug!(%url, "fetching edition");

        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        if let Some(err) = classify_status(status) {
            warn!(status, region_id, %date, "edition request rejected");
            return Err(err);
        }

        let body = response.text()?;
        let edition = Edition::from_json(&body)?;
        info!(region_id, %date, title = %edition.title, "edition loaded");
        Ok(edition)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Build `{base}/api/edition?region_id=..&date=..` with encoded parameters.
///
/// # Errors
///
/// Returns [`FetchError::InvalidBaseUrl`] when `base_url` is empty or does not
/// parse as an absolute URL.
pub fn edition_url(base_url: &str, region_id: &str, date: NaiveDate) -> Result<Url, FetchError> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "no API base URL configured (use --api-base or BROADSHEET_API_BASE_URL)"
                .to_string(),
        });
    }
    Url::parse_with_params(
        &format!("{base}/api/edition"),
        &[("region_id", region_id), ("date", &format_date(date))],
    )
    .map_err(|err| FetchError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: err.to_string(),
    })
}

/// Map a non-success HTTP status to its error; `None` for 2xx.
pub fn classify_status(status: u16) -> Option<FetchError> {
    match status {
        200..=299 => None,
        404 => Some(FetchError::NotFound),
        400 => Some(FetchError::BadRequest),
        _ => Some(FetchError::RequestFailed { status }),
    }
}
