//! Remote frame source over HTTP(S).
//!
//! Stations are addressed by substituting the station id into a URL template,
//! e.g. `https://www.ndbc.noaa.gov/buoycam.php?station={id}`. The response
//! must declare an image content type; anything else (error pages, HTML
//! placeholders) makes the station unavailable for the cycle.

use std::io::Read;
use std::time::Duration;

use crate::error::{HorizonError, Result};
use crate::frame::RawFrame;

use super::image_io::decode_frame;
use super::source::FrameSource;

/// Placeholder replaced by the station id in URL templates.
pub const ID_PLACEHOLDER: &str = "{id}";

const MAX_FRAME_BYTES: u64 = 20 * 1024 * 1024;

/// Fetches station frames with a blocking HTTP GET.
pub struct HttpSource {
    url_template: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            url_template: url_template.into(),
            agent,
        }
    }

    pub fn url_for(&self, source_id: &str) -> String {
        self.url_template.replace(ID_PLACEHOLDER, source_id)
    }
}

impl FrameSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch(&self, source_id: &str) -> Result<RawFrame> {
        let url = self.url_for(source_id);
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| HorizonError::Http(format!("GET {url}: {e}")))?;

        let content_type = response.header("Content-Type").unwrap_or("").to_string();
        if !content_type.contains("image") {
            return Err(HorizonError::SourceUnavailable {
                source_id: source_id.to_string(),
                reason: format!("unexpected content type {content_type:?}"),
            });
        }

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_FRAME_BYTES)
            .read_to_end(&mut bytes)?;
        if bytes.is_empty() {
            return Err(HorizonError::SourceUnavailable {
                source_id: source_id.to_string(),
                reason: "empty response body".to_string(),
            });
        }
        decode_frame(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_substitutes_station_id() {
        let source = HttpSource::new(
            "https://example.org/cam.php?station={id}",
            Duration::from_secs(1),
        );
        assert_eq!(
            source.url_for("46042"),
            "https://example.org/cam.php?station=46042"
        );
    }

    #[test]
    fn test_unreachable_host_is_an_error() {
        let source = HttpSource::new("http://127.0.0.1:9/{id}.jpg", Duration::from_millis(200));
        assert!(source.fetch("45007").is_err());
    }
}
