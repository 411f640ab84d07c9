use std::time::Instant;

use tracing::{info, warn};
use url::Url;

use crate::{
    error::{Error, Result},
    model::Platform,
    notify::{Toast, ToastId, ToastQueue},
};

pub const TRACKING_STARTED: &str = "Product tracking started successfully";
pub const TRACKING_FAILED: &str = "Failed to start tracking product";

/// A validated "track new product" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRequest {
    pub url: Url,
    pub platform: Platform,
}

impl TrackRequest {
    pub fn parse(url: &str, platform: &str) -> Result<Self> {
        let url = url.trim();
        let parsed = Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(Error::InvalidUrl(url.to_owned()));
        }

        Ok(Self {
            url: parsed,
            platform: platform.parse()?,
        })
    }
}

pub trait Tracker {
    fn start_tracking(&mut self, request: &TrackRequest) -> Result<()>;
}

/// Accepts every request without contacting any service.
#[derive(Debug, Default)]
pub struct StubTracker {
    pub requests: Vec<TrackRequest>,
}

impl Tracker for StubTracker {
    fn start_tracking(&mut self, request: &TrackRequest) -> Result<()> {
        self.requests.push(request.clone());
        Ok(())
    }
}

/// Validates the form, hands it to `tracker` and reports the outcome as a toast.
pub fn submit(
    url: &str,
    platform: &str,
    tracker: &mut dyn Tracker,
    toasts: &mut ToastQueue,
    now: Instant,
) -> (ToastId, Result<TrackRequest>) {
    let outcome = TrackRequest::parse(url, platform)
        .and_then(|request| tracker.start_tracking(&request).map(|_| request));

    let toast = match &outcome {
        Ok(request) => {
            info!(url = %request.url, platform = %request.platform, "tracking started");
            Toast::success(TRACKING_STARTED)
        }
        Err(err) => {
            warn!(url, platform, %err, "tracking request rejected");
            Toast::error(TRACKING_FAILED)
        }
    };

    (toasts.push(toast, now), outcome)
}
