use std::path::Path;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::emulation::{MediaFeature, SetEmulatedMediaParams};
use chromiumoxide::cdp::browser_protocol::page::{
    CaptureScreenshotFormat, EventLifecycleEvent, SetLifecycleEventsEnabledParams,
};
use chromiumoxide::page::Page as CrPage;
use chromiumoxide::page::ScreenshotParams;
use futures::{FutureExt, StreamExt};
use tokio::time::timeout;

use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Page with just the calls one capture needs.
pub struct PreviewPage {
    inner: CrPage,
}

impl PreviewPage {
    pub(crate) fn new(inner: CrPage) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying chromiumoxide Page.
    pub fn inner(&self) -> &CrPage {
        &self.inner
    }

    /// Emulate `prefers-color-scheme` so the page renders the requested theme.
    pub async fn emulate_color_scheme(&self, scheme: &str) -> Result<()> {
        let params = SetEmulatedMediaParams::builder()
            .feature(MediaFeature::new("prefers-color-scheme", scheme))
            .build();
        self.inner.execute(params).await?;
        Ok(())
    }

    /// Navigate to `url` and wait until the page reports network idle.
    /// The whole wait, navigation included, is bounded by `nav_timeout`.
    pub async fn goto_idle(&self, url: &str, nav_timeout: Duration) -> Result<()> {
        self.inner
            .execute(SetLifecycleEventsEnabledParams::new(true))
            .await
            .map_err(|e| Error::NavigationError(format!("Failed to enable lifecycle events: {e}")))?;

        let mut lifecycle = self
            .inner
            .event_listener::<EventLifecycleEvent>()
            .await
            .map_err(|e| Error::NavigationError(format!("Failed to listen for lifecycle events: {e}")))?;

        // Chrome replays lifecycle state for the current (blank) document when
        // the domain is enabled; drain it so a stale networkIdle is not
        // mistaken for the real navigation completing.
        while let Some(Some(_)) = lifecycle.next().now_or_never() {}

        timeout(nav_timeout, async {
            self.inner
                .goto(url)
                .await
                .map_err(|e| Error::NavigationError(e.to_string()))?;

            while let Some(event) = lifecycle.next().await {
                if event.name == "networkIdle" {
                    return Ok(());
                }
            }

            Err(Error::NavigationError(format!(
                "page closed while loading {url}"
            )))
        })
        .await
        .map_err(|_| {
            Error::Timeout(format!(
                "navigation to {url} ({}ms)",
                nav_timeout.as_millis()
            ))
        })?
    }

    /// Fixed pause to let in-page animations finish before capturing.
    pub async fn settle(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }

    /// Capture a PNG to `path`: the full scrollable page if `full_page`,
    /// otherwise the visible viewport only.
    pub async fn screenshot_to_file(&self, path: impl AsRef<Path>, full_page: bool) -> Result<()> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(full_page)
            .build();
        self.inner
            .save_screenshot(params, path)
            .await
            .map_err(|e| Error::ScreenshotError(e.to_string()))?;
        Ok(())
    }
}
