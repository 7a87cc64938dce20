use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;

use crate::config::{CaptureOptions, DEVICE_SCALE_FACTOR};
use crate::error::{Error, Result};
use crate::page::PreviewPage;

/// Chrome flags that keep an off-screen capture lean.
const CAPTURE_ARGS: &[&str] = &[
    "disable-gpu",
    "disable-extensions",
    "mute-audio",
    "no-default-browser-check",
];

/// A headless Chrome instance scoped to one capture run.
///
/// Callers must release it with [`CaptureBrowser::close`] on every exit path,
/// success or failure, so a partially failed run never leaks the process.
pub struct CaptureBrowser {
    browser: CrBrowser,
    handler_task: tokio::task::JoinHandle<()>,
}

impl CaptureBrowser {
    /// Launch headless Chrome sized to the capture viewport at 2x resolution.
    pub async fn launch(options: &CaptureOptions) -> Result<Self> {
        let viewport = options.viewport();

        let mut builder = CrBrowserConfig::builder().new_headless_mode().no_sandbox();

        for arg in CAPTURE_ARGS {
            builder = builder.arg(*arg);
        }

        builder = builder.viewport(Viewport {
            width: viewport.width,
            height: viewport.height,
            device_scale_factor: Some(DEVICE_SCALE_FACTOR),
            emulating_mobile: false,
            is_landscape: false,
            has_touch: false,
        });

        let cr_config = builder
            .build()
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let (browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a blank page with the requested color scheme already emulated.
    pub async fn new_page(&self, options: &CaptureOptions) -> Result<PreviewPage> {
        let cr_page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;

        let page = PreviewPage::new(cr_page);
        page.emulate_color_scheme(options.color_scheme()).await?;
        Ok(page)
    }

    /// Tear down the Chrome process. Failures here are swallowed so they
    /// never mask the capture result.
    pub async fn close(mut self) {
        let _ = self.browser.close().await;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}
