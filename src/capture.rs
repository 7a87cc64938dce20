use std::path::PathBuf;

use chrono::Utc;

use crate::browser::CaptureBrowser;
use crate::config::{CaptureOptions, NAVIGATION_TIMEOUT, SCREENSHOTS_DIR, SETTLE_DELAY};
use crate::error::Result;

/// Run one capture end to end and return the path of the written PNG.
///
/// The browser handle is released on every exit path before the capture
/// result is surfaced.
pub async fn run(options: &CaptureOptions, base_url: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(SCREENSHOTS_DIR).await?;

    let browser = CaptureBrowser::launch(options).await?;
    let result = capture(&browser, options, base_url).await;
    browser.close().await;
    result
}

async fn capture(
    browser: &CaptureBrowser,
    options: &CaptureOptions,
    base_url: &str,
) -> Result<PathBuf> {
    let url = options.target_url(base_url);
    let viewport = options.viewport();

    println!("[Screenshot] Navigating to {url}");
    println!(
        "   Viewport: {}x{} | Theme: {} | Full page: {}",
        viewport.width,
        viewport.height,
        options.color_scheme(),
        options.full_page
    );

    let page = browser.new_page(options).await?;
    page.goto_idle(&url, NAVIGATION_TIMEOUT).await?;
    page.settle(SETTLE_DELAY).await;

    let filename = options.filename(Utc::now());
    let filepath = PathBuf::from(SCREENSHOTS_DIR).join(&filename);
    page.screenshot_to_file(&filepath, options.full_page).await?;

    println!("[OK] Screenshot saved: {SCREENSHOTS_DIR}/{filename}");
    println!("   Size: {}x{}@2x", viewport.width, viewport.height);

    Ok(filepath)
}
