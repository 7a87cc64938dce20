use std::time::Duration;

use chrono::{DateTime, Utc};

/// Target origin used when `BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Output directory, relative to the current working directory.
pub const SCREENSHOTS_DIR: &str = "screenshots";

/// Upper bound on navigation (including the network-idle wait).
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Fixed pause after navigation so in-page animations can finish.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// All captures are taken at 2x resolution.
pub const DEVICE_SCALE_FACTOR: f64 = 2.0;

/// Pixel dimensions of the simulated browser window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportPreset {
    pub width: u32,
    pub height: u32,
}

pub const DESKTOP_VIEWPORT: ViewportPreset = ViewportPreset {
    width: 1280,
    height: 800,
};

pub const MOBILE_VIEWPORT: ViewportPreset = ViewportPreset {
    width: 390,
    height: 844,
};

/// Options for one capture run, parsed once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Page path on the preview server, always starting with `/`.
    pub page_path: String,
    pub dark: bool,
    pub mobile: bool,
    pub full_page: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            page_path: "/".to_string(),
            dark: false,
            mobile: false,
            full_page: false,
        }
    }
}

impl CaptureOptions {
    pub fn viewport(&self) -> ViewportPreset {
        if self.mobile {
            MOBILE_VIEWPORT
        } else {
            DESKTOP_VIEWPORT
        }
    }

    pub fn color_scheme(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }

    pub fn target_url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.page_path)
    }

    /// Derive the output filename for a capture taken at `now`.
    ///
    /// Segment order is fixed: sanitized path, then `mobile`, `dark`, `full`
    /// for whichever flags are set, then the timestamp, joined with `_`.
    pub fn filename(&self, now: DateTime<Utc>) -> String {
        let mut parts = vec![sanitize_path(&self.page_path)];
        if self.mobile {
            parts.push("mobile".to_string());
        }
        if self.dark {
            parts.push("dark".to_string());
        }
        if self.full_page {
            parts.push("full".to_string());
        }
        parts.push(timestamp_segment(now));
        format!("{}.png", parts.join("_"))
    }
}

/// Map a page path to a filename base: `/` becomes `home`, otherwise one
/// leading `/` is stripped and interior `/` become `-`.
pub fn sanitize_path(path: &str) -> String {
    if path == "/" {
        "home".to_string()
    } else {
        path.strip_prefix('/').unwrap_or(path).replace('/', "-")
    }
}

/// 19-character ISO-8601-like instant with `:` and `.` made filesystem-safe.
/// Second precision, no fractional seconds, no zone marker.
fn timestamp_segment(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Resolve the target origin once at startup.
pub fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}
