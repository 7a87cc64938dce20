//! Screenshot utility for the dev preview.
//!
//! Takes a screenshot of a given page on the running dev server, for
//! visually verifying UI changes.
//!
//! Usage:
//!   preview-shot                    # Screenshots the home page
//!   preview-shot /projects          # Screenshots the /projects page
//!   preview-shot /contact --dark    # Screenshots in dark mode
//!   preview-shot / --mobile         # Screenshots at mobile viewport
//!   preview-shot / --full           # Full-page screenshot
//!
//! Output: screenshots/ directory (gitignored)

use preview_shot::{capture, cli, config};

#[tokio::main]
async fn main() {
    let options = cli::parse_args(std::env::args().skip(1));
    let base_url = config::base_url();

    if let Err(e) = capture::run(&options, &base_url).await {
        eprintln!("[ERROR] Screenshot failed: {e}");
        std::process::exit(1);
    }
}
