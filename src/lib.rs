pub mod browser;
pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod page;
pub mod projects;

pub use browser::CaptureBrowser;
pub use config::CaptureOptions;
pub use error::{Error, Result};
pub use page::PreviewPage;
