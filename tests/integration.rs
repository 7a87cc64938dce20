//! End-to-end captures. These need a Chrome binary and a dev server on
//! localhost:3000, so they are ignored by default: `cargo test -- --ignored`.

use preview_shot::capture;
use preview_shot::cli::parse_args;
use preview_shot::config::DEFAULT_BASE_URL;

#[tokio::test]
#[ignore]
async fn capture_home_page() {
    let options = parse_args(std::iter::empty::<String>());

    let path = capture::run(&options, DEFAULT_BASE_URL)
        .await
        .expect("Failed to capture home page");

    let bytes = std::fs::read(&path).expect("Screenshot file missing");
    assert_eq!(&bytes[0..4], &[0x89, 0x50, 0x4E, 0x47]);
    assert!(bytes.len() > 1000, "Screenshot too small: {} bytes", bytes.len());
}

#[tokio::test]
#[ignore]
async fn capture_dark_full_page() {
    let options = parse_args(["/", "--dark", "--full"]);

    let path = capture::run(&options, DEFAULT_BASE_URL)
        .await
        .expect("Failed to capture full page");

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("home_dark_full_"), "Filename was: {name}");
    assert!(std::fs::read(&path).is_ok());
}

#[tokio::test]
#[ignore]
async fn unreachable_server_is_fatal() {
    let options = parse_args(["/"]);

    // Nothing listens on this port; navigation must fail, not hang.
    let err = capture::run(&options, "http://localhost:9")
        .await
        .expect_err("Capture against a dead origin should fail");

    let msg = err.to_string();
    assert!(
        msg.contains("Navigation") || msg.contains("Timeout"),
        "Unexpected error: {msg}"
    );
}
