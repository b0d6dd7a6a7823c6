pub mod auth;
pub mod booking;
pub mod constants;
pub mod search;
pub mod session;

use std::path::PathBuf;

use thirtyfour::prelude::*;

/// Data directory for the persistent browser profile and screenshots.
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".campsite-booker")
}

/// Visible page text. The markers we poll for (login state, waiting room)
/// are distinctive enough that exact DOM position does not matter.
pub(crate) async fn body_text(driver: &WebDriver) -> WebDriverResult<String> {
    driver.find(By::Tag("body")).await?.text().await
}
