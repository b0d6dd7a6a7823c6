//! Manual GCKey login with polling. The tool never touches credentials; it
//! waits for the human to finish signing in and detects the result.

use std::time::Duration;

use anyhow::Result;
use thirtyfour::prelude::*;
use thirtyfour::support::sleep;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::automation::body_text;
use crate::automation::constants::{LOGGED_IN_MARKERS, RESERVATION_URL};
use crate::config::NotificationsConfig;
use crate::notify::alert;

/// Whether the user appears to be signed in.
pub async fn is_logged_in(driver: &WebDriver) -> bool {
    match body_text(driver).await {
        Ok(text) => LOGGED_IN_MARKERS.iter().any(|m| text.contains(m)),
        Err(_) => false,
    }
}

/// Navigate to the reservation site and wait for a manual login.
///
/// Returns true once logged in, false on timeout.
pub async fn wait_for_login(
    driver: &WebDriver,
    timeout_minutes: u64,
    notifications: &NotificationsConfig,
) -> Result<bool> {
    info!("step 1: log in");
    driver.goto(RESERVATION_URL).await?;
    info!("please log in manually with GCKey in the browser window; the login is detected automatically");

    let deadline = Instant::now() + Duration::from_secs(timeout_minutes * 60);
    while Instant::now() < deadline {
        if is_logged_in(driver).await {
            info!("login detected");
            alert("Campsite Booker", "Login successful", notifications);
            return Ok(true);
        }
        sleep(Duration::from_secs(2)).await;
    }

    warn!("login wait timed out after {timeout_minutes} minute(s)");
    Ok(false)
}
