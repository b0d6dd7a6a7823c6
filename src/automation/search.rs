//! Virtual waiting-room handling and campground search navigation.

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use thirtyfour::prelude::*;
use thirtyfour::support::sleep;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::automation::body_text;
use crate::automation::constants::{
    BOOKING_CATEGORY_ID, MAP_ID, QUEUE_MARKERS, RESERVATION_URL, SEARCH_TAB_GROUP_ID,
};
use crate::config::{Campground, NotificationsConfig, PartyConfig};
use crate::models::DateRange;
use crate::notify::alert;

/// True if the page looks like the virtual waiting room.
pub async fn detect_queue(driver: &WebDriver) -> bool {
    match body_text(driver).await {
        Ok(text) => {
            let text = text.to_lowercase();
            QUEUE_MARKERS.iter().any(|m| text.contains(m))
        }
        Err(_) => false,
    }
}

/// Wait until the user passes through the virtual queue.
///
/// Returns true once through (or if no queue is active), false on timeout.
pub async fn wait_through_queue(
    driver: &WebDriver,
    timeout_minutes: u64,
    notifications: &NotificationsConfig,
) -> Result<bool> {
    if !detect_queue(driver).await {
        return Ok(true);
    }

    info!("step 2: queue");
    info!("virtual waiting room detected, waiting...");

    let deadline = Instant::now() + Duration::from_secs(timeout_minutes * 60);
    while Instant::now() < deadline {
        if !detect_queue(driver).await {
            info!("through the queue");
            alert("Campsite Booker", "You are through the queue!", notifications);
            return Ok(true);
        }
        sleep(Duration::from_secs(3)).await;
    }

    warn!("queue wait timed out after {timeout_minutes} minute(s)");
    Ok(false)
}

/// Date format the reservation site expects in its URL parameters.
fn format_search_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%dT00:00:00.000Z").to_string()
}

/// Campground results URL with all search filters as query parameters.
pub fn search_url(campground: &Campground, range: &DateRange, party_size: u32) -> Result<url::Url> {
    let mut url = url::Url::parse(RESERVATION_URL)?.join(&campground.url_slug)?;
    url.query_pairs_mut()
        .append_pair("mapId", MAP_ID)
        .append_pair("searchTabGroupId", SEARCH_TAB_GROUP_ID)
        .append_pair("bookingCategoryId", BOOKING_CATEGORY_ID)
        .append_pair("startDate", &format_search_date(range.check_in))
        .append_pair("endDate", &format_search_date(range.check_out))
        .append_pair("nights", &range.nights().to_string())
        .append_pair("partySize", &party_size.to_string());
    Ok(url)
}

/// Navigate to the campground search results for one date variant.
///
/// Returns true if the page loaded; navigation failures are logged and
/// reported as a failed attempt, never bubbled up.
pub async fn navigate_to_campground(
    driver: &WebDriver,
    campground: &Campground,
    range: &DateRange,
    party: &PartyConfig,
) -> bool {
    info!(
        "searching {} ({} to {}, {} ppl, {})",
        campground.name, range.check_in, range.check_out, party.size, party.equipment
    );

    let url = match search_url(campground, range, party.size) {
        Ok(url) => url,
        Err(e) => {
            error!("bad search url for {}: {e}", campground.url_slug);
            return false;
        }
    };

    match driver.goto(url.as_str()).await {
        Ok(()) => {
            // Give the Angular app a moment to render results.
            sleep(Duration::from_secs(3)).await;
            true
        }
        Err(e) => {
            error!("navigation error: {e}");
            false
        }
    }
}
