//! Section/site discovery and the reserve flow.
//!
//! Two generations of the site's markup are supported: the Angular
//! expansion-panel list (site rows with a `data-resource` name) and the older
//! all-in-one "Site A49  Available" buttons. Discovery is best-effort: a
//! stale or odd element is skipped, never fatal.

use std::collections::HashSet;
use std::fs;
use std::time::Duration;

use thirtyfour::prelude::*;
use thirtyfour::support::sleep;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::automation::constants::{
    ACKNOWLEDGE_BUTTON, ACKNOWLEDGE_HEADING, AVAILABILITY_LABEL_SELECTOR, AVAILABLE_TEXT,
    CONFIRM_CHECKBOX_LABEL, CONFIRM_DETAILS_BUTTON, EXPANSION_PANEL_SELECTOR,
    PANEL_HEADER_SELECTOR, RESERVE_BUTTON, RESOURCE_ATTR, RESOURCE_NAME_SELECTOR,
    VIEW_DETAILS_SELECTOR,
};
use crate::automation::data_dir;
use crate::config::NotificationsConfig;
use crate::models::BookableUnit;
use crate::models::units::{is_section_label, unit_name};
use crate::notify::alert;
use crate::selection::{choose_section, choose_site};

/// A discovered booking unit together with the element to click for it.
pub struct UnitHandle {
    pub unit: BookableUnit,
    pub element: WebElement,
}

impl AsRef<BookableUnit> for UnitHandle {
    fn as_ref(&self) -> &BookableUnit {
        &self.unit
    }
}

/// Save a debugging screenshot under the data dir. Best-effort.
pub async fn take_screenshot(driver: &WebDriver, name: &str) {
    let dir = data_dir().join("screenshots");
    if let Err(e) = fs::create_dir_all(&dir) {
        warn!("cannot create screenshot dir {}: {e}", dir.display());
        return;
    }
    let path = dir.join(format!("{name}.png"));
    match driver.screenshot(&path).await {
        Ok(()) => info!("screenshot saved: {}", path.display()),
        Err(e) => warn!("screenshot failed: {e}"),
    }
}

/// aria-label if present, visible text otherwise.
async fn element_label(element: &WebElement) -> String {
    if let Ok(Some(label)) = element.attr("aria-label").await {
        let label = label.trim().to_string();
        if !label.is_empty() {
            return label;
        }
    }
    match element.text().await {
        Ok(text) => text.trim().to_string(),
        Err(_) => String::new(),
    }
}

fn button_by_name(name: &str) -> By {
    By::XPath(format!(
        "//button[contains(normalize-space(.), '{name}') or contains(@aria-label, '{name}')]"
    ))
}

fn heading_by_text(text: &str) -> By {
    By::XPath(format!(
        "//*[self::h1 or self::h2 or self::h3 or @role='heading']\
         [contains(normalize-space(.), '{text}')]"
    ))
}

fn checkbox_by_label(label: &str) -> By {
    By::XPath(format!(
        "//input[@type='checkbox' and contains(@aria-label, '{label}')] \
         | //*[@role='checkbox' and contains(@aria-label, '{label}')]"
    ))
}

/// Poll until an element matching `by` is displayed, or the timeout runs out.
async fn wait_for_visible(driver: &WebDriver, by: By, timeout: Duration) -> Option<WebElement> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(elements) = driver.find_all(by.clone()).await {
            for element in elements {
                if element.is_displayed().await.unwrap_or(false) {
                    return Some(element);
                }
            }
        }
        if Instant::now() >= deadline {
            return None;
        }
        sleep(Duration::from_millis(500)).await;
    }
}

async fn click_when_visible(driver: &WebDriver, by: By, timeout: Duration) -> bool {
    match wait_for_visible(driver, by, timeout).await {
        Some(element) => element.click().await.is_ok(),
        None => false,
    }
}

/// All visible section/loop buttons that still contain available sites.
///
/// Handles both naming conventions seen on the site:
///     "Site A  Available"       (lettered loop)
///     "Loops 22-27  Available"  (numbered loop)
pub async fn find_sections(driver: &WebDriver) -> WebDriverResult<Vec<UnitHandle>> {
    let mut sections = Vec::new();
    for button in driver.find_all(By::Tag("button")).await? {
        let label = element_label(&button).await;
        if !label.contains(AVAILABLE_TEXT) || !is_section_label(&label) {
            continue;
        }
        if !button.is_displayed().await.unwrap_or(false) {
            continue;
        }
        sections.push(UnitHandle {
            unit: BookableUnit::section(unit_name(&label)),
            element: button,
        });
    }
    Ok(sections)
}

/// The Details affordance only exists on site-level pages; its presence means
/// section selection can be skipped.
async fn at_site_level(driver: &WebDriver) -> bool {
    match driver.find_all(By::Css(VIEW_DETAILS_SELECTOR)).await {
        Ok(elements) => {
            for element in elements {
                if element.is_displayed().await.unwrap_or(false) {
                    return true;
                }
            }
            false
        }
        Err(_) => false,
    }
}

/// All bookable available sites, deduplicated by name.
///
/// Expansion-panel rows are preferred; the all-in-one button markup is the
/// fallback for campgrounds still on the older page.
pub async fn find_sites(driver: &WebDriver) -> WebDriverResult<Vec<UnitHandle>> {
    let mut sites: Vec<UnitHandle> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let panels = driver.find_all(By::Css(EXPANSION_PANEL_SELECTOR)).await?;
    for (index, panel) in panels.iter().enumerate() {
        if !panel.is_displayed().await.unwrap_or(false) {
            continue;
        }
        if !panel_is_available(panel).await {
            continue;
        }
        let mut name = match panel.attr(RESOURCE_ATTR).await {
            Ok(Some(value)) => value.trim().to_string(),
            _ => String::new(),
        };
        if name.is_empty() {
            if let Ok(h3) = panel.find(By::Css(RESOURCE_NAME_SELECTOR)).await {
                if let Ok(text) = h3.text().await {
                    name = unit_name(&text);
                }
            }
        }
        if name.is_empty() {
            name = format!("Site {}", index + 1);
        }
        if !seen.insert(name.clone()) {
            continue;
        }
        // The accordion header is the click target that expands the panel.
        let header = match panel.find(By::Css(PANEL_HEADER_SELECTOR)).await {
            Ok(header) => header,
            Err(_) => continue,
        };
        sites.push(UnitHandle {
            unit: BookableUnit::site(name),
            element: header,
        });
    }

    if !sites.is_empty() {
        debug!("found {} site(s) via expansion panels", sites.len());
        return Ok(sites);
    }

    // Fallback: "Site A49  Available" all-in-one buttons.
    for button in driver.find_all(By::Tag("button")).await? {
        let label = element_label(&button).await;
        if !label.contains(AVAILABLE_TEXT)
            || !label.to_lowercase().starts_with("site ")
            || is_section_label(&label)
        {
            continue;
        }
        if !button.is_displayed().await.unwrap_or(false) {
            continue;
        }
        let name = unit_name(&label);
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        sites.push(UnitHandle {
            unit: BookableUnit::site(name),
            element: button,
        });
    }

    if !sites.is_empty() {
        debug!("found {} site(s) via site-label buttons", sites.len());
    }
    Ok(sites)
}

async fn panel_is_available(panel: &WebElement) -> bool {
    if let Ok(labels) = panel.find_all(By::Css(AVAILABILITY_LABEL_SELECTOR)).await {
        for label in labels {
            // Must be exactly "Available"; "Not Available" also contains it.
            if let Ok(text) = label.text().await {
                if text.trim() == AVAILABLE_TEXT {
                    return true;
                }
            }
        }
    }
    false
}

/// Full booking attempt on an already-loaded search results page: pick a
/// section if needed, pick a site, reserve it. Returns true once the
/// reservation details are confirmed and checkout is next.
pub async fn book_site(
    driver: &WebDriver,
    preferred_sections: &[String],
    preferred_sites: &[String],
) -> bool {
    info!("step 3: site selection");

    if !at_site_level(driver).await {
        let sections = match find_sections(driver).await {
            Ok(sections) => sections,
            Err(e) => {
                error!("could not list sections: {e}");
                take_screenshot(driver, "sections_error").await;
                return false;
            }
        };
        if sections.is_empty() {
            warn!("no available sections found");
            take_screenshot(driver, "no_sections").await;
            return false;
        }
        info!("found {} section(s)", sections.len());

        let Some(chosen) = choose_section(&sections, preferred_sections, preferred_sites) else {
            return false;
        };
        info!("expanding section {}", chosen.unit.name);
        if let Err(e) = chosen.element.click().await {
            error!("section click failed: {e}");
            take_screenshot(driver, "section_click_error").await;
            return false;
        }

        // Pattern-A campgrounds never show the Details affordance; press on.
        wait_for_visible(driver, By::Css(VIEW_DETAILS_SELECTOR), Duration::from_secs(10)).await;
        sleep(Duration::from_secs(1)).await;
    }

    let sites = match find_sites(driver).await {
        Ok(sites) => sites,
        Err(e) => {
            error!("could not list sites: {e}");
            take_screenshot(driver, "sites_error").await;
            return false;
        }
    };
    if sites.is_empty() {
        warn!("no individual available sites found");
        take_screenshot(driver, "no_sites").await;
        return false;
    }
    info!("found {} available site(s)", sites.len());

    let Some(chosen) = choose_site(&sites, preferred_sites) else {
        return false;
    };
    info!("selecting site {}", chosen.unit.name);
    if let Err(e) = chosen.element.click().await {
        error!("site click failed: {e}");
        take_screenshot(driver, "site_click_error").await;
        return false;
    }

    // Expanding the row reveals the Reserve button.
    wait_for_visible(driver, button_by_name(RESERVE_BUTTON), Duration::from_secs(8)).await;

    reserve_site(driver).await
}

/// Reserve → Acknowledge (optional) → tick the details checkbox → Confirm.
pub async fn reserve_site(driver: &WebDriver) -> bool {
    info!("clicking Reserve");
    if !click_when_visible(driver, button_by_name(RESERVE_BUTTON), Duration::from_secs(10)).await {
        error!("Reserve button not found");
        take_screenshot(driver, "reserve_error").await;
        return false;
    }
    sleep(Duration::from_secs(1)).await;

    // Only shown for some campground notifications.
    if click_when_visible(driver, button_by_name(ACKNOWLEDGE_BUTTON), Duration::from_secs(4)).await
    {
        info!("acknowledged notification");
        sleep(Duration::from_secs(1)).await;
    } else {
        debug!("no acknowledge dialog, continuing");
    }

    if wait_for_visible(driver, heading_by_text(ACKNOWLEDGE_HEADING), Duration::from_secs(15))
        .await
        .is_none()
    {
        error!("reservation details dialog did not appear");
        take_screenshot(driver, "reserve_error").await;
        return false;
    }

    if !click_when_visible(
        driver,
        checkbox_by_label(CONFIRM_CHECKBOX_LABEL),
        Duration::from_secs(5),
    )
    .await
    {
        error!("reservation details checkbox not found");
        take_screenshot(driver, "reserve_error").await;
        return false;
    }

    info!("confirming reservation details");
    if !click_when_visible(
        driver,
        button_by_name(CONFIRM_DETAILS_BUTTON),
        Duration::from_secs(10),
    )
    .await
    {
        error!("confirm button not found");
        take_screenshot(driver, "reserve_error").await;
        return false;
    }
    sleep(Duration::from_secs(1)).await;

    info!("reservation details confirmed, proceeding to checkout");
    true
}

/// Alert the user and hand over for manual payment. The caller keeps the
/// browser open until the user exits.
pub async fn pause_before_payment(driver: &WebDriver, notifications: &NotificationsConfig) {
    info!("step 4: review & pay");
    println!();
    println!("PAUSED: review the booking in the browser window.");
    println!("Complete the payment manually when ready.");
    println!("The browser stays open. Press Ctrl-C in the terminal to exit.");
    println!();
    alert(
        "Campsite Booker",
        "Booking ready for payment! Review now.",
        notifications,
    );
    take_screenshot(driver, "pre_payment").await;
}
