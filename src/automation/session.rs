use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use thirtyfour::prelude::*;
use tracing::{debug, warn};

use crate::automation::constants::{RESERVATION_URL, USER_AGENT, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::automation::data_dir;
use crate::config::BrowserConfig;

/// Best-effort concealment of the automation flag. The site is allowed to see
/// through this; the human at the keyboard is the real fallback.
const WEBDRIVER_SPOOF_JS: &str = r#"
    Object.defineProperty(navigator, 'webdriver', { get: () => undefined });
"#;

/// A headed Chrome session with a persistent profile, so GCKey cookies
/// survive between runs. Headless is deliberately not an option here: the
/// user logs in and pays in this window.
pub struct BrowserSession {
    driver: WebDriver,
}

impl BrowserSession {
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let profile_dir = config
            .profile_dir
            .clone()
            .unwrap_or_else(|| data_dir().join("browser-profile"));
        fs::create_dir_all(&profile_dir)
            .with_context(|| format!("cannot create profile dir {}", profile_dir.display()))?;

        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg("--disable-blink-features=AutomationControlled")?;
        caps.add_arg("--no-first-run")?;
        caps.add_arg("--disable-notifications")?;
        caps.add_arg(&format!("--user-agent={USER_AGENT}"))?;
        caps.add_arg(&format!("--user-data-dir={}", profile_dir.display()))?;

        let driver = WebDriver::new(&config.webdriver_url, caps)
            .await
            .with_context(|| format!("cannot reach chromedriver at {}", config.webdriver_url))?;

        driver
            .set_window_rect(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT)
            .await?;

        if let Err(e) = driver
            .execute(WEBDRIVER_SPOOF_JS, Arc::from(Vec::<serde_json::Value>::new()))
            .await
        {
            debug!("webdriver spoof script failed: {e}");
        }

        debug!("browser session up at {}", RESERVATION_URL);
        Ok(BrowserSession { driver })
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    pub async fn close(self) -> Result<()> {
        if let Err(e) = self.driver.quit().await {
            warn!("browser session did not quit cleanly: {e}");
        }
        Ok(())
    }
}
