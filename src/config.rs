use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::DateRequest;

/// Top-level YAML configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub campgrounds: Vec<Campground>,
    pub dates: DatesConfig,
    #[serde(default)]
    pub party: PartyConfig,
    #[serde(default)]
    pub preferred_sections: Vec<String>,
    #[serde(default)]
    pub preferred_sites: Vec<String>,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// A campground to try, in priority order.
#[derive(Debug, Clone, Deserialize)]
pub struct Campground {
    pub name: String,
    pub url_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatesConfig {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub flexible_days: u32,
}

impl DatesConfig {
    pub fn request(&self) -> DateRequest {
        DateRequest::new(self.check_in, self.check_out, self.flexible_days)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PartyConfig {
    pub size: u32,
    pub equipment: String,
}

impl Default for PartyConfig {
    fn default() -> Self {
        PartyConfig {
            size: 2,
            equipment: "tent".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub sound: bool,
    pub desktop: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        NotificationsConfig {
            sound: true,
            desktop: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// chromedriver endpoint the session connects to.
    pub webdriver_url: String,
    /// Override for the persistent browser profile directory.
    pub profile_dir: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            webdriver_url: "http://localhost:9515".to_string(),
            profile_dir: None,
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("config file not found: {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&raw)
        .with_context(|| format!("invalid config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<()> {
        if self.campgrounds.is_empty() {
            bail!("at least one campground must be configured");
        }
        if self.dates.check_out <= self.dates.check_in {
            bail!(
                "check_out ({}) must be after check_in ({})",
                self.dates.check_out,
                self.dates.check_in
            );
        }
        Ok(())
    }
}
