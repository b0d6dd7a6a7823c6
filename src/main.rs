use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use campsite_booker::automation::auth::wait_for_login;
use campsite_booker::automation::booking::{book_site, pause_before_payment, take_screenshot};
use campsite_booker::automation::search::{navigate_to_campground, wait_through_queue};
use campsite_booker::automation::session::BrowserSession;
use campsite_booker::config::load_config;
use campsite_booker::notify::alert;

/// Semi-automated Parks Canada campsite booker.
///
/// You handle login and payment; the tool handles the speed in between.
#[derive(Parser, Debug)]
#[command(name = "campsite_booker", version)]
struct Cli {
    /// Path to the YAML config file.
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Minutes to wait for manual login.
    #[arg(long, default_value_t = 15)]
    login_timeout: u64,

    /// Minutes to wait in the virtual queue.
    #[arg(long, default_value_t = 120)]
    queue_timeout: u64,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "campsite_booker=debug,info"
    } else {
        "campsite_booker=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("campsite auto-booker: you handle login & payment, the bot handles speed");

    let config = load_config(&cli.config)?;
    info!(
        "config loaded: {} campground(s), {} -> {} (±{} day(s))",
        config.campgrounds.len(),
        config.dates.check_in,
        config.dates.check_out,
        config.dates.flexible_days
    );

    let session = BrowserSession::launch(&config.browser).await?;

    if !wait_for_login(session.driver(), cli.login_timeout, &config.notifications).await? {
        session.close().await?;
        std::process::exit(1);
    }

    if !wait_through_queue(session.driver(), cli.queue_timeout, &config.notifications).await? {
        session.close().await?;
        std::process::exit(1);
    }

    info!("step 3: search & book");
    let variants = config.dates.request().date_variants();
    let mut booked = false;
    'campgrounds: for campground in &config.campgrounds {
        for range in &variants {
            if !navigate_to_campground(session.driver(), campground, range, &config.party).await {
                continue;
            }
            if book_site(
                session.driver(),
                &config.preferred_sections,
                &config.preferred_sites,
            )
            .await
            {
                booked = true;
                break 'campgrounds;
            }
            info!("no booking on this option, trying the next one");
        }
    }

    if booked {
        pause_before_payment(session.driver(), &config.notifications).await;
        tokio::signal::ctrl_c().await.ok();
        session.close().await?;
    } else {
        error!("could not book any campsite, all options exhausted");
        take_screenshot(session.driver(), "no_availability").await;
        alert(
            "Campsite Booker",
            "No availability found, browser stays open for a manual attempt",
            &config.notifications,
        );
        info!("browser stays open for manual booking; press Ctrl-C to exit");
        tokio::signal::ctrl_c().await.ok();
        session.close().await?;
        std::process::exit(1);
    }

    Ok(())
}
