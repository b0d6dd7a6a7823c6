//! Sound and desktop alerts, all best-effort: a missing notification daemon
//! must never interrupt a booking run.

use std::io::{self, Write};

use tracing::debug;

use crate::config::NotificationsConfig;

/// Terminal bell.
pub fn beep(times: u32) {
    let mut stdout = io::stdout();
    for _ in 0..times {
        let _ = stdout.write_all(b"\x07");
    }
    let _ = stdout.flush();
}

#[cfg(target_os = "linux")]
fn desktop_notify(title: &str, message: &str) {
    let result = std::process::Command::new("notify-send")
        .arg(title)
        .arg(message)
        .output();
    if let Err(e) = result {
        debug!("desktop notification unavailable: {e}");
        beep(1);
    }
}

#[cfg(target_os = "macos")]
fn desktop_notify(title: &str, message: &str) {
    let script = format!("display notification \"{message}\" with title \"{title}\"");
    let result = std::process::Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output();
    if let Err(e) = result {
        debug!("desktop notification unavailable: {e}");
        beep(1);
    }
}

#[cfg(target_os = "windows")]
fn desktop_notify(title: &str, message: &str) {
    let script = format!(
        "New-BurntToastNotification -Text '{title}', '{message}'"
    );
    let result = std::process::Command::new("powershell")
        .args(["-Command", &script])
        .output();
    if let Err(e) = result {
        debug!("desktop notification unavailable: {e}");
        beep(1);
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn desktop_notify(_title: &str, _message: &str) {
    beep(1);
}

/// Fire the configured alerts.
pub fn alert(title: &str, message: &str, notifications: &NotificationsConfig) {
    debug!("alert: {title}: {message}");
    if notifications.sound {
        beep(3);
    }
    if notifications.desktop {
        desktop_notify(title, message);
    }
}
