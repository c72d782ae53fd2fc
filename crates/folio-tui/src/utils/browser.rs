//! Browser utilities
//!
//! Functions for opening URLs in the system's default browser.

use tokio::runtime::Handle;

/// Something that can hand a URL to a browser
pub trait UrlOpener {
    fn open(&self, url: &str);
}

/// Opens URLs with the platform opener, spawned on a tokio runtime
#[derive(Debug, Clone)]
pub struct SystemOpener {
    runtime: Handle,
}

impl SystemOpener {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) {
        self.runtime.spawn(open_url(url.to_string()));
    }
}

/// Open a URL in the system's default browser
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
pub async fn open_url(url: String) {
    #[cfg(target_os = "macos")]
    let result = tokio::process::Command::new("open").arg(&url).spawn();

    #[cfg(target_os = "windows")]
    let result = tokio::process::Command::new("cmd")
        .args(["/C", "start", "", &url])
        .spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = tokio::process::Command::new("xdg-open").arg(&url).spawn();

    match result {
        Ok(mut child) => {
            if let Err(e) = child.wait().await {
                log::error!("Browser process for {} failed: {}", url, e);
            }
        }
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}
