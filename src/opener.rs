//! Opening PR URLs in the system browser

use crate::roster;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Platform launcher command for opening a URL in the default browser.
fn launcher() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Opens each PR URL from the roster file in the default browser.
///
/// Launches are spaced one second apart so the browser keeps up; failures
/// to open one URL are logged and skipped.
pub async fn open_prs_from_csv(path: &Path) -> crate::Result<()> {
    let urls = roster::read_pr_urls(path)?;
    let total = urls.len();
    let (program, args) = launcher();

    for (i, url) in urls.iter().enumerate() {
        println!("Opening PR {}/{}: {}", i + 1, total, url);

        if let Err(e) = Command::new(program).args(args).arg(url).spawn() {
            tracing::error!("Failed to open {}: {}", url, e);
            continue;
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Ok(())
}
