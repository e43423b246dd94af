/// Cross-platform notification support
/// Currently only implements macOS notifications
use crate::domain::{completion_message, Mode};

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when an interval runs out on its own
pub fn notify_interval_done(finished: Mode) {
    let message = completion_message(finished);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Depot - {} Finished""#,
            message.replace('"', "\\\""),
            finished.name()
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!(error = %e, "notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = message;
    }
}
