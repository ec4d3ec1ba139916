//! User Notifications
//!
//! Blocking acknowledgments for login and logout outcomes.

/// Shows a message the user has to acknowledge
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert`
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(text = message, "no window to alert on");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            tracing::warn!(error = ?err, text = message, "alert failed");
        }
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingNotifier;
