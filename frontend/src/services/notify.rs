//! Blocking user notifications.

/// Show `message` in a blocking browser alert.
///
/// Falls back to the console when no window is available.
pub fn notify(message: &str) {
    let shown = web_sys::window()
        .map(|window| window.alert_with_message(message).is_ok())
        .unwrap_or(false);

    if !shown {
        log::warn!("{}", message);
    }
}
