//! Host platform boundary.
//!
//! The widget runs embedded in a chat platform's web view, which exposes a
//! small capability set. Exactly one [`Host`] implementation is chosen at
//! startup, so call sites never check availability: inside the platform the
//! shell supplies a binding to the real SDK, outside it [`LocalHost`] routes
//! every call to logs. This is a normal configuration, not an error.

use serde_json::Value;
use tracing::info;

/// Capabilities the embedding platform exposes to the widget.
///
/// Main-button activation is wired by the shell: whatever drives the
/// session calls [`crate::session::Session::checkout`] when the button
/// fires.
pub trait Host {
    /// Expand the viewport to full height.
    fn expand(&self);

    /// Show the primary action button.
    fn show_main_button(&self);

    /// Hide the primary action button.
    fn hide_main_button(&self);

    /// Set the primary action button label.
    fn set_main_button_text(&self, text: &str);

    /// Enable the primary action button.
    fn enable_main_button(&self);

    /// Disable the primary action button.
    fn disable_main_button(&self);

    /// Show a blocking alert to the user.
    fn show_alert(&self, message: &str);

    /// Opaque user-context blob, if the platform provides one.
    fn user_context(&self) -> Option<Value>;

    /// Submit the serialized session result to the platform.
    ///
    /// Hand-off is fire-and-forget: implementations must never fail the
    /// caller.
    fn send_data(&self, payload: Value);
}

/// Fallback host for running outside the platform: every capability becomes
/// a log line and there is no user context.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHost;

impl Host for LocalHost {
    fn expand(&self) {
        info!("host: expand viewport");
    }

    fn show_main_button(&self) {
        info!("host: show main button");
    }

    fn hide_main_button(&self) {
        info!("host: hide main button");
    }

    fn set_main_button_text(&self, text: &str) {
        info!(text, "host: set main button text");
    }

    fn enable_main_button(&self) {
        info!("host: enable main button");
    }

    fn disable_main_button(&self) {
        info!("host: disable main button");
    }

    fn show_alert(&self, message: &str) {
        // Outside the platform an alert can only be a log line.
        tracing::warn!(message, "host: alert");
    }

    fn user_context(&self) -> Option<Value> {
        None
    }

    fn send_data(&self, payload: Value) {
        info!(payload = %payload, "host: order payload");
    }
}
