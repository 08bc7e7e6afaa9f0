//! Webhook endpoint configuration.

/// Make.com scenario receiving the RSVPs for this invite.
const DEFAULT_WEBHOOK_URL: &str = "https://hook.us2.make.com/5b26dte1v3ftnftqyilfw1s1sn36ras9";

/// Webhook endpoint. There is no runtime environment in the browser, so
/// the override is compile-time: set `RSVP_WEBHOOK_URL` when building.
pub fn webhook_url() -> &'static str {
    option_env!("RSVP_WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL)
}
