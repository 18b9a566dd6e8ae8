//! Platform-aware logging initialization.
//!
//! For WASM builds with the `web` feature, `tracing` events are routed to the
//! browser console. Elsewhere initialization is a no-op and the host decides.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

#[cfg(feature = "web")]
const LOG_LEVEL_KEY: &str = "tf_web_log_level";

/// Initialize logging for the current platform.
///
/// `configured` is the level from the navbar config, used when no level has
/// been persisted in local storage yet. Only the first call has any effect.
pub fn init(configured: Option<&str>) {
    INIT.call_once(|| {
        let _fallback = configured.and_then(parse_level).unwrap_or(LevelFilter::WARN);
        #[cfg(feature = "web")]
        init_web_logging(_fallback);
    });
}

/// Map a level name (case-insensitive) to a filter.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(feature = "web")]
fn init_web_logging(fallback: LevelFilter) {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time();

    let initial_level = get_stored_log_level().unwrap_or(fallback);

    tracing_subscriber::registry().with(initial_level).with(fmt_layer).init();
}

#[cfg(feature = "web")]
fn get_stored_log_level() -> Option<LevelFilter> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let level_str = storage.get_item(LOG_LEVEL_KEY).ok()??;
    parse_level(&level_str)
}
