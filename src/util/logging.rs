//! Console logging setup for the browser build.

/// Install the console logger and panic hook. No-op outside the browser.
pub fn init() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("logger already initialized");
        }
    }
}
