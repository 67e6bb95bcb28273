/// Conditional console logging for development builds.
///
/// Informational logging compiles to nothing in release builds unless the
/// `console_logging` feature is enabled. Errors and warnings should keep
/// using `leptos::logging::error!`/`warn!` directly so they survive in
/// production.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}

pub use log;
