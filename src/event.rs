//! Log callback system.
//!
//! The library itself carries no logging framework; hosts install a callback
//! to receive diagnostics (font fallback, export failures). Mirrors the
//! shape of a plain `log`-style facade without pulling one in.

use std::sync::{Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log event to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_callback() {
        use std::sync::Arc;

        // The callback is global and other tests may log through it, so
        // record everything and look for our own entry.
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        set_log_callback(move |level, msg| {
            seen_clone
                .lock()
                .expect("seen lock")
                .push((level, msg.to_string()));
        });
        emit_log(LogLevel::Warn, "hello from the log test");

        let entries = seen.lock().expect("seen lock");
        assert!(
            entries
                .iter()
                .any(|(level, msg)| *level == LogLevel::Warn && msg.contains("hello from"))
        );
    }
}
