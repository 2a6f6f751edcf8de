// src/common/log.rs

use crate::common::env;
use chrono::Local;
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// --- Global State for Console Logging ---
lazy_static! {
    static ref LAST_LOG_TIME: Mutex<Option<Instant>> = Mutex::new(None);
    static ref CONFIGURED_LOG_LEVEL: LogLevel = LogLevel::from_str(&env::CONFIG.log_level);
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum LogLevel {
    Error = 3,
    Warn = 2,
    Info = 1,
    Debug = 0,
}

impl LogLevel {
    fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            _ => LogLevel::Info, // Default to Info if the value is invalid.
        }
    }

    fn enabled(self, configured: LogLevel) -> bool {
        (self as u8) >= (configured as u8)
    }
}

// Starts the elapsed-time clock used for the "+delta" suffix.
pub fn init() {
    if let Ok(mut last) = LAST_LOG_TIME.lock() {
        *last = Some(Instant::now());
    }
}

// Logs a formatted message to stderr; stdout is reserved for the report.
pub fn log(level: LogLevel, content: &str) {
    if !level.enabled(*CONFIGURED_LOG_LEVEL) {
        return;
    }

    let now = Instant::now();
    let time_diff_str = match LAST_LOG_TIME.lock() {
        Ok(mut last_time) => {
            let diff = last_time
                .map(|prev| format_duration(now.duration_since(prev)))
                .unwrap_or_else(|| "0us".to_string());
            *last_time = Some(now);
            diff
        }
        Err(_) => "0us".to_string(),
    };

    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let time_str = Local::now().format("%H:%M:%S");

    let timestamp_color = match level {
        LogLevel::Info => Color::White,
        LogLevel::Debug => Color::Magenta,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
    };
    let diff_color = match level {
        LogLevel::Debug => Color::Blue,
        _ => Color::Yellow,
    };

    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(timestamp_color)));
    let _ = write!(&mut stderr, "{} ", time_str);
    let _ = stderr.reset();
    let _ = write!(&mut stderr, "{} ", content);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(diff_color)));
    let _ = writeln!(&mut stderr, "+{}", time_diff_str);
    let _ = stderr.reset();
}

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}us", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", micros / 1_000)
    } else if micros < 60_000_000 {
        format!("{}s", micros / 1_000_000)
    } else {
        format!("{:.2}m", micros as f64 / 60_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_defaults_to_info() {
        assert_eq!(LogLevel::from_str("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("verbose"), LogLevel::Info);
    }

    #[test]
    fn filtering_lets_severe_messages_through() {
        assert!(LogLevel::Error.enabled(LogLevel::Warn));
        assert!(LogLevel::Warn.enabled(LogLevel::Warn));
        assert!(!LogLevel::Info.enabled(LogLevel::Warn));
        assert!(LogLevel::Debug.enabled(LogLevel::Debug));
    }

    #[test]
    fn durations_pick_a_readable_unit() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250us");
        assert_eq!(format_duration(Duration::from_millis(12)), "12ms");
        assert_eq!(format_duration(Duration::from_secs(3)), "3s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.50m");
    }
}
