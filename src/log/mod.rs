use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

// ----------------------------------------------
// Log Levels
// ----------------------------------------------

// Silent is only meaningful as a minimum level: it turns every message off.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Verbose,
    Info,
    Warn,
    Error,
    Silent,
}

impl Level {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != Self::Silent && (self as u32) >= MIN_LOG_LEVEL.load(Ordering::Relaxed)
    }

    fn tty_color(self) -> &'static str {
        match self {
            Self::Verbose => "\x1b[90m",
            Self::Info    => "\x1b[32m",
            Self::Warn    => "\x1b[33m",
            Self::Error   => "\x1b[31m",
            Self::Silent  => "",
        }
    }
}

// ----------------------------------------------
// Log Channel
// ----------------------------------------------

// Subsystem tag printed next to the level, e.g. [Warn][save].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Channel(pub &'static str);

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[macro_export]
macro_rules! channel {
    ($name:literal) => { $crate::log::Channel($name) };
}

// ----------------------------------------------
// Global Configs
// ----------------------------------------------

static MIN_LOG_LEVEL: AtomicU32 = AtomicU32::new(Level::Info as u32);
static ENABLE_SRC_LOCATION: AtomicBool = AtomicBool::new(false);
static ENABLE_TTY_COLORS: AtomicBool = AtomicBool::new(true);

pub fn set_level(level: Level) {
    MIN_LOG_LEVEL.store(level as u32, Ordering::Relaxed);
}

pub fn enable_source_location(enable: bool) {
    ENABLE_SRC_LOCATION.store(enable, Ordering::Relaxed);
}

pub fn enable_tty_colors(enable: bool) {
    ENABLE_TTY_COLORS.store(enable, Ordering::Relaxed);
}

// ----------------------------------------------
// Listener
// ----------------------------------------------

// Copy of every emitted message, handed to the embedding application.
pub struct Record {
    pub level: Level,
    pub channel: Channel,
    pub message: String,
}

static LISTENER: OnceLock<Box<dyn Fn(Record) + Send + Sync>> = OnceLock::new();

// Returns false if a listener was already installed.
pub fn set_listener<F>(listener_fn: F) -> bool
    where F: Fn(Record) + Send + Sync + 'static
{
    LISTENER.set(Box::new(listener_fn)).is_ok()
}

// ----------------------------------------------
// Output
// ----------------------------------------------

pub fn emit(level: Level, channel: Channel, file: &'static str, line: u32, args: fmt::Arguments) {
    if !level.is_enabled() {
        return;
    }

    let (color_start, color_end) = {
        if ENABLE_TTY_COLORS.load(Ordering::Relaxed) {
            (level.tty_color(), "\x1b[0m")
        } else {
            ("", "")
        }
    };

    let mut out = std::io::stdout().lock();

    // Write failures are dropped.
    let _ = if ENABLE_SRC_LOCATION.load(Ordering::Relaxed) {
        writeln!(&mut out, "{color_start}[{level:?}]{channel}{color_end} {file}:{line} - {args}")
    } else {
        writeln!(&mut out, "{color_start}[{level:?}]{channel}{color_end} {args}")
    };

    if let Some(listener) = LISTENER.get() {
        listener(Record { level, channel, message: args.to_string() });
    }
}

#[macro_export]
macro_rules! log_message {
    ($level:expr, $chan:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        if $level.is_enabled() {
            $crate::log::emit($level, $chan, file!(), line!(), format_args!($fmt $(, $($arg)+)?));
        }
    };
}

// ----------------------------------------------
// Level Macros
// ----------------------------------------------

#[macro_export]
macro_rules! verbose {
    ($chan:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        $crate::log_message!($crate::log::Level::Verbose, $chan, $fmt $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! info {
    ($chan:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        $crate::log_message!($crate::log::Level::Info, $chan, $fmt $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! warn {
    ($chan:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        $crate::log_message!($crate::log::Level::Warn, $chan, $fmt $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! error {
    ($chan:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        $crate::log_message!($crate::log::Level::Error, $chan, $fmt $(, $($arg)+)?)
    };
}

// Scoped usage: log::warn!(log::channel!("save"), ...).
#[allow(unused_imports)]
pub use crate::{channel, verbose, info, warn, error};

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use super::*;

    static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

    #[test]
    fn test_listener_receives_records() {
        set_listener(|record| {
            if record.channel == Channel("log_test") {
                CAPTURED.lock().unwrap().push((record.level, record.message));
            }
        });

        error!(channel!("log_test"), "slot {} out of range", 42);

        let captured = CAPTURED.lock().unwrap();
        assert_eq!(captured.as_slice(), &[(Level::Error, "slot 42 out of range".to_string())]);
    }

    #[test]
    fn test_silent_disables_every_level() {
        assert!(!Level::Silent.is_enabled());
        assert!(Level::Silent > Level::Error);
        assert_eq!(Channel("save").to_string(), "[save]");
    }
}
