//! Level-filtered logging to the browser console

use std::cell::Cell;

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Console verbosity. `Off` keeps a production page completely quiet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Off,
    Warn,
    Info,
    Debug,
}

thread_local! {
    static LEVEL: Cell<LogLevel> = const { Cell::new(LogLevel::Off) };
}

pub fn set_level(level: LogLevel) {
    LEVEL.with(|current| current.set(level));
}

pub fn level() -> LogLevel {
    LEVEL.with(Cell::get)
}

/// Whether a message at `level` would reach the console
pub fn enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= self::level()
}

pub fn warn(message: &str) {
    if enabled(LogLevel::Warn) {
        web_sys::console::warn_1(&JsValue::from_str(message));
    }
}

pub fn info(message: &str) {
    if enabled(LogLevel::Info) {
        web_sys::console::info_1(&JsValue::from_str(message));
    }
}

pub fn debug(message: &str) {
    if enabled(LogLevel::Debug) {
        web_sys::console::debug_1(&JsValue::from_str(message));
    }
}
