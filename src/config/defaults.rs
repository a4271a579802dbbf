// src/config/defaults.rs
use crate::config::app::{Diagnostics, TextSettings};
use crate::consts::{DEFAULT_ELLIPSIS, DEFAULT_LOG_FILTER};

pub fn default_diagnostics() -> Diagnostics {
    Diagnostics {
        log_failures: true,
        filter: DEFAULT_LOG_FILTER.into(),
    }
}

pub fn default_text() -> TextSettings {
    TextSettings {
        ellipsis: DEFAULT_ELLIPSIS.into(),
    }
}

pub fn default_true() -> bool {
    true
}

pub fn default_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

pub fn default_ellipsis() -> String {
    DEFAULT_ELLIPSIS.into()
}
