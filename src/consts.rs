// src/consts.rs
//! Shared constants: cipher parameters and defaults

/// AES-256 key size in bytes (SHA-256 digest length)
pub const KEY_LEN: usize = 32;

/// AES block size in bytes; also the CBC IV size (MD5 digest length)
pub const BLOCK_LEN: usize = 16;

/// Ellipsis used by [`crate::text::constraint_length`] unless configured otherwise
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Env var naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "PO_HELPER_CONFIG";

/// Config file looked up in the working directory when the env var is unset
pub const DEFAULT_CONFIG_PATH: &str = "po-helper.toml";

/// Env var that silences failure diagnostics regardless of config
pub const QUIET_ENV: &str = "PO_HELPER_QUIET";

/// Tracing filter used when neither `RUST_LOG` nor config provides one
pub const DEFAULT_LOG_FILTER: &str = "warn";
