//! Exit code constants for the mmr CLI.
//!
//! Callers treat any non-zero status as "use a hardcoded fallback engine",
//! so every failure shares the same code:
//! - 0: Success
//! - 1: User error (bad args, unknown command) or missing global config

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing argument, unrecognized command, unusable environment.
pub const USER_ERROR: i32 = 1;

/// Global config missing or unparsable.
pub const CONFIG_ERROR: i32 = 1;
