//! interp version information.
//!
//! The CLI `--version` flag reads this constant.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The interp version string (for example, `0.1.0`).
pub const INTERP_VERSION: &str = env!("CARGO_PKG_VERSION");
