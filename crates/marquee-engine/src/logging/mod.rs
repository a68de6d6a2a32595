//! Logging setup.
//!
//! Thin wrapper over `env_logger` so binaries get consistent initialization.

mod init;

pub use init::{LoggingConfig, init_logging};
