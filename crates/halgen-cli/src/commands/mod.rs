//! Command implementations, one module per subcommand.
//!
//! Each module exposes a single `execute` function taking its parsed
//! arguments plus whatever context it needs (global flags, config, output).

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
