/*
[INPUT]:  Public API exports for binance-futures-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod config;
pub mod credentials;
pub mod display;
pub mod logging;

// Re-export main types for convenience
pub use cli::Cli;
pub use config::BotConfig;
pub use logging::{LogSettings, init_logging};
