//! Checklist app: store, effect execution, configuration and text front end.
pub mod commands;
pub mod config;
pub mod effects;
pub mod render;
pub mod store;

pub use commands::{parse_command, Command, CommandError};
pub use config::{load_config, load_or_default, AppConfig, ConfigError, HttpSource, LogConfig, SourceConfig};
pub use effects::EffectRunner;
pub use render::render;
pub use store::Store;
