//! customview - exclusive selection and HSV color picking
//!
//! Re-exports the two member crates and adds the pieces an application needs
//! around them: JSON configuration and logger setup.

pub mod config;
pub mod error;

pub use customview_color as color;
pub use customview_select as select;

pub use config::{CustomViewConfig, LogLevel, PickerConfig};
pub use error::ConfigError;

/// Install `env_logger` at `level`. `RUST_LOG` still overrides it.
pub fn init_logging(level: LogLevel) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
}
