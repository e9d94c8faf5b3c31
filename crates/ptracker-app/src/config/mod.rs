//! Configuration file parsing for the promise tracker
//!
//! Settings live in `<config_dir>/promise-tracker/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings, API_URL_ENV_VAR};
pub use types::*;
