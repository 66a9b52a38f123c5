pub mod constants;
pub mod lib;
pub mod validation;

pub use lib::{config_from_env, load_config, ConfigError};
