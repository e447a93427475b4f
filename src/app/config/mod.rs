//! Configuration loading and option resolution.

mod config_dto;
mod load_config;
mod resolve;

pub use config_dto::{ConfigFileDto, WrapperSectionDto};
pub use load_config::{DEFAULT_CONFIG_FILE_NAME, LoadedConfig, load_config, parse_config_content};
pub use resolve::{GenerateOptions, ResolvedGeneration, resolve, runtime_for};
