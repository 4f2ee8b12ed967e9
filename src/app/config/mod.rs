mod load_config;

pub use load_config::{CONFIG_FILE, LoadedConfig, load_config};
