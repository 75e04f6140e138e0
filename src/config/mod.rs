pub mod config_resolver;
pub mod constants;
