pub mod annotation;
pub mod cli;
pub mod issue;
pub mod quality_gate;
pub mod report;
pub mod run_config;
