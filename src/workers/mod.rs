pub mod pipeline_runner;
