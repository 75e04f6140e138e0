pub mod annotation_builder;
pub mod report_builder;
