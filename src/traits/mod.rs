pub mod analysis_server;
pub mod insights_publisher;
