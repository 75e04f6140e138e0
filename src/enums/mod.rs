pub mod report_result;
pub mod severity;
