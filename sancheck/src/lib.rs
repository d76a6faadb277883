pub mod reader;
pub mod report;
