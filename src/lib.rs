pub mod analyzers;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod records;
pub mod report;
pub mod session;
pub mod stats;
pub mod validate;
