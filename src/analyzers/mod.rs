//! Aggregation and classification of collected records.
//!
//! The calorie pipeline totals meals and compares them to a daily limit;
//! the gradebook pipeline assigns letter grades, counts them and splits
//! students into passed and failed.

pub mod aggregate;
pub mod grade;
pub mod limit;
pub mod types;
pub mod utility;
