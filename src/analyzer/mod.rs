//! Analyzer construction and the aggregation engine.

mod builder;
mod engine;

pub use builder::{Huginn, HuginnBuilder};
pub use engine::Analyzer;
