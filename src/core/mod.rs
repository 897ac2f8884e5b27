pub mod cache;
pub mod engine;
pub mod order;
pub mod ranker;
pub mod types;
