pub mod combiner;
pub mod matcher;
