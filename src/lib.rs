// src/lib.rs

pub mod clock;
pub mod config;
pub mod core;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod initializer;
pub mod learning;
pub mod persistence;
pub mod store;
pub mod unicode;

pub use crate::core::engine::CharacterService;
pub use crate::error::{Error, Result};
pub use crate::initializer::DataInitializer;
pub use crate::store::{RootDataStore, SettingsStore};
