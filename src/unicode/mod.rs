//! Unicode reference tables and the character database loader.
pub mod categories;
pub mod planes;
pub mod ucd;
