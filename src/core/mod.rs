pub mod confidence;
pub mod converter;
pub mod error;
