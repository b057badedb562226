pub mod config;
pub mod core;
pub mod dictionary;
pub mod morphology;
pub mod rules;

pub use crate::config::ConverterConfig;
pub use crate::core::confidence::{ConfidenceBreakdown, ConfidenceTier};
pub use crate::core::converter::{
    convert, ConversionResult, DetailedConversion, KslConverter, WordMapping,
};
pub use crate::core::error::ConvertError;
pub use crate::dictionary::{Dictionary, DictionaryError};
pub use crate::rules::{analyze_sentence, SentenceType};
