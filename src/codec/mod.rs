pub mod record_keys;

pub mod codec_error;
pub use codec_error::*;

pub mod config;
pub use config::*;

pub mod serializing_visitor;
pub use serializing_visitor::*;

pub mod expression_builder;
pub use expression_builder::*;

pub mod criteria_serializer;
pub use criteria_serializer::*;

#[cfg(test)]
mod _tests;
