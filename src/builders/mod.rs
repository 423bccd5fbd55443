//! Builders to construct lots from configuration.

pub mod lot_builder;

pub use lot_builder::LotBuilder;
