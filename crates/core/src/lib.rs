//! Cuppa
//!
//! Cuppa is a drink-ordering engine: a menu catalogue, customisation-aware pricing, loyalty point previews and printable order summaries.

pub mod cart;
pub mod customization;
pub mod events;
pub mod fixtures;
pub mod loyalty;
pub mod menu;
pub mod pricing;
pub mod receipt;
pub mod utils;
