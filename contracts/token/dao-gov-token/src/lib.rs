#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// The instantiate, execute, query and migrate entry points
pub mod contract;
mod error;
/// Contract methods that alter state
pub mod execute;
/// Validation and response helpers
pub mod helpers;
pub mod msg;
/// Contract queries
pub mod queries;
pub mod state;


pub use crate::error::ContractError;
