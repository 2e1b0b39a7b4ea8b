#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod balances;
mod checkpoints;
mod coordinator;
mod delegation;
mod error;
mod shared;

pub use balances::BalanceLedger;
pub use checkpoints::{Checkpoint, CheckpointStore};
pub use coordinator::{DelegationChange, PowerChange, VotingPowerCoordinator};
pub use delegation::DelegationRegistry;
pub use error::LedgerError;
pub use shared::SharedLedger;
