use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error("Insufficient balance: attempted to move {amount}, but balance is {balance}")]
    InsufficientBalance { balance: Uint128, amount: Uint128 },

    #[error("Voting power can only be looked up for past heights: requested {requested}, current height is {current}")]
    FutureLookup { requested: u64, current: u64 },

    #[error("Checkpoint height {requested} is older than the last recorded height {last}")]
    NonMonotonicSequence { last: u64, requested: u64 },

    #[error("Ledger lock poisoned by a panicked writer")]
    Poisoned {},
}

impl From<LedgerError> for StdError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Std(err) => err,
            err => StdError::generic_err(err.to_string()),
        }
    }
}
