use cosmwasm_std::StdError;
use cw_vote_checkpoints::LedgerError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Cw20(#[from] cw20_base::ContractError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Ownership(#[from] cw_ownable::OwnershipError),

    #[error("Invalid zero amount")]
    InvalidZeroAmount {},
}
