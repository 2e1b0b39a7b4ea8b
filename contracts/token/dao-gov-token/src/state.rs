use cosmwasm_schema::cw_serde;
use cw_storage_plus::Item;
use cw_vote_checkpoints::VotingPowerCoordinator;

#[cw_serde]
/// Token metadata. The total supply lives in [`LEDGER`] so its history
/// can be queried.
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Balances, delegations and voting power checkpoints. Block height is
/// the sequence number for every checkpoint.
pub const LEDGER: VotingPowerCoordinator = VotingPowerCoordinator::new(
    "balance",
    "total_supply",
    "total_supply__checkpoints",
    "total_supply__changelog",
    "delegates",
    "voting_power__checkpoints",
    "voting_power__count",
    "last_height",
);
