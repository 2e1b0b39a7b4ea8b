use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::{Cw20Coin, Expiration};
use cw_vote_checkpoints::Checkpoint;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Balances minted when the contract is instantiated. Initial
    /// balances carry no voting power until their holders delegate.
    pub initial_balances: Vec<Cw20Coin>,
    /// The address allowed to mint new tokens. Defaults to the
    /// instantiator.
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Transfer is a base message to move tokens to another account.
    /// Voting power moves from the sender's delegate to the recipient's.
    Transfer { recipient: String, amount: Uint128 },
    /// Transfers `amount` from `owner` to `recipient`, spending the
    /// sender's allowance.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Burns tokens held by the sender, removing them from the total supply
    /// and from the voting power of the sender's delegate.
    Burn { amount: Uint128 },
    /// Burns tokens held by `owner`, spending the sender's allowance.
    BurnFrom { owner: String, amount: Uint128 },
    /// Creates new tokens for `recipient`. Only the owner may mint.
    Mint { recipient: String, amount: Uint128 },
    /// Allows `spender` to access an additional `amount` of the sender's
    /// tokens. If `expires` is set it overwrites the previous expiration.
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Lowers the allowance of `spender` by `amount`, removing it if it
    /// reaches zero.
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Delegates the voting power of the sender's balance to `delegatee`.
    /// Delegate to yourself to vote with your own tokens.
    Delegate { delegatee: String },
    /// Clears the sender's delegation. Their balance no longer counts
    /// toward anyone's voting power.
    Undelegate {},
    /// Proposes a new owner, accepts a pending ownership transfer, or
    /// renounces ownership.
    UpdateOwnership(cw_ownable::Action),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the current balance of the given address, 0 if unset.
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },
    /// Returns metadata on the token: name, decimals, supply, etc.
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},
    /// Returns how much `spender` can use from `owner`'s account, 0 if
    /// unset.
    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },
    /// Returns the current delegate of the given address, if any.
    #[returns(DelegationResponse)]
    Delegation { address: String },
    /// Returns the voting power currently delegated to the given address.
    #[returns(VotingPowerResponse)]
    VotingPower { address: String },
    /// Returns the voting power delegated to the given address at the end
    /// of `height`. Errors unless `height` is below the current block
    /// height.
    #[returns(VotingPowerResponse)]
    PastVotingPower { address: String, height: u64 },
    /// Returns the total supply at the end of `height`. Errors unless
    /// `height` is below the current block height.
    #[returns(TotalSupplyResponse)]
    PastTotalSupply { height: u64 },
    /// Lists the voting power checkpoints of the given address in
    /// ascending height order. `start_after` is a checkpoint index.
    #[returns(CheckpointsResponse)]
    Checkpoints {
        address: String,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(::cw_ownable::Ownership<::cosmwasm_std::Addr>)]
    Ownership {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct DelegationResponse {
    pub delegate: Option<Addr>,
}

#[cw_serde]
pub struct VotingPowerResponse {
    pub power: Uint128,
    pub height: u64,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
    pub height: u64,
}

#[cw_serde]
pub struct CheckpointsResponse {
    /// Total number of checkpoints recorded for the address.
    pub count: u32,
    pub checkpoints: Vec<Checkpoint>,
}
