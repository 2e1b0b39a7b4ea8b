use cosmwasm_std::{Deps, Env, StdResult};
use cw20::{BalanceResponse, TokenInfoResponse};

use crate::msg::{
    CheckpointsResponse, DelegationResponse, TotalSupplyResponse, VotingPowerResponse,
};
use crate::state::{LEDGER, TOKEN_INFO};

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = LEDGER.balance_of(deps.storage, &address)?;
    Ok(BalanceResponse { balance })
}

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: LEDGER.total_supply(deps.storage)?,
    })
}

pub fn query_delegation(deps: Deps, address: String) -> StdResult<DelegationResponse> {
    let address = deps.api.addr_validate(&address)?;
    let delegate = LEDGER.delegate_of(deps.storage, &address)?;
    Ok(DelegationResponse { delegate })
}

/// Voting power as of the latest checkpoint, including changes made
/// earlier in the current block.
pub fn query_voting_power(deps: Deps, env: Env, address: String) -> StdResult<VotingPowerResponse> {
    let address = deps.api.addr_validate(&address)?;
    let power = LEDGER.current_power(deps.storage, &address)?;
    Ok(VotingPowerResponse {
        power,
        height: env.block.height,
    })
}

pub fn query_past_voting_power(
    deps: Deps,
    env: Env,
    address: String,
    height: u64,
) -> StdResult<VotingPowerResponse> {
    let address = deps.api.addr_validate(&address)?;
    let power = LEDGER.past_power(deps.storage, &address, height, env.block.height)?;
    Ok(VotingPowerResponse { power, height })
}

pub fn query_past_total_supply(
    deps: Deps,
    env: Env,
    height: u64,
) -> StdResult<TotalSupplyResponse> {
    let total_supply = LEDGER.past_total_supply(deps.storage, height, env.block.height)?;
    Ok(TotalSupplyResponse {
        total_supply,
        height,
    })
}

pub fn query_checkpoints(
    deps: Deps,
    address: String,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<CheckpointsResponse> {
    let address = deps.api.addr_validate(&address)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    Ok(CheckpointsResponse {
        count: LEDGER.checkpoint_count(deps.storage, &address)?,
        checkpoints: LEDGER.checkpoints(deps.storage, &address, start_after, limit)?,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<cw_ownable::Ownership<::cosmwasm_std::Addr>> {
    cw_ownable::get_ownership(deps.storage)
}
