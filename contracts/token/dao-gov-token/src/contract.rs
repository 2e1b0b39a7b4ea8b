#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version, ContractVersion};

use crate::error::ContractError;
use crate::execute;
use crate::helpers::validate_instantiate_msg;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::queries;
use crate::state::{TokenInfo, LEDGER, TOKEN_INFO};

pub(crate) const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    validate_instantiate_msg(&msg)?;

    let owner = msg.owner.as_deref().unwrap_or(info.sender.as_str());
    let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(owner))?;

    // Nobody has delegated yet, so this writes no checkpoints.
    for coin in msg.initial_balances.iter() {
        let holder = deps.api.addr_validate(&coin.address)?;
        LEDGER.mint(deps.storage, &holder, coin.amount, env.block.height)?;
    }

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
        },
    )?;

    let total_supply: Uint128 = LEDGER.total_supply(deps.storage)?;
    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("total_supply", total_supply)
        .add_attributes(ownership.into_attributes()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute::transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute::transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::Burn { amount } => execute::burn(deps, env, info, amount),
        ExecuteMsg::BurnFrom { owner, amount } => {
            execute::burn_from(deps, env, info, owner, amount)
        }
        ExecuteMsg::Mint { recipient, amount } => {
            execute::mint(deps, env, info, recipient, amount)
        }
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(cw20_base::allowances::execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(cw20_base::allowances::execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::Delegate { delegatee } => execute::delegate(deps, env, info, delegatee),
        ExecuteMsg::Undelegate {} => execute::undelegate(deps, env, info),
        ExecuteMsg::UpdateOwnership(action) => {
            execute::update_ownership(deps, env, info, action)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&queries::query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&queries::query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&cw20_base::allowances::query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Delegation { address } => {
            to_json_binary(&queries::query_delegation(deps, address)?)
        }
        QueryMsg::VotingPower { address } => {
            to_json_binary(&queries::query_voting_power(deps, env, address)?)
        }
        QueryMsg::PastVotingPower { address, height } => to_json_binary(
            &queries::query_past_voting_power(deps, env, address, height)?,
        ),
        QueryMsg::PastTotalSupply { height } => {
            to_json_binary(&queries::query_past_total_supply(deps, env, height)?)
        }
        QueryMsg::Checkpoints {
            address,
            start_after,
            limit,
        } => to_json_binary(&queries::query_checkpoints(
            deps,
            address,
            start_after,
            limit,
        )?),
        QueryMsg::Ownership {} => to_json_binary(&queries::query_owner(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let storage_version: ContractVersion = get_contract_version(deps.storage)?;

    // Only migrate if newer
    if storage_version.version.as_str() < CONTRACT_VERSION {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new().add_attribute("action", "migrate"))
}
