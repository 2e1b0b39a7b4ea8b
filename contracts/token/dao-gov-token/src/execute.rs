use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use cw20_base::allowances::deduct_allowance;

use crate::error::ContractError;
use crate::helpers::{check_non_zero, power_change_events};
use crate::state::LEDGER;

pub fn transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    check_non_zero(amount)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let changes = LEDGER.transfer(
        deps.storage,
        &info.sender,
        &recipient,
        amount,
        env.block.height,
    )?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_events(power_change_events(changes)))
}

pub fn transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    check_non_zero(amount)?;
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    // a failed ledger update reverts the deduction with the rest of the tx
    deduct_allowance(deps.storage, &owner, &info.sender, &env.block, amount)?;
    let changes = LEDGER.transfer(deps.storage, &owner, &recipient, amount, env.block.height)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount)
        .add_events(power_change_events(changes)))
}

pub fn burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    check_non_zero(amount)?;

    let changes = LEDGER.burn(deps.storage, &info.sender, amount, env.block.height)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount)
        .add_events(power_change_events(changes)))
}

pub fn burn_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    check_non_zero(amount)?;
    let owner = deps.api.addr_validate(&owner)?;

    deduct_allowance(deps.storage, &owner, &info.sender, &env.block, amount)?;
    let changes = LEDGER.burn(deps.storage, &owner, amount, env.block.height)?;

    Ok(Response::new()
        .add_attribute("action", "burn_from")
        .add_attribute("from", owner)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount)
        .add_events(power_change_events(changes)))
}

pub fn mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;
    check_non_zero(amount)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let changes = LEDGER.mint(deps.storage, &recipient, amount, env.block.height)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_events(power_change_events(changes)))
}

pub fn delegate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    delegatee: String,
) -> Result<Response, ContractError> {
    let delegatee = deps.api.addr_validate(&delegatee)?;

    let change = LEDGER.delegate(
        deps.storage,
        &info.sender,
        Some(&delegatee),
        env.block.height,
    )?;

    Ok(Response::new()
        .add_attribute("action", "delegate")
        .add_attribute("delegator", change.delegator)
        .add_attribute("delegatee", delegatee)
        .add_attribute("amount", change.moved)
        .add_events(power_change_events(change.changes)))
}

pub fn undelegate(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let change = LEDGER.delegate(deps.storage, &info.sender, None, env.block.height)?;

    let mut response = Response::new()
        .add_attribute("action", "undelegate")
        .add_attribute("delegator", change.delegator)
        .add_attribute("amount", change.moved);
    if let Some(previous) = change.previous {
        response = response.add_attribute("previous_delegate", previous);
    }
    Ok(response.add_events(power_change_events(change.changes)))
}

pub fn update_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: cw_ownable::Action,
) -> Result<Response, ContractError> {
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
    Ok(Response::new().add_attributes(ownership.into_attributes()))
}
