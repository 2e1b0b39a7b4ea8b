use cosmwasm_std::{Event, Uint128};
use cw20_base::contract::validate_accounts;
use cw20_base::msg::InstantiateMsg as Cw20InstantiateMsg;
use cw_vote_checkpoints::PowerChange;

use crate::msg::InstantiateMsg;
use crate::ContractError;

/// Checks name, symbol and decimals the way cw20-base does, and rejects
/// initial balances that list an address twice.
pub fn validate_instantiate_msg(msg: &InstantiateMsg) -> Result<(), ContractError> {
    Cw20InstantiateMsg {
        name: msg.name.clone(),
        symbol: msg.symbol.clone(),
        decimals: msg.decimals,
        initial_balances: vec![],
        mint: None,
        marketing: None,
    }
    .validate()?;
    validate_accounts(&msg.initial_balances)?;
    Ok(())
}

pub fn check_non_zero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        Err(ContractError::InvalidZeroAmount {})
    } else {
        Ok(())
    }
}

/// One `delegate_votes_changed` event per checkpoint written.
pub fn power_change_events(changes: Vec<PowerChange>) -> Vec<Event> {
    changes
        .into_iter()
        .map(|change| {
            Event::new("delegate_votes_changed")
                .add_attribute("delegate", change.delegate)
                .add_attribute("previous_power", change.previous)
                .add_attribute("new_power", change.current)
        })
        .collect()
}
