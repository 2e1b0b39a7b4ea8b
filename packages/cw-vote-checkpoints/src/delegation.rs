use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;

/// The delegate chosen by each address. An address without an entry has
/// no delegate and its balance carries no voting power.
pub struct DelegationRegistry<'a> {
    delegates: Map<'a, &'a Addr, Addr>,
}

impl<'a> DelegationRegistry<'a> {
    pub const fn new(delegates_key: &'a str) -> Self {
        Self {
            delegates: Map::new(delegates_key),
        }
    }

    pub fn delegate_of(&self, storage: &dyn Storage, account: &Addr) -> StdResult<Option<Addr>> {
        self.delegates.may_load(storage, account)
    }

    /// Overwrites the delegate of `account` and returns the previous one.
    /// `None` clears the delegation.
    pub fn set_delegate(
        &self,
        storage: &mut dyn Storage,
        account: &Addr,
        delegate: Option<&Addr>,
    ) -> StdResult<Option<Addr>> {
        let previous = self.delegate_of(storage, account)?;
        match delegate {
            Some(delegate) => self.delegates.save(storage, account, delegate)?,
            None => self.delegates.remove(storage, account),
        }
        Ok(previous)
    }
}
