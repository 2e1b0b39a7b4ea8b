use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Map, SnapshotItem, Strategy};

use crate::error::LedgerError;

/// Current token balance per address along with the total supply. The
/// total supply is snapshotted every block so it can be read back at past
/// heights.
pub struct BalanceLedger<'a> {
    balances: Map<'a, &'a Addr, Uint128>,
    total_supply: SnapshotItem<'a, Uint128>,
}

impl<'a> BalanceLedger<'a> {
    pub const fn new(
        balances_key: &'a str,
        supply_key: &'a str,
        supply_checkpoints_key: &'a str,
        supply_changelog_key: &'a str,
    ) -> Self {
        Self {
            balances: Map::new(balances_key),
            total_supply: SnapshotItem::new(
                supply_key,
                supply_checkpoints_key,
                supply_changelog_key,
                Strategy::EveryBlock,
            ),
        }
    }

    /// Returns the balance of `account`, zero if it has never held
    /// tokens.
    pub fn balance_of(&self, storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
        Ok(self
            .balances
            .may_load(storage, account)?
            .unwrap_or_default())
    }

    /// Errors with `InsufficientBalance` if `account` can not cover
    /// `amount`. Performs no writes.
    pub fn ensure_covers(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<Uint128, LedgerError> {
        let balance = self.balance_of(storage, account)?;
        if balance < amount {
            return Err(LedgerError::InsufficientBalance { balance, amount });
        }
        Ok(balance)
    }

    /// Increases the balance of `account`. Keeping the total supply in
    /// step is the caller's responsibility.
    pub fn credit(
        &self,
        storage: &mut dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<Uint128, LedgerError> {
        let balance = self.balance_of(storage, account)?.checked_add(amount)?;
        self.balances.save(storage, account, &balance)?;
        Ok(balance)
    }

    /// Decreases the balance of `account`, failing without a write if the
    /// balance is too small.
    pub fn debit(
        &self,
        storage: &mut dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<Uint128, LedgerError> {
        let balance = self.ensure_covers(storage, account, amount)? - amount;
        if balance.is_zero() {
            self.balances.remove(storage, account);
        } else {
            self.balances.save(storage, account, &balance)?;
        }
        Ok(balance)
    }

    pub fn total_supply(&self, storage: &dyn Storage) -> StdResult<Uint128> {
        Ok(self.total_supply.may_load(storage)?.unwrap_or_default())
    }

    /// Total supply as of the end of `height`, inclusive of every change
    /// made at that height.
    pub fn total_supply_at(&self, storage: &dyn Storage, height: u64) -> StdResult<Uint128> {
        // Snapshots report the value at the start of a height.
        Ok(self
            .total_supply
            .may_load_at_height(storage, height.saturating_add(1))?
            .unwrap_or_default())
    }

    pub(crate) fn increase_supply(
        &self,
        storage: &mut dyn Storage,
        amount: Uint128,
        height: u64,
    ) -> Result<Uint128, LedgerError> {
        let supply = self.total_supply(storage)?.checked_add(amount)?;
        self.total_supply.save(storage, &supply, height)?;
        Ok(supply)
    }

    pub(crate) fn decrease_supply(
        &self,
        storage: &mut dyn Storage,
        amount: Uint128,
        height: u64,
    ) -> Result<Uint128, LedgerError> {
        let supply = self.total_supply(storage)?.checked_sub(amount)?;
        self.total_supply.save(storage, &supply, height)?;
        Ok(supply)
    }
}
