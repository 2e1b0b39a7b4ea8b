use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use cosmwasm_std::{Addr, Storage, Uint128};

use crate::checkpoints::Checkpoint;
use crate::coordinator::{DelegationChange, PowerChange, VotingPowerCoordinator};
use crate::error::LedgerError;

/// A [`VotingPowerCoordinator`] and the storage it writes to, guarded for
/// use from multiple threads.
///
/// On chain the host executes one message at a time. Off chain nothing
/// does, so every mutating operation holds the write lock for its whole
/// duration and reads share the read lock. Readers never observe a
/// partially applied operation.
pub struct SharedLedger<'a, S> {
    coordinator: VotingPowerCoordinator<'a>,
    storage: RwLock<S>,
}

impl<'a, S: Storage> SharedLedger<'a, S> {
    pub fn new(coordinator: VotingPowerCoordinator<'a>, storage: S) -> Self {
        Self {
            coordinator,
            storage: RwLock::new(storage),
        }
    }

    pub fn transfer(
        &self,
        from: &Addr,
        to: &Addr,
        amount: Uint128,
        sequence: u64,
    ) -> Result<Vec<PowerChange>, LedgerError> {
        let mut storage = self.write()?;
        self.coordinator.transfer(&mut *storage, from, to, amount, sequence)
    }

    pub fn mint(
        &self,
        to: &Addr,
        amount: Uint128,
        sequence: u64,
    ) -> Result<Vec<PowerChange>, LedgerError> {
        let mut storage = self.write()?;
        self.coordinator.mint(&mut *storage, to, amount, sequence)
    }

    pub fn burn(
        &self,
        from: &Addr,
        amount: Uint128,
        sequence: u64,
    ) -> Result<Vec<PowerChange>, LedgerError> {
        let mut storage = self.write()?;
        self.coordinator.burn(&mut *storage, from, amount, sequence)
    }

    pub fn delegate(
        &self,
        account: &Addr,
        delegatee: Option<&Addr>,
        sequence: u64,
    ) -> Result<DelegationChange, LedgerError> {
        let mut storage = self.write()?;
        self.coordinator.delegate(&mut *storage, account, delegatee, sequence)
    }

    pub fn balance_of(&self, account: &Addr) -> Result<Uint128, LedgerError> {
        Ok(self.coordinator.balance_of(&*self.read()?, account)?)
    }

    pub fn total_supply(&self) -> Result<Uint128, LedgerError> {
        Ok(self.coordinator.total_supply(&*self.read()?)?)
    }

    pub fn delegate_of(&self, account: &Addr) -> Result<Option<Addr>, LedgerError> {
        Ok(self.coordinator.delegate_of(&*self.read()?, account)?)
    }

    pub fn current_power(&self, account: &Addr) -> Result<Uint128, LedgerError> {
        Ok(self.coordinator.current_power(&*self.read()?, account)?)
    }

    pub fn past_power(
        &self,
        account: &Addr,
        sequence: u64,
        current_sequence: u64,
    ) -> Result<Uint128, LedgerError> {
        self.coordinator.past_power(&*self.read()?, account, sequence, current_sequence)
    }

    pub fn past_total_supply(
        &self,
        sequence: u64,
        current_sequence: u64,
    ) -> Result<Uint128, LedgerError> {
        self.coordinator.past_total_supply(&*self.read()?, sequence, current_sequence)
    }

    pub fn checkpoints(
        &self,
        account: &Addr,
        start_after: Option<u32>,
        limit: u32,
    ) -> Result<Vec<Checkpoint>, LedgerError> {
        let storage = self.read()?;
        Ok(self.coordinator.checkpoints(&*storage, account, start_after, limit)?)
    }

    /// Consumes the ledger, returning the underlying storage.
    pub fn into_storage(self) -> Result<S, LedgerError> {
        self.storage.into_inner().map_err(|_| LedgerError::Poisoned {})
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, S>, LedgerError> {
        self.storage.read().map_err(|_| LedgerError::Poisoned {})
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, S>, LedgerError> {
        self.storage.write().map_err(|_| LedgerError::Poisoned {})
    }
}
