use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::Item;

use crate::balances::BalanceLedger;
use crate::checkpoints::{Checkpoint, CheckpointStore};
use crate::delegation::DelegationRegistry;
use crate::error::LedgerError;

/// A checkpoint written for a delegate as the result of an operation.
#[cw_serde]
pub struct PowerChange {
    pub delegate: Addr,
    pub previous: Uint128,
    pub current: Uint128,
}

/// The outcome of a delegation change.
#[cw_serde]
pub struct DelegationChange {
    pub delegator: Addr,
    pub previous: Option<Addr>,
    pub delegatee: Option<Addr>,
    /// The delegator's balance, which moved from `previous` to
    /// `delegatee`.
    pub moved: Uint128,
    pub changes: Vec<PowerChange>,
}

/// Applies balance and delegation changes and keeps voting power in step
/// with them.
///
/// For every address `d`, `current_power(d)` is the sum of the balances of
/// the addresses currently delegating to `d`. Delegation is single-hop.
///
/// Operations validate every precondition before writing, so an
/// operation that errors has not modified storage. Operations must be
/// applied one at a time in non-decreasing `sequence` order; use
/// [`crate::SharedLedger`] where nothing else serializes access.
pub struct VotingPowerCoordinator<'a> {
    balances: BalanceLedger<'a>,
    delegations: DelegationRegistry<'a>,
    checkpoints: CheckpointStore<'a>,
    last_sequence: Item<'a, u64>,
}

impl<'a> VotingPowerCoordinator<'a> {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        balances_key: &'a str,
        supply_key: &'a str,
        supply_checkpoints_key: &'a str,
        supply_changelog_key: &'a str,
        delegates_key: &'a str,
        checkpoints_key: &'a str,
        checkpoint_counts_key: &'a str,
        last_sequence_key: &'a str,
    ) -> Self {
        Self {
            balances: BalanceLedger::new(
                balances_key,
                supply_key,
                supply_checkpoints_key,
                supply_changelog_key,
            ),
            delegations: DelegationRegistry::new(delegates_key),
            checkpoints: CheckpointStore::new(checkpoints_key, checkpoint_counts_key),
            last_sequence: Item::new(last_sequence_key),
        }
    }

    /// Moves `amount` of tokens from `from` to `to` and the matching voting
    /// power from the delegate of `from` to the delegate of `to`.
    pub fn transfer(
        &self,
        storage: &mut dyn Storage,
        from: &Addr,
        to: &Addr,
        amount: Uint128,
        sequence: u64,
    ) -> Result<Vec<PowerChange>, LedgerError> {
        self.ensure_sequence(storage, sequence)?;
        self.balances.ensure_covers(storage, from, amount)?;

        self.balances.debit(storage, from, amount)?;
        self.balances.credit(storage, to, amount)?;

        let from_delegate = self.delegations.delegate_of(storage, from)?;
        let to_delegate = self.delegations.delegate_of(storage, to)?;
        let changes = self.move_voting_power(
            storage,
            from_delegate.as_ref(),
            to_delegate.as_ref(),
            amount,
            sequence,
        )?;

        self.last_sequence.save(storage, &sequence)?;
        Ok(changes)
    }

    /// Creates `amount` new tokens for `to`, crediting voting power to its
    /// delegate. Authorizing the caller is left to the caller.
    pub fn mint(
        &self,
        storage: &mut dyn Storage,
        to: &Addr,
        amount: Uint128,
        sequence: u64,
    ) -> Result<Vec<PowerChange>, LedgerError> {
        self.ensure_sequence(storage, sequence)?;
        // Every balance and every delegate's power is bounded by the
        // supply, so nothing below can overflow once this holds.
        self.balances.total_supply(storage)?.checked_add(amount)?;

        self.balances.credit(storage, to, amount)?;
        self.balances.increase_supply(storage, amount, sequence)?;

        let to_delegate = self.delegations.delegate_of(storage, to)?;
        let changes =
            self.move_voting_power(storage, None, to_delegate.as_ref(), amount, sequence)?;

        self.last_sequence.save(storage, &sequence)?;
        Ok(changes)
    }

    /// Destroys `amount` tokens held by `from`, debiting voting power from
    /// its delegate.
    pub fn burn(
        &self,
        storage: &mut dyn Storage,
        from: &Addr,
        amount: Uint128,
        sequence: u64,
    ) -> Result<Vec<PowerChange>, LedgerError> {
        self.ensure_sequence(storage, sequence)?;
        self.balances.ensure_covers(storage, from, amount)?;

        self.balances.debit(storage, from, amount)?;
        self.balances.decrease_supply(storage, amount, sequence)?;

        let from_delegate = self.delegations.delegate_of(storage, from)?;
        let changes =
            self.move_voting_power(storage, from_delegate.as_ref(), None, amount, sequence)?;

        self.last_sequence.save(storage, &sequence)?;
        Ok(changes)
    }

    /// Points the voting power of `account` at `delegatee`, or at nobody
    /// if `delegatee` is `None`. The whole balance of `account` moves from
    /// its previous delegate to the new one.
    pub fn delegate(
        &self,
        storage: &mut dyn Storage,
        account: &Addr,
        delegatee: Option<&Addr>,
        sequence: u64,
    ) -> Result<DelegationChange, LedgerError> {
        self.ensure_sequence(storage, sequence)?;

        let previous = self.delegations.set_delegate(storage, account, delegatee)?;
        let moved = self.balances.balance_of(storage, account)?;
        let changes =
            self.move_voting_power(storage, previous.as_ref(), delegatee, moved, sequence)?;

        self.last_sequence.save(storage, &sequence)?;
        Ok(DelegationChange {
            delegator: account.clone(),
            previous,
            delegatee: delegatee.cloned(),
            moved,
            changes,
        })
    }

    pub fn balance_of(&self, storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
        self.balances.balance_of(storage, account)
    }

    pub fn total_supply(&self, storage: &dyn Storage) -> StdResult<Uint128> {
        self.balances.total_supply(storage)
    }

    /// Total supply at the end of `sequence`. Like [`Self::past_power`],
    /// `sequence` must be strictly below `current_sequence`.
    pub fn past_total_supply(
        &self,
        storage: &dyn Storage,
        sequence: u64,
        current_sequence: u64,
    ) -> Result<Uint128, LedgerError> {
        if sequence >= current_sequence {
            return Err(LedgerError::FutureLookup {
                requested: sequence,
                current: current_sequence,
            });
        }
        Ok(self.balances.total_supply_at(storage, sequence)?)
    }

    pub fn delegate_of(&self, storage: &dyn Storage, account: &Addr) -> StdResult<Option<Addr>> {
        self.delegations.delegate_of(storage, account)
    }

    pub fn current_power(&self, storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
        self.checkpoints.current_power(storage, account)
    }

    pub fn past_power(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        sequence: u64,
        current_sequence: u64,
    ) -> Result<Uint128, LedgerError> {
        self.checkpoints.power_at(storage, account, sequence, current_sequence)
    }

    pub fn checkpoint_count(&self, storage: &dyn Storage, account: &Addr) -> StdResult<u32> {
        self.checkpoints.checkpoint_count(storage, account)
    }

    pub fn checkpoints(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        start_after: Option<u32>,
        limit: u32,
    ) -> StdResult<Vec<Checkpoint>> {
        self.checkpoints.checkpoints(storage, account, start_after, limit)
    }

    /// The sequence of the most recently applied operation, if any.
    pub fn last_sequence(&self, storage: &dyn Storage) -> StdResult<Option<u64>> {
        self.last_sequence.may_load(storage)
    }

    fn ensure_sequence(&self, storage: &dyn Storage, sequence: u64) -> Result<(), LedgerError> {
        match self.last_sequence.may_load(storage)? {
            Some(last) if sequence < last => Err(LedgerError::NonMonotonicSequence {
                last,
                requested: sequence,
            }),
            _ => Ok(()),
        }
    }

    fn move_voting_power(
        &self,
        storage: &mut dyn Storage,
        from: Option<&Addr>,
        to: Option<&Addr>,
        amount: Uint128,
        sequence: u64,
    ) -> Result<Vec<PowerChange>, LedgerError> {
        let mut changes = vec![];
        if from == to || amount.is_zero() {
            return Ok(changes);
        }

        if let Some(delegate) = from {
            let previous = self.checkpoints.current_power(storage, delegate)?;
            let current = previous.checked_sub(amount)?;
            self.checkpoints.record_power(storage, delegate, sequence, current)?;
            changes.push(PowerChange {
                delegate: delegate.clone(),
                previous,
                current,
            });
        }

        if let Some(delegate) = to {
            let previous = self.checkpoints.current_power(storage, delegate)?;
            let current = previous.checked_add(amount)?;
            self.checkpoints.record_power(storage, delegate, sequence, current)?;
            changes.push(PowerChange {
                delegate: delegate.clone(),
                previous,
                current,
            });
        }

        Ok(changes)
    }
}
