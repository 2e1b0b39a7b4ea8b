use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::Map;

use crate::error::LedgerError;

/// The voting power held by an address as of a height, in effect until
/// the next checkpoint for that address.
#[cw_serde]
#[derive(Copy)]
pub struct Checkpoint {
    pub sequence: u64,
    pub power: Uint128,
}

/// Append-only voting power history per address.
///
/// Each address owns a growable array of checkpoints stored at dense
/// indices `0..count`. Heights within one array are strictly increasing:
/// a second write at the height of the last checkpoint overwrites it in
/// place instead of appending, so there is at most one checkpoint per
/// height. This makes [`CheckpointStore::power_at`] a binary search over
/// the address' own history.
pub struct CheckpointStore<'a> {
    checkpoints: Map<'a, (&'a Addr, u32), Checkpoint>,
    counts: Map<'a, &'a Addr, u32>,
}

impl<'a> CheckpointStore<'a> {
    pub const fn new(checkpoints_key: &'a str, counts_key: &'a str) -> Self {
        Self {
            checkpoints: Map::new(checkpoints_key),
            counts: Map::new(counts_key),
        }
    }

    /// Records that `account` holds `power` as of `sequence`.
    ///
    /// Coalesces with the last checkpoint when it has the same sequence,
    /// appends when `sequence` is newer, and refuses to rewrite history
    /// when `sequence` is older than the last checkpoint.
    pub fn record_power(
        &self,
        storage: &mut dyn Storage,
        account: &Addr,
        sequence: u64,
        power: Uint128,
    ) -> Result<(), LedgerError> {
        let count = self.checkpoint_count(storage, account)?;
        let checkpoint = Checkpoint { sequence, power };

        if let Some(last) = self.last_checkpoint(storage, account, count)? {
            if sequence < last.sequence {
                return Err(LedgerError::NonMonotonicSequence {
                    last: last.sequence,
                    requested: sequence,
                });
            }
            if sequence == last.sequence {
                self.checkpoints.save(storage, (account, count - 1), &checkpoint)?;
                return Ok(());
            }
        }

        self.checkpoints.save(storage, (account, count), &checkpoint)?;
        self.counts.save(storage, account, &(count + 1))?;
        Ok(())
    }

    /// The power of the most recent checkpoint, zero if `account` has no
    /// history.
    pub fn current_power(&self, storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
        let count = self.checkpoint_count(storage, account)?;
        Ok(self
            .last_checkpoint(storage, account, count)?
            .map(|checkpoint| checkpoint.power)
            .unwrap_or_default())
    }

    /// The power `account` held at the end of `sequence`.
    ///
    /// Only settled history may be read: `sequence` must be strictly less
    /// than `current_sequence`, otherwise this errors with
    /// `FutureLookup`.
    pub fn power_at(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        sequence: u64,
        current_sequence: u64,
    ) -> Result<Uint128, LedgerError> {
        if sequence >= current_sequence {
            return Err(LedgerError::FutureLookup {
                requested: sequence,
                current: current_sequence,
            });
        }

        let count = self.checkpoint_count(storage, account)?;
        match self.last_checkpoint(storage, account, count)? {
            None => return Ok(Uint128::zero()),
            // Most lookups are for recent heights, skip the search.
            Some(last) if last.sequence <= sequence => return Ok(last.power),
            Some(_) => (),
        }

        // Find the first checkpoint newer than `sequence`. The one before
        // it, if any, is in effect at `sequence`.
        let (mut low, mut high) = (0u32, count);
        while low < high {
            let mid = low + (high - low) / 2;
            if self.load_checkpoint(storage, account, mid)?.sequence > sequence {
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        if high == 0 {
            Ok(Uint128::zero())
        } else {
            Ok(self.load_checkpoint(storage, account, high - 1)?.power)
        }
    }

    pub fn checkpoint_count(&self, storage: &dyn Storage, account: &Addr) -> StdResult<u32> {
        Ok(self.counts.may_load(storage, account)?.unwrap_or_default())
    }

    pub fn checkpoint(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        index: u32,
    ) -> StdResult<Option<Checkpoint>> {
        self.checkpoints.may_load(storage, (account, index))
    }

    /// Pages through the history of `account` in ascending order, starting
    /// after the checkpoint index `start_after`.
    pub fn checkpoints(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        start_after: Option<u32>,
        limit: u32,
    ) -> StdResult<Vec<Checkpoint>> {
        let count = self.checkpoint_count(storage, account)?;
        let start = start_after.map_or(0, |index| index.saturating_add(1));
        let end = start.saturating_add(limit).min(count);
        (start..end)
            .map(|index| self.load_checkpoint(storage, account, index))
            .collect()
    }

    fn last_checkpoint(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        count: u32,
    ) -> StdResult<Option<Checkpoint>> {
        match count {
            0 => Ok(None),
            count => self.load_checkpoint(storage, account, count - 1).map(Some),
        }
    }

    fn load_checkpoint(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        index: u32,
    ) -> StdResult<Checkpoint> {
        self.checkpoints.load(storage, (account, index))
    }
}
