//! Reward accrual and settlement.
//!
//! Each staker accrues `rate × elapsed × stake / total_staked` reward units
//! between two settlements, where `elapsed` is measured in ledgers from the
//! staker's own `last_settled_at`. Settlement credits that amount to
//! `pending_rewards` and moves the marker to the current ledger, so settling
//! twice in the same ledger credits nothing the second time.

use soroban_sdk::{log, Address, Env};

use crate::rate;
use crate::registry::{self, StakerRecord};
use crate::ContractError;

/// Fixed-point scaling factor for a staker's share of the pool.
///
/// A share is stored as `stake × PRECISION / total_staked`, giving 12
/// decimal places without floating point.
pub const PRECISION: i128 = 1_000_000_000_000;

// ── Pure math ───────────────────────────────────────────────────────────────

/// Reward owed to a position of `stake` out of `total_staked` for `elapsed`
/// ledgers at `rate` units per ledger.
///
/// ```text
/// share = stake × PRECISION / total_staked
/// owed  = rate × elapsed × share / PRECISION
/// ```
///
/// Both divisions floor, so the engine can only under-pay; the lost fraction
/// is dust that is never minted. Returns `Some(0)` when there is nothing to
/// pay and `None` if an intermediate product overflows.
pub fn owed(stake: i128, total_staked: i128, rate: i128, elapsed: u32) -> Option<i128> {
    if elapsed == 0 || total_staked <= 0 || stake <= 0 || rate <= 0 {
        return Some(0);
    }
    let share = stake.checked_mul(PRECISION)?.checked_div(total_staked)?;
    rate.checked_mul(i128::from(elapsed))?
        .checked_mul(share)?
        .checked_div(PRECISION)
}

/// Bring `record` up to `now`, crediting what it is owed.
///
/// Returns the amount credited. A `now` at or before the last settlement
/// credits nothing; the marker never moves backwards.
pub fn settle_record(
    record: &mut StakerRecord,
    now: u32,
    total_staked: i128,
    rate: i128,
) -> Result<i128, ContractError> {
    let elapsed = now.saturating_sub(record.last_settled_at);
    let credit = owed(record.staked_amount, total_staked, rate, elapsed)
        .ok_or(ContractError::ArithmeticOverflow)?;

    if credit > 0 {
        record.pending_rewards = record
            .pending_rewards
            .checked_add(credit)
            .ok_or(ContractError::ArithmeticOverflow)?;
    }
    record.last_settled_at = record.last_settled_at.max(now);

    Ok(credit)
}

// ── Storage-backed settlement ───────────────────────────────────────────────

/// Settle one staker against the current pool total and rate and persist
/// the result. Returns the settled record.
pub fn settle_one(env: &Env, staker: &Address, now: u32) -> Result<StakerRecord, ContractError> {
    let mut record = registry::load(env, staker);
    let credit = settle_record(
        &mut record,
        now,
        registry::total_staked(env),
        rate::current(env),
    )?;
    registry::store(env, staker, &record);

    if credit > 0 {
        log!(env, "settled staker", staker.clone(), credit, now);
    }

    Ok(record)
}

/// Settle every active staker, in activation order, at `now`.
///
/// The pool total and the rate are read once up front and every staker is
/// settled against that snapshot, so the result does not depend on the
/// iteration order. Cost is linear in the number of active stakers.
///
/// Returns the number of stakers settled.
pub fn settle_all(env: &Env, now: u32) -> Result<u32, ContractError> {
    let total_staked = registry::total_staked(env);
    let rate = rate::current(env);
    let active = registry::active_stakers(env);

    let mut distributed: i128 = 0;
    for staker in active.iter() {
        let mut record = registry::load(env, &staker);
        let credit = settle_record(&mut record, now, total_staked, rate)?;
        registry::store(env, &staker, &record);
        distributed = distributed.saturating_add(credit);
    }

    log!(env, "settled all stakers", active.len(), distributed, now);

    Ok(active.len())
}

/// What `settle_one` would leave in `pending_rewards` at `now`, without
/// writing anything.
pub fn preview(env: &Env, staker: &Address, now: u32) -> Result<i128, ContractError> {
    let mut record = registry::load(env, staker);
    settle_record(
        &mut record,
        now,
        registry::total_staked(env),
        rate::current(env),
    )?;
    Ok(record.pending_rewards)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.
