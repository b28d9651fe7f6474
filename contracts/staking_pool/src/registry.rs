//! Per-staker records, the pool-wide stake total and the ordered set of
//! active stakers.
//!
//! Records live in persistent storage under `(STAKER, address)` and are never
//! deleted: a staker that withdraws keeps its record (with a zero stake) so
//! any rewards still pending remain claimable. The total and the active set
//! live in instance storage alongside the rest of the pool state.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::ContractError;

const STAKER: Symbol = symbol_short!("STAKER");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");
const ACTIVE: Symbol = symbol_short!("ACTIVE");

const DAY_IN_LEDGERS: u32 = 17_280;
const RECORD_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;
const RECORD_TTL_THRESHOLD: u32 = RECORD_TTL_EXTEND_TO - DAY_IN_LEDGERS;

/// Accounting state of one participant.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerRecord {
    /// Stake asset currently deposited.
    pub staked_amount: i128,
    /// Reward asset owed but not yet claimed.
    pub pending_rewards: i128,
    /// Ledger sequence of the last settlement.
    pub last_settled_at: u32,
}

fn record_key(staker: &Address) -> (Symbol, Address) {
    (STAKER, staker.clone())
}

/// Load a staker's record; unknown stakers read as an all-zero record.
pub fn load(env: &Env, staker: &Address) -> StakerRecord {
    env.storage()
        .persistent()
        .get(&record_key(staker))
        .unwrap_or_default()
}

#[cfg(test)]
fn exists(env: &Env, staker: &Address) -> bool {
    env.storage().persistent().has(&record_key(staker))
}

pub fn store(env: &Env, staker: &Address, record: &StakerRecord) {
    let key = record_key(staker);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}

pub fn total_staked(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
}

pub fn active_stakers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&ACTIVE)
        .unwrap_or(Vec::new(env))
}

/// Credit `amount` to `staker`, keeping the total and the active set in step.
///
/// The staker must already be settled at the current ledger. Returns the new
/// pool total.
pub fn add_stake(
    env: &Env,
    staker: &Address,
    record: &mut StakerRecord,
    amount: i128,
) -> Result<i128, ContractError> {
    let was_active = record.staked_amount > 0;

    record.staked_amount = record
        .staked_amount
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let new_total = total_staked(env)
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    store(env, staker, record);
    env.storage().instance().set(&TOTAL_STAKED, &new_total);

    if !was_active {
        let mut active = active_stakers(env);
        if !active.contains(staker) {
            active.push_back(staker.clone());
            env.storage().instance().set(&ACTIVE, &active);
        }
    }

    Ok(new_total)
}

/// Zero `staker`'s stake and retire it from the active set.
///
/// Returns `(withdrawn_amount, new_total)`.
pub fn clear_stake(
    env: &Env,
    staker: &Address,
    record: &mut StakerRecord,
) -> Result<(i128, i128), ContractError> {
    let amount = record.staked_amount;
    if amount <= 0 {
        return Err(ContractError::NothingStaked);
    }

    record.staked_amount = 0;
    let new_total = total_staked(env)
        .checked_sub(amount)
        .filter(|t| *t >= 0)
        .ok_or(ContractError::ArithmeticOverflow)?;

    store(env, staker, record);
    env.storage().instance().set(&TOTAL_STAKED, &new_total);

    let active = active_stakers(env);
    if let Some(index) = active.first_index_of(staker) {
        let mut active = active;
        active.remove(index);
        env.storage().instance().set(&ACTIVE, &active);
    }

    Ok((amount, new_total))
}

/// Recount the pool from its records and confirm the stored total and the
/// active set agree with them.
///
/// O(n) in active stakers; meant for tests and off-chain audits.
pub fn check_invariants(env: &Env) -> bool {
    let active = active_stakers(env);
    let mut sum: i128 = 0;
    for (i, staker) in active.iter().enumerate() {
        if active.last_index_of(&staker) != Some(i as u32) {
            return false;
        }
        let record = load(env, &staker);
        if record.staked_amount <= 0 || record.pending_rewards < 0 {
            return false;
        }
        sum = match sum.checked_add(record.staked_amount) {
            Some(s) => s,
            None => return false,
        };
    }
    sum == total_staked(env)
}
