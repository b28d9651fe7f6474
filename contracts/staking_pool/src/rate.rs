use soroban_sdk::{symbol_short, Env, Symbol};

use crate::ContractError;

const REWARD_RATE: Symbol = symbol_short!("RWD_RATE");

/// One whole token in the 7-decimal Stellar asset representation.
pub const UNIT: i128 = 10_000_000;

/// Lowest accepted emission rate: 0.1 token per ledger.
pub const MIN_RATE: i128 = UNIT / 10;

/// Highest accepted emission rate: 5 tokens per ledger.
pub const MAX_RATE: i128 = 5 * UNIT;

/// Check `rate` against `[MIN_RATE, MAX_RATE]`; both bounds are inclusive.
pub fn validate(rate: i128) -> Result<(), ContractError> {
    if rate < MIN_RATE {
        return Err(ContractError::BelowMinimum);
    }
    if rate > MAX_RATE {
        return Err(ContractError::AboveMaximum);
    }
    Ok(())
}

/// Current emission rate, in reward units per ledger.
pub fn current(env: &Env) -> i128 {
    env.storage().instance().get(&REWARD_RATE).unwrap_or(0)
}

/// Validate and store a new rate, returning the previous one.
///
/// Stakers are not resettled here. Each staker's next settlement measures
/// from its own `last_settled_at`, so the stored rate is what applies to that
/// whole interval; owners who want the old rate honoured for time already
/// elapsed run a distribution first.
pub fn set(env: &Env, new_rate: i128) -> Result<i128, ContractError> {
    validate(new_rate)?;
    let old_rate = current(env);
    env.storage().instance().set(&REWARD_RATE, &new_rate);
    Ok(old_rate)
}
