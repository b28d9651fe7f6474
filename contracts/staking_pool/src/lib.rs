#![no_std]

pub mod accrual;
pub mod events;
pub mod fee;
pub mod rate;
pub mod registry;

use common::authority;
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol, Vec,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const CONFIG: Symbol = symbol_short!("CONFIG");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_TTL_EXTEND_TO: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_EXTEND_TO - DAY_IN_LEDGERS;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    TransferFailed = 5,
    NothingStaked = 6,
    NoRewards = 7,
    BelowMinimum = 8,
    AboveMaximum = 9,
    TokensIdentical = 10,
    ArithmeticOverflow = 11,
    NoPendingAdmin = 12,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Token wiring and fee routing, fixed at `initialize` except for the fee
/// sink, which the owner may redirect.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Token users deposit (the LP token).
    pub stake_token: Address,
    /// Token paid out as rewards. The pool must be its mint admin.
    pub reward_token: Address,
    /// Receives the protocol fee taken on every claim.
    pub fee_sink: Address,
}

/// Snapshot of a staker's stored position returned by `staker_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerInfo {
    pub staked_amount: i128,
    pub last_settled_at: u32,
    pub pending_rewards: i128,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPoolContract;

#[contractimpl]
impl StakingPoolContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `admin`        – owner of the pool and initial fee sink.
    /// * `stake_token`  – token users deposit.
    /// * `reward_token` – token minted as rewards; the pool must be its admin.
    /// * `reward_rate`  – reward units emitted **per ledger** across all stakers.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        reward_rate: i128,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }
        rate::set(&env, reward_rate)?;

        let config = PoolConfig {
            stake_token: stake_token.clone(),
            reward_token: reward_token.clone(),
            fee_sink: admin.clone(),
        };
        env.storage().instance().set(&CONFIG, &config);
        env.storage().instance().set(&INITIALIZED, &true);
        authority::set_owner(&env, &admin);
        Self::extend_instance_ttl(&env);

        events::publish_initialized(&env, admin, stake_token, reward_token, reward_rate);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens.
    ///
    /// The pool pulls the tokens with `transfer_from`, so the staker must
    /// first approve the pool as spender. The staker is settled against the
    /// pool total as it stood before this deposit.
    pub fn deposit(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().sequence();
        let mut record = accrual::settle_one(&env, &staker, now)?;

        let config = Self::load_config(&env)?;
        let pool = env.current_contract_address();
        let pulled = token::Client::new(&env, &config.stake_token).try_transfer_from(
            &pool,
            &staker,
            &pool,
            &amount,
        );
        if !matches!(pulled, Ok(Ok(()))) {
            return Err(ContractError::TransferFailed);
        }

        let new_total = registry::add_stake(&env, &staker, &mut record, amount)?;
        Self::extend_instance_ttl(&env);

        events::publish_deposit(&env, staker, amount, new_total);

        Ok(())
    }

    /// Withdraw the caller's entire stake. Pending rewards stay claimable.
    ///
    /// Returns the amount of stake token sent back.
    pub fn withdraw(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if registry::load(&env, &staker).staked_amount <= 0 {
            return Err(ContractError::NothingStaked);
        }

        let now = env.ledger().sequence();
        let mut record = accrual::settle_one(&env, &staker, now)?;
        let (amount, new_total) = registry::clear_stake(&env, &staker, &mut record)?;

        let config = Self::load_config(&env)?;
        let returned = token::Client::new(&env, &config.stake_token).try_transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );
        if !matches!(returned, Ok(Ok(()))) {
            return Err(ContractError::TransferFailed);
        }
        Self::extend_instance_ttl(&env);

        events::publish_withdraw(&env, staker, amount, new_total);

        Ok(amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Claim all pending rewards, net of the protocol fee.
    ///
    /// The net amount is minted to the staker and the fee to the fee sink.
    /// If either mint is rejected the claim fails as a whole and the pending
    /// balance is left untouched. Returns the net amount.
    pub fn claim_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().sequence();
        let mut record = accrual::settle_one(&env, &staker, now)?;

        let pending = record.pending_rewards;
        if pending <= 0 {
            return Err(ContractError::NoRewards);
        }
        let (net, fee_amount) = fee::apply(pending);

        record.pending_rewards = 0;
        registry::store(&env, &staker, &record);

        let config = Self::load_config(&env)?;
        let reward = token::StellarAssetClient::new(&env, &config.reward_token);
        if net > 0 && !matches!(reward.try_mint(&staker, &net), Ok(Ok(()))) {
            return Err(ContractError::TransferFailed);
        }
        if fee_amount > 0 && !matches!(reward.try_mint(&config.fee_sink, &fee_amount), Ok(Ok(())))
        {
            return Err(ContractError::TransferFailed);
        }
        Self::extend_instance_ttl(&env);

        events::publish_rewards_claimed(&env, staker, net, fee_amount);

        Ok(net)
    }

    /// Settle every active staker at the current ledger.
    ///
    /// Iterates the whole active set, so its cost grows linearly with the
    /// number of stakers. Owner only. Returns the number of stakers settled.
    pub fn distribute_rewards_all(env: Env, caller: Address) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let settled = accrual::settle_all(&env, env.ledger().sequence())?;
        Self::extend_instance_ttl(&env);

        events::publish_rewards_distributed(&env, settled);

        Ok(settled)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Update the reward emission rate. Owner only.
    ///
    /// Rejects rates outside `[MIN_RATE, MAX_RATE]`. Existing stakers are not
    /// resettled; see [`rate::set`].
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let old_rate = rate::set(&env, new_rate)?;
        Self::extend_instance_ttl(&env);

        events::publish_rate_set(&env, old_rate, new_rate);

        Ok(())
    }

    /// Redirect protocol fees to `fee_sink`. Owner only.
    pub fn set_fee_sink(env: Env, caller: Address, fee_sink: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let mut config = Self::load_config(&env)?;
        config.fee_sink = fee_sink.clone();
        env.storage().instance().set(&CONFIG, &config);

        events::publish_fee_sink_set(&env, fee_sink);

        Ok(())
    }

    // ── Owner transfer (two-step) ──────────────────────────────────────────

    /// Propose a new owner. The proposed address must call `accept_admin`.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_owner(&env, &current_admin)?;

        env.storage().instance().set(&PENDING_ADMIN, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept a pending ownership transfer. Fees keep flowing to the current
    /// fee sink until the new owner changes it.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::NoPendingAdmin)?;
        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin = authority::get_owner(&env).ok_or(ContractError::NotInitialized)?;
        if !authority::transfer_owner(&env, &old_admin, &new_admin) {
            return Err(ContractError::Unauthorized);
        }
        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_owner(&env, &current_admin)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::NoPendingAdmin)?;
        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_ADMIN)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Stored position of `staker`, as of its last settlement.
    pub fn staker_info(env: Env, staker: Address) -> StakerInfo {
        let record = registry::load(&env, &staker);
        StakerInfo {
            staked_amount: record.staked_amount,
            last_settled_at: record.last_settled_at,
            pending_rewards: record.pending_rewards,
        }
    }

    /// Pending rewards `staker` would hold if settled at the current ledger.
    pub fn get_pending_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        accrual::preview(&env, &staker, env.ledger().sequence())
    }

    /// Current reward rate, in reward units per ledger.
    pub fn current_rate(env: Env) -> i128 {
        rate::current(&env)
    }

    pub fn rate_bounds(_env: Env) -> (i128, i128) {
        (rate::MIN_RATE, rate::MAX_RATE)
    }

    pub fn fee_bps(_env: Env) -> i128 {
        fee::FEE_BPS
    }

    pub fn get_total_staked(env: Env) -> i128 {
        registry::total_staked(&env)
    }

    /// Stakers with a non-zero stake, in activation order.
    pub fn get_active_stakers(env: Env) -> Vec<Address> {
        registry::active_stakers(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, ContractError> {
        Self::load_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        authority::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !authority::is_owner(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn load_config(env: &Env) -> Result<PoolConfig, ContractError> {
        env.storage()
            .instance()
            .get(&CONFIG)
            .ok_or(ContractError::NotInitialized)
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
