#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, String};

/// Summary text carried by every bulk distribution notification.
pub const DISTRIBUTION_SUMMARY: &str = "Rewards distributed to all stakers";

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_rate: i128,
    pub ledger: u32,
}

/// Fired when a staker deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub ledger: u32,
}

/// Fired when a staker withdraws its whole stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub ledger: u32,
}

/// Fired when a staker claims rewards. `net_amount` is what the staker
/// received; `fee` went to the fee sink.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEvent {
    pub staker: Address,
    pub net_amount: i128,
    pub fee: i128,
    pub ledger: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDistributedEvent {
    pub summary: String,
    pub stakers_settled: u32,
    pub ledger: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateSetEvent {
    pub old_rate: i128,
    pub new_rate: i128,
    pub ledger: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSinkSetEvent {
    pub fee_sink: Address,
    pub ledger: u32,
}

/// Fired when an owner transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub ledger: u32,
}

/// Fired when an owner transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub ledger: u32,
}

/// Fired when a pending owner transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub ledger: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    stake_token: Address,
    reward_token: Address,
    reward_rate: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            stake_token,
            reward_token,
            reward_rate,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_deposit(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), staker.clone()),
        DepositEvent {
            staker,
            amount,
            new_total_staked,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_withdraw(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), staker.clone()),
        WithdrawEvent {
            staker,
            amount,
            new_total_staked,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_rewards_claimed(env: &Env, staker: Address, net_amount: i128, fee: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), staker.clone()),
        RewardsClaimedEvent {
            staker,
            net_amount,
            fee,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_rewards_distributed(env: &Env, stakers_settled: u32) {
    env.events().publish(
        (symbol_short!("DISTRIB"),),
        RewardsDistributedEvent {
            summary: String::from_str(env, DISTRIBUTION_SUMMARY),
            stakers_settled,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_rate_set(env: &Env, old_rate: i128, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RATE_SET"),),
        RateSetEvent {
            old_rate,
            new_rate,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_fee_sink_set(env: &Env, fee_sink: Address) {
    env.events().publish(
        (symbol_short!("FEE_SINK"),),
        FeeSinkSetEvent {
            fee_sink,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            ledger: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            ledger: env.ledger().sequence(),
        },
    );
}
