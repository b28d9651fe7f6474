extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use crate::rate::UNIT;
use crate::{ContractError, StakingPoolContract, StakingPoolContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingPoolContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(10);

    let contract_id = env.register(StakingPoolContract, ());
    let client = StakingPoolContractClient::new(&env, &contract_id);

    let stake_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token = env.register_stellar_asset_contract_v2(contract_id.clone());

    let admin = Address::generate(&env);
    client.initialize(&admin, &stake_token.address(), &reward_token.address(), &UNIT);

    (env, client, admin, stake_token.address())
}

// ── Owner bootstrapped on initialize ─────────────────────────────────────────

#[test]
fn test_admin_is_owner_after_init() {
    let (_env, client, admin, _) = setup();
    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.distribute_rewards_all(&admin), 0);
}

// ── Admin entrypoints are owner only ─────────────────────────────────────────

#[test]
fn test_non_owner_cannot_distribute() {
    let (env, client, _admin, _) = setup();
    let keeper = Address::generate(&env);

    match client.try_distribute_rewards_all(&keeper) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_non_owner_cannot_set_rate() {
    let (env, client, _admin, _) = setup();
    let manager = Address::generate(&env);

    match client.try_set_reward_rate(&manager, &(2 * UNIT)) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.current_rate(), UNIT);
}

#[test]
fn test_non_owner_cannot_redirect_fees() {
    let (env, client, admin, _) = setup();
    let other = Address::generate(&env);

    match client.try_set_fee_sink(&other, &other) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_config().fee_sink, admin);
}

#[test]
fn test_owner_cannot_lock_itself_out() {
    let (_env, client, admin, _) = setup();

    client.propose_admin(&admin, &admin);
    client.accept_admin(&admin);

    assert_eq!(client.get_admin(), admin);
    client.set_reward_rate(&admin, &(2 * UNIT));
    client.set_fee_sink(&admin, &admin);
    assert_eq!(client.distribute_rewards_all(&admin), 0);
    assert_eq!(client.current_rate(), 2 * UNIT);
}

// ── Two-step owner transfer ──────────────────────────────────────────────────

#[test]
fn test_owner_transfer_flow() {
    let (env, client, admin, _) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    assert_eq!(client.get_pending_admin(), Some(successor.clone()));

    client.accept_admin(&successor);

    assert_eq!(client.get_admin(), successor);
    assert_eq!(client.get_pending_admin(), None);

    // The old owner has lost its powers.
    match client.try_set_reward_rate(&admin, &(2 * UNIT)) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    match client.try_distribute_rewards_all(&admin) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    client.set_reward_rate(&successor, &(2 * UNIT));
}

#[test]
fn test_accept_by_wrong_address_fails() {
    let (env, client, admin, _) = setup();
    let successor = Address::generate(&env);
    let impostor = Address::generate(&env);
    client.propose_admin(&admin, &successor);

    match client.try_accept_admin(&impostor) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (env, client, _admin, _) = setup();
    let someone = Address::generate(&env);

    match client.try_accept_admin(&someone) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingAdmin),
        _ => unreachable!("Expected NoPendingAdmin error"),
    }
}

#[test]
fn test_cancel_admin_transfer() {
    let (env, client, admin, _) = setup();
    let successor = Address::generate(&env);
    client.propose_admin(&admin, &successor);

    client.cancel_admin_transfer(&admin);

    assert_eq!(client.get_pending_admin(), None);
    match client.try_accept_admin(&successor) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingAdmin),
        _ => unreachable!("Expected NoPendingAdmin error"),
    }
}

#[test]
fn test_only_owner_can_propose() {
    let (env, client, _admin, _) = setup();
    let other = Address::generate(&env);

    match client.try_propose_admin(&other, &other) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_pending_admin(), None);
}

// ── Fee sink follows configuration, not ownership ────────────────────────────

#[test]
fn test_fee_sink_survives_owner_transfer() {
    let (env, client, admin, stake_token) = setup();
    let successor = Address::generate(&env);
    client.propose_admin(&admin, &successor);
    client.accept_admin(&successor);

    assert_eq!(client.get_config().fee_sink, admin);

    let staker = Address::generate(&env);
    StellarAssetClient::new(&env, &stake_token).mint(&staker, &100);
    TokenClient::new(&env, &stake_token).approve(&staker, &client.address, &100, &1_000);
    client.deposit(&staker, &100);

    client.set_fee_sink(&successor, &successor);
    assert_eq!(client.get_config().fee_sink, successor);
}
