use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};
use staking_pool::{registry, StakingPoolContract, StakingPoolContractClient};

pub const START: u32 = 1_000;

pub struct Pool {
    pub env: Env,
    pub client: StakingPoolContractClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub stake_token: Address,
}

/// Deploys a pool over two Stellar asset contracts, the reward one minted by
/// the pool itself.
pub fn setup(reward_rate: i128) -> Pool {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(START);

    let contract_id = env.register(StakingPoolContract, ());
    let client = StakingPoolContractClient::new(&env, &contract_id);

    let stake_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token = env.register_stellar_asset_contract_v2(contract_id.clone());

    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &stake_token.address(),
        &reward_token.address(),
        &reward_rate,
    );

    Pool {
        env,
        client,
        contract_id,
        admin,
        stake_token: stake_token.address(),
    }
}

/// A fresh staker holding `amount` stake tokens, all approved to the pool.
pub fn funded_staker(pool: &Pool, amount: i128) -> Address {
    let staker = Address::generate(&pool.env);
    StellarAssetClient::new(&pool.env, &pool.stake_token).mint(&staker, &amount);
    TokenClient::new(&pool.env, &pool.stake_token).approve(
        &staker,
        &pool.contract_id,
        &amount,
        &(pool.env.ledger().sequence() + 100_000),
    );
    staker
}

pub fn advance(env: &Env, ledgers: u32) {
    env.ledger()
        .set_sequence_number(env.ledger().sequence() + ledgers);
}

pub fn invariants_hold(pool: &Pool) -> bool {
    pool.env
        .as_contract(&pool.contract_id, || registry::check_invariants(&pool.env))
}
