#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_pool::{StakingPoolContract, StakingPoolContractClient};

const STAKERS: usize = 5;
const FUNDING: i128 = 1_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { who: u8, amount: u32 },
    Withdraw { who: u8 },
    ClaimRewards { who: u8 },
    Distribute,
    SetRate { rate: u64 },
    Advance { ledgers: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

    let contract_id = env.register(StakingPoolContract, ());
    let client = StakingPoolContractClient::new(&env, &contract_id);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(contract_id.clone())
        .address();

    let admin = Address::generate(&env);
    client.initialize(&admin, &stake_token, &reward_token, &10_000_000i128);

    let users: Vec<Address> = (0..STAKERS)
        .map(|_| {
            let user = Address::generate(&env);
            StellarAssetClient::new(&env, &stake_token).mint(&user, &FUNDING);
            TokenClient::new(&env, &stake_token).approve(&user, &contract_id, &FUNDING, &1_000_000);
            user
        })
        .collect();

    // Any failure must be a clean error; afterwards the books must still add up.
    for action in actions {
        match action {
            FuzzAction::Deposit { who, amount } => {
                let user = &users[who as usize % STAKERS];
                let _ = client.try_deposit(user, &i128::from(amount));
            }
            FuzzAction::Withdraw { who } => {
                let _ = client.try_withdraw(&users[who as usize % STAKERS]);
            }
            FuzzAction::ClaimRewards { who } => {
                let _ = client.try_claim_rewards(&users[who as usize % STAKERS]);
            }
            FuzzAction::Distribute => {
                let _ = client.try_distribute_rewards_all(&admin);
            }
            FuzzAction::SetRate { rate } => {
                let _ = client.try_set_reward_rate(&admin, &i128::from(rate));
            }
            FuzzAction::Advance { ledgers } => {
                let seq = env.ledger().sequence();
                env.ledger().set_sequence_number(seq + u32::from(ledgers));
            }
        }

        let sum: i128 = users
            .iter()
            .map(|u| client.staker_info(u).staked_amount)
            .sum();
        assert_eq!(client.get_total_staked(), sum);
        for u in &users {
            assert!(client.staker_info(u).pending_rewards >= 0);
        }
    }
});
