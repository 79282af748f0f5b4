use soroban_sdk::{
    contract,
    contractimpl,
    symbol_short,
    testutils::Address as _,
    token::{ StellarAssetClient, TokenClient },
    Address,
    Env,
};

use crate::{ contract::{ LrtSwapHook, LrtSwapHookClient }, storage::FeeModel };

/// Rate oracle stand-in. Rates are seeded by the test and handed out on refresh.
/// A broken oracle traps on every refresh.
#[contract]
pub struct MockRateOracle;

#[contractimpl]
impl MockRateOracle {
    pub fn set(env: Env, asset: Address, rate: i128, success: bool) {
        env.storage().instance().set(&asset, &(success, rate));
    }

    pub fn get_rate(env: Env, asset: Address) -> (i128, u64) {
        let (_, rate): (bool, i128) = env.storage().instance().get(&asset).unwrap_or((false, 0));
        (rate, env.ledger().timestamp())
    }

    pub fn set_broken(env: Env, broken: bool) {
        env.storage().instance().set(&symbol_short!("broken"), &broken);
    }

    pub fn refresh_rate(env: Env, asset: Address) -> (bool, i128) {
        if env.storage().instance().get(&symbol_short!("broken")).unwrap_or(false) {
            panic!("oracle offline");
        }
        env.storage().instance().get(&asset).unwrap_or((false, 0))
    }
}

pub fn deploy_oracle(env: &Env) -> MockRateOracleClient<'_> {
    MockRateOracleClient::new(env, &env.register(MockRateOracle, ()))
}

pub fn deploy_token_contract<'a>(env: &Env, admin: &Address) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let address = env.register_stellar_asset_contract_v2(admin.clone()).address();
    (TokenClient::new(env, &address), StellarAssetClient::new(env, &address))
}

pub fn deploy_hook_contract<'a>(
    env: &Env,
    owner: &Address,
    host: &Address,
    oracle: Option<Address>,
    fee_model: FeeModel
) -> LrtSwapHookClient<'a> {
    let hook = env.register(LrtSwapHook, (owner.clone(), host.clone(), oracle, fee_model));
    LrtSwapHookClient::new(env, &hook)
}

pub struct Pool<'a> {
    pub env: Env,
    pub owner: Address,
    pub host: Address,
    pub provider: Address,
    pub hook: LrtSwapHookClient<'a>,
    pub tokens: [TokenClient<'a>; 3],
    pub minters: [StellarAssetClient<'a>; 3],
}

impl<'a> Pool<'a> {
    pub fn new(fee_model: FeeModel) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let host = Address::generate(&env);
        let provider = Address::generate(&env);
        let admin = Address::generate(&env);

        let hook = deploy_hook_contract(&env, &owner, &host, None, fee_model);

        let (token_a, minter_a) = deploy_token_contract(&env, &admin);
        let (token_b, minter_b) = deploy_token_contract(&env, &admin);
        let (token_c, minter_c) = deploy_token_contract(&env, &admin);

        Pool {
            env,
            owner,
            host,
            provider,
            hook,
            tokens: [token_a, token_b, token_c],
            minters: [minter_a, minter_b, minter_c],
        }
    }

    pub fn asset(&self, index: usize) -> Address {
        self.tokens[index].address.clone()
    }

    /// Supports `asset(index)` at `weight`, prices it at `rate` and seeds `reserve`.
    pub fn list(&self, index: usize, weight: u32, rate: i128, reserve: i128) {
        let asset = self.asset(index);
        self.hook.add_supported_asset(&self.owner, &asset, &weight);
        self.hook.set_rate(&self.owner, &asset, &rate);
        if reserve > 0 {
            self.deposit(index, reserve);
        }
    }

    pub fn deposit(&self, index: usize, amount: i128) {
        self.minters[index].mint(&self.provider, &amount);
        self.hook.add_liquidity(&self.provider, &self.asset(index), &amount);
    }
}
