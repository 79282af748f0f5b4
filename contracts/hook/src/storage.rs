use lrtswap::constants::{
    DEFAULT_POOL_FEE_RATE,
    PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{ contracttype, Address, Env, IntoVal, TryFromVal, Val, Vec };

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Host,
    Oracle,
    FeeModel,
    SupportedAssets,
    TotalTargetWeight,
    TotalShares,
    Rate(Address),
    Reserve(Address),
    TargetWeight(Address),
    Fees(Address),
    AccumulatedFees(Address),
    PoolFeeRate(PoolPair),
    ShareBalance(Address),
}

/// How swap fees are charged.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeModel {
    /// Per-token input/output fees steered by target weights
    Dynamic,
    /// One rate per asset pair, set by the owner
    PoolRate,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TokenFees {
    /// Charged when the asset is sold into the pool
    pub input_fee: u32,
    /// Charged when the asset is bought out of the pool
    pub output_fee: u32,
}

/// Unordered asset pair, stored with the lower address first.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolPair {
    pub asset_a: Address,
    pub asset_b: Address,
}

impl PoolPair {
    pub fn new(first: Address, second: Address) -> Self {
        if first <= second {
            PoolPair { asset_a: first, asset_b: second }
        } else {
            PoolPair { asset_a: second, asset_b: first }
        }
    }
}

// ################################################################
//                            Instance
// ################################################################

pub fn save_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).expect("Owner not set")
}

pub fn save_host(env: &Env, host: &Address) {
    env.storage().instance().set(&DataKey::Host, host);
}

pub fn get_host(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Host).expect("Host not set")
}

pub fn save_oracle(env: &Env, oracle: &Address) {
    env.storage().instance().set(&DataKey::Oracle, oracle);
}

pub fn get_oracle(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Oracle)
}

pub fn save_fee_model(env: &Env, fee_model: FeeModel) {
    env.storage().instance().set(&DataKey::FeeModel, &fee_model);
}

pub fn get_fee_model(env: &Env) -> FeeModel {
    env.storage().instance().get(&DataKey::FeeModel).unwrap_or(FeeModel::Dynamic)
}

pub fn save_supported_assets(env: &Env, assets: &Vec<Address>) {
    env.storage().instance().set(&DataKey::SupportedAssets, assets);
}

pub fn get_supported_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::SupportedAssets)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_total_target_weight(env: &Env, total: u32) {
    env.storage().instance().set(&DataKey::TotalTargetWeight, &total);
}

pub fn get_total_target_weight(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::TotalTargetWeight).unwrap_or(0)
}

pub fn save_total_shares(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
}

pub fn get_total_shares(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalShares).unwrap_or(0)
}

// ################################################################
//                           Per asset
// ################################################################

fn read_persistent<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let value = env.storage().persistent().get::<DataKey, V>(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    value
}

fn write_persistent<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Zero means no rate is available for the asset.
pub fn get_rate(env: &Env, asset: &Address) -> i128 {
    read_persistent(env, &DataKey::Rate(asset.clone())).unwrap_or(0)
}

pub fn save_rate(env: &Env, asset: &Address, rate: i128) {
    write_persistent(env, &DataKey::Rate(asset.clone()), &rate);
}

pub fn get_reserve(env: &Env, asset: &Address) -> i128 {
    read_persistent(env, &DataKey::Reserve(asset.clone())).unwrap_or(0)
}

pub fn save_reserve(env: &Env, asset: &Address, reserve: i128) {
    write_persistent(env, &DataKey::Reserve(asset.clone()), &reserve);
}

pub fn get_target_weight(env: &Env, asset: &Address) -> u32 {
    read_persistent(env, &DataKey::TargetWeight(asset.clone())).unwrap_or(0)
}

pub fn save_target_weight(env: &Env, asset: &Address, weight: u32) {
    write_persistent(env, &DataKey::TargetWeight(asset.clone()), &weight);
}

pub fn remove_target_weight(env: &Env, asset: &Address) {
    env.storage().persistent().remove(&DataKey::TargetWeight(asset.clone()));
}

pub fn is_supported(env: &Env, asset: &Address) -> bool {
    get_target_weight(env, asset) > 0
}

pub fn get_token_fees(env: &Env, asset: &Address) -> TokenFees {
    read_persistent(env, &DataKey::Fees(asset.clone())).unwrap_or_default()
}

pub fn save_token_fees(env: &Env, asset: &Address, fees: &TokenFees) {
    write_persistent(env, &DataKey::Fees(asset.clone()), fees);
}

pub fn get_accumulated_fees(env: &Env, asset: &Address) -> i128 {
    read_persistent(env, &DataKey::AccumulatedFees(asset.clone())).unwrap_or(0)
}

pub fn save_accumulated_fees(env: &Env, asset: &Address, amount: i128) {
    write_persistent(env, &DataKey::AccumulatedFees(asset.clone()), &amount);
}

pub fn get_pool_fee_rate(env: &Env, pair: &PoolPair) -> u32 {
    read_persistent(env, &DataKey::PoolFeeRate(pair.clone())).unwrap_or(DEFAULT_POOL_FEE_RATE)
}

pub fn save_pool_fee_rate(env: &Env, pair: &PoolPair, rate: u32) {
    write_persistent(env, &DataKey::PoolFeeRate(pair.clone()), &rate);
}

pub fn get_share_balance(env: &Env, holder: &Address) -> i128 {
    read_persistent(env, &DataKey::ShareBalance(holder.clone())).unwrap_or(0)
}

pub fn save_share_balance(env: &Env, holder: &Address, balance: i128) {
    write_persistent(env, &DataKey::ShareBalance(holder.clone()), &balance);
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use lrtswap::error::{ ErrorCode, LrtResult };
    use soroban_sdk::{ log, token };

    use super::*;

    /// Moves `amount` of `asset` through the token contract. Any rejection by the
    /// token surfaces as `TransferFailed`.
    pub fn transfer_token(
        env: &Env,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: i128
    ) -> LrtResult {
        let token_client = token::Client::new(env, asset);
        match token_client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "LRT Hook: token transfer of {} from {} to {} failed", amount, from.clone(), to.clone());
                Err(ErrorCode::TransferFailed)
            }
        }
    }
}
