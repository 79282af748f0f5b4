use soroban_sdk::{ Address, Env, Symbol };

use crate::storage::PoolPair;

pub struct HookEvents {}

impl HookEvents {
    // Rate Registry

    /// Emitted when an asset's rate is overwritten, by the owner or an oracle sweep
    ///
    /// - topics - `["rate_updated", asset: Address]`
    /// - data - `[rate: i128]`
    pub fn rate_updated(env: &Env, asset: Address, rate: i128) {
        let topics = (Symbol::new(env, "rate_updated"), asset);
        env.events().publish(topics, rate);
    }

    /// - topics - `["oracle_updated"]`
    /// - data - `[oracle: Address]`
    pub fn oracle_updated(env: &Env, oracle: Address) {
        let topics = (Symbol::new(env, "oracle_updated"),);
        env.events().publish(topics, oracle);
    }

    // Weights & Fees

    /// Emitted when an asset becomes supported
    ///
    /// - topics - `["asset_added", asset: Address]`
    /// - data - `[weight: u32, total_target_weight: u32]`
    pub fn asset_added(env: &Env, asset: Address, weight: u32, total_target_weight: u32) {
        let topics = (Symbol::new(env, "asset_added"), asset);
        env.events().publish(topics, (weight, total_target_weight));
    }

    /// - topics - `["asset_removed", asset: Address]`
    /// - data - `[total_target_weight: u32]`
    pub fn asset_removed(env: &Env, asset: Address, total_target_weight: u32) {
        let topics = (Symbol::new(env, "asset_removed"), asset);
        env.events().publish(topics, total_target_weight);
    }

    /// - topics - `["weight_updated", asset: Address]`
    /// - data - `[old_weight: u32, new_weight: u32, total_target_weight: u32]`
    pub fn weight_updated(
        env: &Env,
        asset: Address,
        old_weight: u32,
        new_weight: u32,
        total_target_weight: u32
    ) {
        let topics = (Symbol::new(env, "weight_updated"), asset);
        env.events().publish(topics, (old_weight, new_weight, total_target_weight));
    }

    /// Emitted whenever an asset's fees change, recomputed or set manually
    ///
    /// - topics - `["fees_updated", asset: Address]`
    /// - data - `[input_fee: u32, output_fee: u32]`
    pub fn fees_updated(env: &Env, asset: Address, input_fee: u32, output_fee: u32) {
        let topics = (Symbol::new(env, "fees_updated"), asset);
        env.events().publish(topics, (input_fee, output_fee));
    }

    /// Emitted after the fees of every supported asset were recomputed
    ///
    /// - topics - `["pool_rebalanced"]`
    /// - data - `[total_pool_value: i128, assets: u32]`
    pub fn pool_rebalanced(env: &Env, total_pool_value: i128, assets: u32) {
        let topics = (Symbol::new(env, "pool_rebalanced"),);
        env.events().publish(topics, (total_pool_value, assets));
    }

    /// - topics - `["pool_fee_rate_updated", asset_a: Address, asset_b: Address]`
    /// - data - `[fee_rate: u32]`
    pub fn pool_fee_rate_updated(env: &Env, pair: PoolPair, fee_rate: u32) {
        let topics = (Symbol::new(env, "pool_fee_rate_updated"), pair.asset_a, pair.asset_b);
        env.events().publish(topics, fee_rate);
    }

    // Reserve Ledger

    /// - topics - `["liquidity_added", asset: Address, provider: Address]`
    /// - data - `[amount: i128, reserve: i128]`
    pub fn liquidity_added(env: &Env, asset: Address, provider: Address, amount: i128, reserve: i128) {
        let topics = (Symbol::new(env, "liquidity_added"), asset, provider);
        env.events().publish(topics, (amount, reserve));
    }

    /// - topics - `["liquidity_removed", asset: Address, to: Address]`
    /// - data - `[amount: i128, reserve: i128]`
    pub fn liquidity_removed(env: &Env, asset: Address, to: Address, amount: i128, reserve: i128) {
        let topics = (Symbol::new(env, "liquidity_removed"), asset, to);
        env.events().publish(topics, (amount, reserve));
    }

    /// - topics - `["fees_collected", asset: Address, to: Address]`
    /// - data - `[amount: i128]`
    pub fn fees_collected(env: &Env, asset: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "fees_collected"), asset, to);
        env.events().publish(topics, amount);
    }

    // Exchange Engine

    /// Emitted when the hook priced a swap instead of the host curve
    ///
    /// - topics - `["swap_executed", token_in: Address, token_out: Address]`
    /// - data - `[amount_in: i128, amount_out: i128, fee: i128]`
    pub fn swap_executed(
        env: &Env,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        amount_out: i128,
        fee: i128
    ) {
        let topics = (Symbol::new(env, "swap_executed"), token_in, token_out);
        env.events().publish(topics, (amount_in, amount_out, fee));
    }

    // Basket

    /// - topics - `["shares_minted", to: Address]`
    /// - data - `[shares: i128, value: i128]`
    pub fn shares_minted(env: &Env, to: Address, shares: i128, value: i128) {
        let topics = (Symbol::new(env, "shares_minted"), to);
        env.events().publish(topics, (shares, value));
    }

    /// - topics - `["shares_burned", holder: Address]`
    /// - data - `[shares: i128, value: i128]`
    pub fn shares_burned(env: &Env, holder: Address, shares: i128, value: i128) {
        let topics = (Symbol::new(env, "shares_burned"), holder);
        env.events().publish(topics, (shares, value));
    }

    // Access

    /// - topics - `["ownership_transferred", previous_owner: Address]`
    /// - data - `[new_owner: Address]`
    pub fn ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
        let topics = (Symbol::new(env, "ownership_transferred"), previous_owner);
        env.events().publish(topics, new_owner);
    }
}
