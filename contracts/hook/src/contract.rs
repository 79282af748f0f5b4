use soroban_sdk::{ contract, contractimpl, contractmeta, Address, Env, Vec };

use crate::{
    controller::{ access, basket, fees, rates, reserves, swap, weights },
    hook::{ LrtPoolTrait, SwapHookTrait },
    msg::{ BeforeSwapResult, HookPermissions, PoolKey, SwapDelta, SwapParams },
    storage::{
        self,
        save_fee_model,
        save_host,
        save_oracle,
        save_owner,
        FeeModel,
        PoolPair,
    },
};

use lrtswap::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::ErrorCode,
};

contractmeta!(
    key = "Description",
    val = "Rate-aware constant-sum swap hook for liquid restaking tokens"
);

#[contract]
pub struct LrtSwapHook;

fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contractimpl]
impl LrtSwapHook {
    /// Binds the hook to `host` and selects how swap fees are charged.
    pub fn __constructor(
        env: Env,
        owner: Address,
        host: Address,
        oracle: Option<Address>,
        fee_model: FeeModel
    ) {
        save_owner(&env, &owner);
        save_host(&env, &host);
        if let Some(oracle) = oracle {
            save_oracle(&env, &oracle);
        }
        save_fee_model(&env, fee_model);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl SwapHookTrait for LrtSwapHook {
    fn get_hook_permissions(_env: Env) -> HookPermissions {
        HookPermissions {
            before_initialize: false,
            after_initialize: false,
            before_add_liquidity: false,
            after_add_liquidity: false,
            before_remove_liquidity: false,
            after_remove_liquidity: false,
            before_swap: true,
            after_swap: true,
            before_donate: false,
            after_donate: false,
            before_swap_returns_delta: true,
            after_swap_returns_delta: false,
        }
    }

    fn before_swap(
        env: Env,
        sender: Address,
        key: PoolKey,
        params: SwapParams
    ) -> Result<BeforeSwapResult, ErrorCode> {
        extend_instance_ttl(&env);
        access::require_host(&env, &sender)?;

        swap::before_swap(&env, key, params)
    }

    fn after_swap(
        env: Env,
        sender: Address,
        _key: PoolKey,
        _params: SwapParams,
        _delta: SwapDelta
    ) -> Result<i128, ErrorCode> {
        extend_instance_ttl(&env);
        access::require_host(&env, &sender)?;

        Ok(0)
    }
}

#[contractimpl]
impl LrtPoolTrait for LrtSwapHook {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        access::transfer_ownership(&env, new_owner)
    }

    fn set_rate(env: Env, sender: Address, asset: Address, rate: i128) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        rates::set_rate(&env, asset, rate)
    }

    fn set_oracle(env: Env, sender: Address, oracle: Address) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        rates::set_oracle(&env, oracle);
        Ok(())
    }

    fn refresh_rate(env: Env, sender: Address, asset: Address) -> Result<bool, ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        rates::refresh_rate(&env, asset)
    }

    fn refresh_rates(env: Env, sender: Address) -> Result<u32, ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        rates::refresh_rates(&env)
    }

    fn add_supported_asset(
        env: Env,
        sender: Address,
        asset: Address,
        weight: u32
    ) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        weights::add_supported_asset(&env, asset, weight)
    }

    fn update_target_weight(
        env: Env,
        sender: Address,
        asset: Address,
        new_weight: u32
    ) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        weights::update_target_weight(&env, asset, new_weight)
    }

    fn remove_supported_asset(env: Env, sender: Address, asset: Address) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        weights::remove_supported_asset(&env, asset)
    }

    fn set_fees_manually(
        env: Env,
        sender: Address,
        asset: Address,
        input_fee: u32,
        output_fee: u32
    ) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        fees::set_fees_manually(&env, asset, input_fee, output_fee)
    }

    fn update_token_fees(env: Env, sender: Address, asset: Address) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        fees::recompute_fees(&env, asset)?;
        Ok(())
    }

    fn update_all_token_fees(env: Env, sender: Address) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        fees::recompute_all_fees(&env)?;
        Ok(())
    }

    fn set_pool_fee_rate(
        env: Env,
        sender: Address,
        asset_a: Address,
        asset_b: Address,
        fee_rate: u32
    ) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        fees::set_pool_fee_rate(&env, PoolPair::new(asset_a, asset_b), fee_rate)
    }

    fn remove_liquidity(
        env: Env,
        sender: Address,
        asset: Address,
        amount: i128
    ) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        reserves::remove_liquidity(&env, sender, asset, amount)
    }

    fn collect_fees(
        env: Env,
        sender: Address,
        asset: Address,
        to: Option<Address>
    ) -> Result<i128, ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        reserves::collect_fees(&env, asset, to.unwrap_or(sender))
    }

    fn mint_shares(env: Env, sender: Address, to: Address, shares: i128) -> Result<i128, ErrorCode> {
        extend_instance_ttl(&env);
        access::require_owner(&env, &sender)?;

        basket::mint_shares(&env, to, shares)
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn add_liquidity(
        env: Env,
        sender: Address,
        asset: Address,
        amount: i128
    ) -> Result<(), ErrorCode> {
        extend_instance_ttl(&env);
        sender.require_auth();

        reserves::add_liquidity(&env, sender, asset, amount)
    }

    fn burn_shares(env: Env, sender: Address, shares: i128) -> Result<i128, ErrorCode> {
        extend_instance_ttl(&env);
        sender.require_auth();

        basket::burn_shares(&env, sender, shares)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn get_owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    fn get_host(env: Env) -> Address {
        storage::get_host(&env)
    }

    fn get_oracle(env: Env) -> Option<Address> {
        storage::get_oracle(&env)
    }

    fn get_fee_model(env: Env) -> FeeModel {
        storage::get_fee_model(&env)
    }

    fn get_rate(env: Env, asset: Address) -> i128 {
        storage::get_rate(&env, &asset)
    }

    fn get_reserve(env: Env, asset: Address) -> i128 {
        storage::get_reserve(&env, &asset)
    }

    fn get_target_weight(env: Env, asset: Address) -> u32 {
        storage::get_target_weight(&env, &asset)
    }

    fn get_total_target_weight(env: Env) -> u32 {
        storage::get_total_target_weight(&env)
    }

    fn get_supported_assets(env: Env) -> Vec<Address> {
        storage::get_supported_assets(&env)
    }

    fn is_supported(env: Env, asset: Address) -> bool {
        storage::is_supported(&env, &asset)
    }

    fn get_input_fee(env: Env, asset: Address) -> u32 {
        storage::get_token_fees(&env, &asset).input_fee
    }

    fn get_output_fee(env: Env, asset: Address) -> u32 {
        storage::get_token_fees(&env, &asset).output_fee
    }

    fn get_accumulated_fees(env: Env, asset: Address) -> i128 {
        storage::get_accumulated_fees(&env, &asset)
    }

    fn get_pool_fee_rate(env: Env, asset_a: Address, asset_b: Address) -> u32 {
        storage::get_pool_fee_rate(&env, &PoolPair::new(asset_a, asset_b))
    }

    fn get_total_pool_value(env: Env) -> Result<i128, ErrorCode> {
        basket::total_pool_value(&env)
    }

    fn get_share_price(env: Env) -> Result<i128, ErrorCode> {
        basket::share_price(&env)
    }

    fn get_total_shares(env: Env) -> i128 {
        storage::get_total_shares(&env)
    }

    fn get_share_balance(env: Env, holder: Address) -> i128 {
        storage::get_share_balance(&env, &holder)
    }

    fn calculate_exchange_amount(
        env: Env,
        from: Address,
        to: Address,
        amount_in: i128
    ) -> Result<i128, ErrorCode> {
        swap::calculate_exchange_amount(&env, &from, &to, amount_in)
    }

    fn calculate_swap_fee(
        env: Env,
        from: Address,
        to: Address,
        amount_out: i128
    ) -> Result<i128, ErrorCode> {
        swap::calculate_swap_fee(&env, &from, &to, amount_out)
    }
}
