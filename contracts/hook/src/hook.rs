use lrtswap::error::ErrorCode;
use soroban_sdk::{ Address, Env, Vec };

use crate::{
    msg::{ BeforeSwapResult, HookPermissions, PoolKey, SwapDelta, SwapParams },
    storage::FeeModel,
};

/// Checkpoints invoked by the host exchange around each swap.
pub trait SwapHookTrait {
    fn get_hook_permissions(env: Env) -> HookPermissions;

    /// Prices exact-input swaps between two rated assets on the constant-sum
    /// curve. Anything else gets a zero delta and is priced by the host.
    fn before_swap(
        env: Env,
        sender: Address,
        key: PoolKey,
        params: SwapParams
    ) -> Result<BeforeSwapResult, ErrorCode>;

    /// Nothing left to reconcile after the swap; always returns 0.
    fn after_swap(
        env: Env,
        sender: Address,
        key: PoolKey,
        params: SwapParams,
        delta: SwapDelta
    ) -> Result<i128, ErrorCode>;
}

pub trait LrtPoolTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode>;

    fn set_rate(env: Env, sender: Address, asset: Address, rate: i128) -> Result<(), ErrorCode>;

    fn set_oracle(env: Env, sender: Address, oracle: Address) -> Result<(), ErrorCode>;

    fn refresh_rate(env: Env, sender: Address, asset: Address) -> Result<bool, ErrorCode>;

    fn refresh_rates(env: Env, sender: Address) -> Result<u32, ErrorCode>;

    fn add_supported_asset(
        env: Env,
        sender: Address,
        asset: Address,
        weight: u32
    ) -> Result<(), ErrorCode>;

    fn update_target_weight(
        env: Env,
        sender: Address,
        asset: Address,
        new_weight: u32
    ) -> Result<(), ErrorCode>;

    fn remove_supported_asset(env: Env, sender: Address, asset: Address) -> Result<(), ErrorCode>;

    fn set_fees_manually(
        env: Env,
        sender: Address,
        asset: Address,
        input_fee: u32,
        output_fee: u32
    ) -> Result<(), ErrorCode>;

    fn update_token_fees(env: Env, sender: Address, asset: Address) -> Result<(), ErrorCode>;

    fn update_all_token_fees(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn set_pool_fee_rate(
        env: Env,
        sender: Address,
        asset_a: Address,
        asset_b: Address,
        fee_rate: u32
    ) -> Result<(), ErrorCode>;

    fn remove_liquidity(
        env: Env,
        sender: Address,
        asset: Address,
        amount: i128
    ) -> Result<(), ErrorCode>;

    fn collect_fees(
        env: Env,
        sender: Address,
        asset: Address,
        to: Option<Address>
    ) -> Result<i128, ErrorCode>;

    fn mint_shares(env: Env, sender: Address, to: Address, shares: i128) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    fn add_liquidity(
        env: Env,
        sender: Address,
        asset: Address,
        amount: i128
    ) -> Result<(), ErrorCode>;

    fn burn_shares(env: Env, sender: Address, shares: i128) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn get_owner(env: Env) -> Address;

    fn get_host(env: Env) -> Address;

    fn get_oracle(env: Env) -> Option<Address>;

    fn get_fee_model(env: Env) -> FeeModel;

    fn get_rate(env: Env, asset: Address) -> i128;

    fn get_reserve(env: Env, asset: Address) -> i128;

    fn get_target_weight(env: Env, asset: Address) -> u32;

    fn get_total_target_weight(env: Env) -> u32;

    fn get_supported_assets(env: Env) -> Vec<Address>;

    fn is_supported(env: Env, asset: Address) -> bool;

    fn get_input_fee(env: Env, asset: Address) -> u32;

    fn get_output_fee(env: Env, asset: Address) -> u32;

    fn get_accumulated_fees(env: Env, asset: Address) -> i128;

    fn get_pool_fee_rate(env: Env, asset_a: Address, asset_b: Address) -> u32;

    fn get_total_pool_value(env: Env) -> Result<i128, ErrorCode>;

    fn get_share_price(env: Env) -> Result<i128, ErrorCode>;

    fn get_total_shares(env: Env) -> i128;

    fn get_share_balance(env: Env, holder: Address) -> i128;

    fn calculate_exchange_amount(
        env: Env,
        from: Address,
        to: Address,
        amount_in: i128
    ) -> Result<i128, ErrorCode>;

    fn calculate_swap_fee(
        env: Env,
        from: Address,
        to: Address,
        amount_out: i128
    ) -> Result<i128, ErrorCode>;
}
