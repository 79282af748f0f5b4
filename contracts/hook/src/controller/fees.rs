use lrtswap::{ error::{ ErrorCode, LrtResult }, validate, validate_fees };
use soroban_sdk::{ Address, Env };

use crate::{
    controller::basket,
    events::HookEvents,
    math::{ exchange::asset_value, fees::rebalancing_fees },
    storage::{
        get_rate,
        get_reserve,
        get_supported_assets,
        get_target_weight,
        is_supported,
        save_pool_fee_rate,
        save_token_fees,
        PoolPair,
        TokenFees,
    },
};

fn ensure_supported(env: &Env, asset: &Address) -> LrtResult {
    validate!(
        env,
        is_supported(env, asset),
        ErrorCode::AssetNotSupported,
        "LRT Hook: Fees: {} is not supported",
        asset.clone()
    )
}

fn recompute_with_total(env: &Env, asset: Address, total_pool_value: i128) -> LrtResult<TokenFees> {
    let value = asset_value(env, get_reserve(env, &asset), get_rate(env, &asset))?;
    let fees = rebalancing_fees(env, value, total_pool_value, get_target_weight(env, &asset))?;

    save_token_fees(env, &asset, &fees);

    HookEvents::fees_updated(env, asset, fees.input_fee, fees.output_fee);
    Ok(fees)
}

/// Re-derives the input/output fees of `asset` from its current deviation
/// against its target weight.
pub fn recompute_fees(env: &Env, asset: Address) -> LrtResult<TokenFees> {
    ensure_supported(env, &asset)?;

    let total_pool_value = basket::total_pool_value(env)?;
    recompute_with_total(env, asset, total_pool_value)
}

/// Recomputes every supported asset against one snapshot of the pool value.
pub fn recompute_all_fees(env: &Env) -> LrtResult<i128> {
    let total_pool_value = basket::total_pool_value(env)?;

    let assets = get_supported_assets(env);
    for asset in assets.iter() {
        recompute_with_total(env, asset, total_pool_value)?;
    }

    HookEvents::pool_rebalanced(env, total_pool_value, assets.len());
    Ok(total_pool_value)
}

pub fn set_fees_manually(env: &Env, asset: Address, input_fee: u32, output_fee: u32) -> LrtResult {
    ensure_supported(env, &asset)?;
    validate_fees!(env, input_fee, output_fee)?;

    save_token_fees(env, &asset, &TokenFees { input_fee, output_fee });

    HookEvents::fees_updated(env, asset, input_fee, output_fee);
    Ok(())
}

pub fn set_pool_fee_rate(env: &Env, pair: PoolPair, fee_rate: u32) -> LrtResult {
    validate_fees!(env, fee_rate)?;

    save_pool_fee_rate(env, &pair, fee_rate);

    HookEvents::pool_fee_rate_updated(env, pair, fee_rate);
    Ok(())
}
