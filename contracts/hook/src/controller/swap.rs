use lrtswap::{
    constants::NO_FEE_OVERRIDE,
    error::{ ErrorCode, LrtResult },
    math::{ fixed_point::fee_share, safe_math::SafeMath },
    validate,
};
use soroban_sdk::{ log, Address, Env };

use crate::{
    events::HookEvents,
    math::exchange::exchange_amount,
    msg::{ BeforeSwapResult, PoolKey, SwapDelta, SwapParams },
    storage::{
        get_accumulated_fees,
        get_fee_model,
        get_pool_fee_rate,
        get_rate,
        get_reserve,
        get_token_fees,
        save_accumulated_fees,
        save_reserve,
        FeeModel,
        PoolPair,
    },
};

fn defer() -> BeforeSwapResult {
    BeforeSwapResult {
        delta: SwapDelta::default(),
        fee_override: NO_FEE_OVERRIDE,
    }
}

/// Output amount before fees for selling `amount_in` of `from` for `to`.
pub fn calculate_exchange_amount(env: &Env, from: &Address, to: &Address, amount_in: i128) -> LrtResult<i128> {
    exchange_amount(env, amount_in, get_rate(env, from), get_rate(env, to))
}

/// Fee withheld from `amount_out` under the configured fee model.
///
/// The dynamic model charges the seller-side input fee of `from` and the
/// buyer-side output fee of `to`, each on the pre-fee output, and sums them.
pub fn calculate_swap_fee(env: &Env, from: &Address, to: &Address, amount_out: i128) -> LrtResult<i128> {
    match get_fee_model(env) {
        FeeModel::Dynamic => {
            let input_fee = fee_share(env, amount_out, get_token_fees(env, from).input_fee)?;
            let output_fee = fee_share(env, amount_out, get_token_fees(env, to).output_fee)?;
            input_fee.safe_add(output_fee, env)
        }
        FeeModel::PoolRate => {
            let pair = PoolPair::new(from.clone(), to.clone());
            fee_share(env, amount_out, get_pool_fee_rate(env, &pair))
        }
    }
}

/// Prices an exact-input swap on the constant-sum curve and books it.
///
/// Returns a zero delta, leaving the swap to the host curve, when either asset
/// has no rate or the swap is specified by its output amount.
pub fn before_swap(env: &Env, key: PoolKey, params: SwapParams) -> LrtResult<BeforeSwapResult> {
    validate!(
        env,
        key.currency0 != key.currency1,
        ErrorCode::InvalidAmount,
        "LRT Hook: Before swap: pool key trades {} against itself",
        key.currency0.clone()
    )?;

    let (token_in, token_out) = if params.zero_for_one {
        (key.currency0, key.currency1)
    } else {
        (key.currency1, key.currency0)
    };

    let rate_in = get_rate(env, &token_in);
    let rate_out = get_rate(env, &token_out);
    if rate_in == 0 || rate_out == 0 {
        log!(env, "LRT Hook: Before swap: missing rate, deferring to host curve");
        return Ok(defer());
    }

    validate!(
        env,
        params.amount_specified != 0,
        ErrorCode::InvalidAmount,
        "LRT Hook: Before swap: zero amount"
    )?;
    if params.amount_specified > 0 {
        log!(env, "LRT Hook: Before swap: exact output swap, deferring to host curve");
        return Ok(defer());
    }

    let amount_in = params.amount_specified.safe_mul(-1, env)?;
    let amount_out = exchange_amount(env, amount_in, rate_in, rate_out)?;

    let reserve_out = get_reserve(env, &token_out);
    validate!(
        env,
        amount_out <= reserve_out,
        ErrorCode::InsufficientReserve,
        "LRT Hook: Before swap: output {} exceeds reserve {}",
        amount_out,
        reserve_out
    )?;

    let fee = calculate_swap_fee(env, &token_in, &token_out, amount_out)?;
    let amount_out_after_fee = amount_out.safe_sub(fee, env)?;

    let reserve_in = get_reserve(env, &token_in).safe_add(amount_in, env)?;
    let reserve_out = reserve_out.safe_sub(amount_out, env)?;
    let accumulated_fees = get_accumulated_fees(env, &token_out).safe_add(fee, env)?;

    save_reserve(env, &token_in, reserve_in);
    save_reserve(env, &token_out, reserve_out);
    save_accumulated_fees(env, &token_out, accumulated_fees);

    HookEvents::swap_executed(env, token_in, token_out, amount_in, amount_out_after_fee, fee);

    Ok(BeforeSwapResult {
        delta: SwapDelta {
            input: -amount_in,
            output: amount_out_after_fee,
        },
        fee_override: NO_FEE_OVERRIDE,
    })
}
