use lrtswap::{
    constants::{ DEFAULT_FEE, MAX_FEE, WEIGHT_DENOMINATOR_I128 },
    error::{ ErrorCode, LrtResult },
    math::{ fixed_point::mul_div_floor, safe_math::SafeMath },
};
use soroban_sdk::{ log, Env };

use crate::storage::TokenFees;

/// Rebalancing fees for one asset.
///
/// The asset's share of the pool value is compared with its target weight.
/// An overweight asset gets a cheaper input side and a pricier output side, an
/// underweight asset the mirror image, so trades that move the pool toward its
/// targets pay less than trades that move it away. The adjustment grows with
/// the deviation in whole percent of the target, capped at `MAX_FEE`.
pub fn rebalancing_fees(
    env: &Env,
    asset_value: i128,
    total_pool_value: i128,
    target_weight: u32
) -> LrtResult<TokenFees> {
    if total_pool_value == 0 {
        return Ok(TokenFees {
            input_fee: DEFAULT_FEE,
            output_fee: DEFAULT_FEE,
        });
    }

    let target_weight = i128::from(target_weight);
    let current_weight = mul_div_floor(env, asset_value, WEIGHT_DENOMINATOR_I128, total_pool_value)?;

    let deviation = current_weight.safe_sub(target_weight, env)?.abs();
    let is_overweight = current_weight > target_weight;

    let deviation_percent = if target_weight == 0 {
        0
    } else {
        deviation.safe_mul(100, env)?.safe_div(target_weight, env)?
    };

    let fee_adjustment = deviation_percent
        .safe_mul(i128::from(DEFAULT_FEE), env)?
        .safe_div(100, env)?
        .min(i128::from(MAX_FEE));

    let discounted = to_fee(env, (i128::from(DEFAULT_FEE) - fee_adjustment).max(0))?;
    let surcharged = to_fee(env, (i128::from(DEFAULT_FEE) + fee_adjustment).min(i128::from(MAX_FEE)))?;

    if is_overweight {
        Ok(TokenFees {
            input_fee: discounted,
            output_fee: surcharged,
        })
    } else {
        Ok(TokenFees {
            input_fee: surcharged,
            output_fee: discounted,
        })
    }
}

fn to_fee(env: &Env, value: i128) -> LrtResult<u32> {
    u32::try_from(value).map_err(|_| {
        log!(env, "Casting error: fee {} does not fit in u32", value);
        ErrorCode::MathError
    })
}
