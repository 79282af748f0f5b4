use lrtswap::{ error::{ ErrorCode, LrtResult }, math::safe_math::SafeMath, validate };
use soroban_sdk::{ Address, Env };

use crate::{
    events::HookEvents,
    storage::{
        get_accumulated_fees,
        get_reserve,
        is_supported,
        save_accumulated_fees,
        save_reserve,
        utils::transfer_token,
    },
};

fn validate_amount(env: &Env, amount: i128) -> LrtResult {
    validate!(
        env,
        amount > 0,
        ErrorCode::InvalidAmount,
        "LRT Hook: Liquidity: amount {} must be positive",
        amount
    )
}

/// Credits `amount` of `asset` to the reserve and pulls it from `provider`.
pub fn add_liquidity(env: &Env, provider: Address, asset: Address, amount: i128) -> LrtResult {
    validate_amount(env, amount)?;
    validate!(
        env,
        is_supported(env, &asset),
        ErrorCode::AssetNotSupported,
        "LRT Hook: Add liquidity: {} is not supported",
        asset.clone()
    )?;

    let reserve = get_reserve(env, &asset).safe_add(amount, env)?;
    save_reserve(env, &asset, reserve);

    transfer_token(env, &asset, &provider, &env.current_contract_address(), amount)?;

    HookEvents::liquidity_added(env, asset, provider, amount, reserve);
    Ok(())
}

/// Debits `amount` of `asset` from the reserve and sends it to `to`.
pub fn remove_liquidity(env: &Env, to: Address, asset: Address, amount: i128) -> LrtResult {
    validate_amount(env, amount)?;

    let reserve = get_reserve(env, &asset);
    validate!(
        env,
        amount <= reserve,
        ErrorCode::InsufficientReserve,
        "LRT Hook: Remove liquidity: requested {} but reserve is {}",
        amount,
        reserve
    )?;

    let reserve = reserve.safe_sub(amount, env)?;
    save_reserve(env, &asset, reserve);

    transfer_token(env, &asset, &env.current_contract_address(), &to, amount)?;

    HookEvents::liquidity_removed(env, asset, to, amount, reserve);
    Ok(())
}

/// Pays out every fee accumulated in `asset`. Returns the amount paid, zero
/// when nothing has accumulated.
pub fn collect_fees(env: &Env, asset: Address, to: Address) -> LrtResult<i128> {
    let amount = get_accumulated_fees(env, &asset);

    save_accumulated_fees(env, &asset, 0);

    if amount > 0 {
        transfer_token(env, &asset, &env.current_contract_address(), &to, amount)?;
    }

    HookEvents::fees_collected(env, asset, to, amount);
    Ok(amount)
}
