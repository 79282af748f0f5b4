use lrtswap::{
    error::{ ErrorCode, LrtResult },
    math::safe_math::SafeMath,
    safe_decrement,
    safe_increment,
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::{
    events::HookEvents,
    math::exchange::{ asset_value, share_price as price_per_share, shares_value },
    storage::{
        get_rate,
        get_reserve,
        get_share_balance,
        get_supported_assets,
        get_total_shares,
        save_share_balance,
        save_total_shares,
    },
};

/// Sum of `reserve * rate` over the supported assets, recomputed on every call.
pub fn total_pool_value(env: &Env) -> LrtResult<i128> {
    let mut total: i128 = 0;
    for asset in get_supported_assets(env).iter() {
        let value = asset_value(env, get_reserve(env, &asset), get_rate(env, &asset))?;
        safe_increment!(env, total, value);
    }
    Ok(total)
}

pub fn share_price(env: &Env) -> LrtResult<i128> {
    price_per_share(env, total_pool_value(env)?, get_total_shares(env))
}

fn validate_shares(env: &Env, shares: i128) -> LrtResult {
    validate!(
        env,
        shares > 0,
        ErrorCode::InvalidAmount,
        "LRT Hook: Shares: amount {} must be positive",
        shares
    )
}

/// Issues `shares` to `to` at the current share price and returns their ETH value.
///
/// TODO: acquire the underlying assets in target proportions for the returned
/// value once a routing venue is chosen; until then minting only records shares.
pub fn mint_shares(env: &Env, to: Address, shares: i128) -> LrtResult<i128> {
    validate_shares(env, shares)?;

    let value = shares_value(env, shares, share_price(env)?)?;

    let mut total_shares = get_total_shares(env);
    safe_increment!(env, total_shares, shares);
    let balance = get_share_balance(env, &to).safe_add(shares, env)?;

    save_total_shares(env, total_shares);
    save_share_balance(env, &to, balance);

    HookEvents::shares_minted(env, to, shares, value);
    Ok(value)
}

/// Retires `shares` held by `holder` and returns their ETH value at the current
/// share price. Underlying assets are not paid out; see `mint_shares`.
pub fn burn_shares(env: &Env, holder: Address, shares: i128) -> LrtResult<i128> {
    validate_shares(env, shares)?;

    let mut balance = get_share_balance(env, &holder);
    validate!(
        env,
        balance >= shares,
        ErrorCode::InsufficientShares,
        "LRT Hook: Burn shares: {} holds {} shares, {} requested",
        holder.clone(),
        balance,
        shares
    )?;

    let value = shares_value(env, shares, share_price(env)?)?;

    let mut total_shares = get_total_shares(env);
    safe_decrement!(env, total_shares, shares);
    safe_decrement!(env, balance, shares);

    save_total_shares(env, total_shares);
    save_share_balance(env, &holder, balance);

    HookEvents::shares_burned(env, holder, shares, value);
    Ok(value)
}
