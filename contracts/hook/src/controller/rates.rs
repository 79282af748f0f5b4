use lrtswap::{ error::{ ErrorCode, LrtResult }, oracle::RateOracleClient, validate };
use soroban_sdk::{ log, Address, Env };

use crate::{
    events::HookEvents,
    storage::{ get_oracle, get_supported_assets, save_oracle, save_rate },
};

/// Overwrites the rate of `asset`. A zero rate takes the asset off the custom
/// curve so swaps involving it fall back to the host pricing.
pub fn set_rate(env: &Env, asset: Address, rate: i128) -> LrtResult {
    validate!(
        env,
        rate >= 0,
        ErrorCode::InvalidRate,
        "LRT Hook: Set rate: rate {} is negative",
        rate
    )?;

    save_rate(env, &asset, rate);

    HookEvents::rate_updated(env, asset, rate);
    Ok(())
}

pub fn set_oracle(env: &Env, oracle: Address) {
    save_oracle(env, &oracle);
    HookEvents::oracle_updated(env, oracle);
}

fn oracle_client(env: &Env) -> LrtResult<RateOracleClient<'_>> {
    match get_oracle(env) {
        Some(oracle) => Ok(RateOracleClient::new(env, &oracle)),
        None => {
            log!(env, "LRT Hook: Refresh rate: no rate oracle configured");
            Err(ErrorCode::OracleNotSet)
        }
    }
}

fn pull_rate(env: &Env, oracle: &RateOracleClient, asset: Address) -> LrtResult<bool> {
    let (success, rate) = match oracle.try_refresh_rate(&asset) {
        Ok(Ok(refreshed)) => refreshed,
        _ => {
            log!(env, "LRT Hook: Refresh rate: oracle call for {} failed", asset.clone());
            (false, 0)
        }
    };
    if !success {
        log!(env, "LRT Hook: Refresh rate: oracle has no rate for {}", asset);
        return Ok(false);
    }

    set_rate(env, asset, rate)?;
    Ok(true)
}

/// Pulls a fresh rate for one asset. Returns whether the oracle produced one.
pub fn refresh_rate(env: &Env, asset: Address) -> LrtResult<bool> {
    let oracle = oracle_client(env)?;
    pull_rate(env, &oracle, asset)
}

/// Pulls fresh rates for every supported asset. Returns how many were updated.
pub fn refresh_rates(env: &Env) -> LrtResult<u32> {
    let oracle = oracle_client(env)?;

    let mut updated = 0u32;
    for asset in get_supported_assets(env).iter() {
        if pull_rate(env, &oracle, asset)? {
            updated += 1;
        }
    }

    Ok(updated)
}
