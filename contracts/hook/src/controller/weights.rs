use lrtswap::{
    constants::{ DEFAULT_FEE, WEIGHT_DENOMINATOR },
    error::{ ErrorCode, LrtResult },
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::{
    controller::fees,
    events::HookEvents,
    storage::{
        get_supported_assets,
        get_target_weight,
        get_total_target_weight,
        is_supported,
        remove_target_weight,
        save_supported_assets,
        save_target_weight,
        save_token_fees,
        save_total_target_weight,
        TokenFees,
    },
};

fn validate_total_weight(env: &Env, total: u32) -> LrtResult {
    validate!(
        env,
        total <= WEIGHT_DENOMINATOR,
        ErrorCode::WeightOverflow,
        "LRT Hook: total target weight {} exceeds {}",
        total,
        WEIGHT_DENOMINATOR
    )
}

pub fn add_supported_asset(env: &Env, asset: Address, weight: u32) -> LrtResult {
    validate!(env, weight > 0, ErrorCode::InvalidWeight, "LRT Hook: Add asset: weight must be positive")?;
    validate!(
        env,
        !is_supported(env, &asset),
        ErrorCode::DuplicateAsset,
        "LRT Hook: Add asset: {} is already supported",
        asset.clone()
    )?;

    let new_total = get_total_target_weight(env).safe_add(weight, env)?;
    validate_total_weight(env, new_total)?;

    let mut assets = get_supported_assets(env);
    assets.push_back(asset.clone());
    save_supported_assets(env, &assets);

    save_target_weight(env, &asset, weight);
    save_total_target_weight(env, new_total);
    save_token_fees(env, &asset, &TokenFees {
        input_fee: DEFAULT_FEE,
        output_fee: DEFAULT_FEE,
    });

    HookEvents::asset_added(env, asset, weight, new_total);
    Ok(())
}

pub fn update_target_weight(env: &Env, asset: Address, new_weight: u32) -> LrtResult {
    validate!(
        env,
        new_weight > 0,
        ErrorCode::InvalidWeight,
        "LRT Hook: Update weight: weight must be positive"
    )?;

    let old_weight = get_target_weight(env, &asset);
    validate!(
        env,
        old_weight > 0,
        ErrorCode::AssetNotSupported,
        "LRT Hook: Update weight: {} is not supported",
        asset.clone()
    )?;

    let new_total = get_total_target_weight(env)
        .safe_sub(old_weight, env)?
        .safe_add(new_weight, env)?;
    validate_total_weight(env, new_total)?;

    save_target_weight(env, &asset, new_weight);
    save_total_target_weight(env, new_total);

    HookEvents::weight_updated(env, asset.clone(), old_weight, new_weight, new_total);

    fees::recompute_fees(env, asset)?;
    Ok(())
}

/// Takes `asset` off the supported list. Its reserve and accumulated fees stay
/// in custody until withdrawn, and its fees fall back to `DEFAULT_FEE`.
pub fn remove_supported_asset(env: &Env, asset: Address) -> LrtResult {
    let weight = get_target_weight(env, &asset);
    validate!(
        env,
        weight > 0,
        ErrorCode::AssetNotSupported,
        "LRT Hook: Remove asset: {} is not supported",
        asset.clone()
    )?;

    let new_total = get_total_target_weight(env).safe_sub(weight, env)?;

    let mut assets = get_supported_assets(env);
    if let Some(index) = assets.first_index_of(&asset) {
        assets.remove(index);
    }
    save_supported_assets(env, &assets);

    remove_target_weight(env, &asset);
    // still priced while its rate is set, so it keeps charging the flat default
    save_token_fees(env, &asset, &TokenFees {
        input_fee: DEFAULT_FEE,
        output_fee: DEFAULT_FEE,
    });
    save_total_target_weight(env, new_total);

    HookEvents::asset_removed(env, asset, new_total);
    Ok(())
}
