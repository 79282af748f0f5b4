extern crate std;

use lrtswap::{ constants::{ DEFAULT_FEE, ONE_ETH, WEIGHT_DENOMINATOR }, error::ErrorCode };
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, vec, Address };

use super::setup::Pool;
use crate::storage::FeeModel;

#[test]
fn add_supported_asset_sets_default_fees() {
    let pool = Pool::new(FeeModel::Dynamic);
    let asset = pool.asset(0);

    pool.hook.add_supported_asset(&pool.owner, &asset, &400_000);

    assert!(pool.hook.is_supported(&asset));
    assert_eq!(pool.hook.get_target_weight(&asset), 400_000);
    assert_eq!(pool.hook.get_total_target_weight(), 400_000);
    assert_eq!(pool.hook.get_input_fee(&asset), DEFAULT_FEE);
    assert_eq!(pool.hook.get_output_fee(&asset), DEFAULT_FEE);
    assert_eq!(pool.hook.get_supported_assets(), vec![&pool.env, asset]);
}

#[test]
fn three_thirds_and_a_remainder_fit_exactly() {
    let pool = Pool::new(FeeModel::Dynamic);
    let extra = Address::generate(&pool.env);

    for index in 0..3 {
        pool.hook.add_supported_asset(&pool.owner, &pool.asset(index), &333_000);
    }
    assert_eq!(pool.hook.get_total_target_weight(), 999_000);

    // 999_000 + 1_000 lands on the denominator, which is allowed
    pool.hook.add_supported_asset(&pool.owner, &extra, &1_000);
    assert_eq!(pool.hook.get_total_target_weight(), WEIGHT_DENOMINATOR);
}

#[test]
fn weight_past_denominator_overflows() {
    let pool = Pool::new(FeeModel::Dynamic);
    let extra = Address::generate(&pool.env);

    for index in 0..3 {
        pool.hook.add_supported_asset(&pool.owner, &pool.asset(index), &333_000);
    }

    assert_eq!(
        pool.hook.try_add_supported_asset(&pool.owner, &extra, &2_000),
        Err(Ok(ErrorCode::WeightOverflow))
    );
    assert!(!pool.hook.is_supported(&extra));
    assert_eq!(pool.hook.get_total_target_weight(), 999_000);
    assert_eq!(pool.hook.get_supported_assets().len(), 3);
}

#[test]
fn add_supported_asset_validation() {
    let pool = Pool::new(FeeModel::Dynamic);
    let asset = pool.asset(0);
    let stranger = Address::generate(&pool.env);

    assert_eq!(
        pool.hook.try_add_supported_asset(&pool.owner, &asset, &0),
        Err(Ok(ErrorCode::InvalidWeight))
    );
    assert_eq!(
        pool.hook.try_add_supported_asset(&stranger, &asset, &100_000),
        Err(Ok(ErrorCode::Unauthorized))
    );

    pool.hook.add_supported_asset(&pool.owner, &asset, &100_000);
    assert_eq!(
        pool.hook.try_add_supported_asset(&pool.owner, &asset, &100_000),
        Err(Ok(ErrorCode::DuplicateAsset))
    );
    assert_eq!(pool.hook.get_total_target_weight(), 100_000);
}

#[test]
fn update_target_weight_swaps_old_for_new() {
    let pool = Pool::new(FeeModel::Dynamic);
    let (a, b) = (pool.asset(0), pool.asset(1));
    pool.hook.add_supported_asset(&pool.owner, &a, &600_000);
    pool.hook.add_supported_asset(&pool.owner, &b, &400_000);

    pool.hook.update_target_weight(&pool.owner, &a, &500_000);

    assert_eq!(pool.hook.get_target_weight(&a), 500_000);
    assert_eq!(pool.hook.get_total_target_weight(), 900_000);
}

#[test]
fn update_target_weight_keeps_the_bound() {
    let pool = Pool::new(FeeModel::Dynamic);
    let (a, b) = (pool.asset(0), pool.asset(1));
    pool.hook.add_supported_asset(&pool.owner, &a, &600_000);
    pool.hook.add_supported_asset(&pool.owner, &b, &400_000);

    assert_eq!(
        pool.hook.try_update_target_weight(&pool.owner, &a, &600_001),
        Err(Ok(ErrorCode::WeightOverflow))
    );
    assert_eq!(pool.hook.get_target_weight(&a), 600_000);
    assert_eq!(pool.hook.get_total_target_weight(), WEIGHT_DENOMINATOR);

    assert_eq!(
        pool.hook.try_update_target_weight(&pool.owner, &a, &0),
        Err(Ok(ErrorCode::InvalidWeight))
    );
    assert_eq!(
        pool.hook.try_update_target_weight(&pool.owner, &pool.asset(2), &1),
        Err(Ok(ErrorCode::AssetNotSupported))
    );
}

#[test]
fn update_target_weight_recomputes_fees() {
    let pool = Pool::new(FeeModel::Dynamic);
    let (a, b) = (pool.asset(0), pool.asset(1));
    pool.list(0, 500_000, ONE_ETH, 100 * ONE_ETH);
    pool.list(1, 500_000, ONE_ETH, 100 * ONE_ETH);

    // a now holds half the value against a 25% target
    pool.hook.update_target_weight(&pool.owner, &a, &250_000);

    assert!(pool.hook.get_input_fee(&a) < DEFAULT_FEE);
    assert!(pool.hook.get_output_fee(&a) > DEFAULT_FEE);
    // b is left alone until its own recompute
    assert_eq!(pool.hook.get_input_fee(&b), DEFAULT_FEE);
}

#[test]
fn remove_supported_asset_compacts_list() {
    let pool = Pool::new(FeeModel::Dynamic);
    let (a, b, c) = (pool.asset(0), pool.asset(1), pool.asset(2));
    pool.list(0, 300_000, ONE_ETH, 10 * ONE_ETH);
    pool.list(1, 300_000, ONE_ETH, 0);
    pool.list(2, 300_000, ONE_ETH, 0);

    pool.hook.remove_supported_asset(&pool.owner, &a);

    assert!(!pool.hook.is_supported(&a));
    assert_eq!(pool.hook.get_supported_assets(), vec![&pool.env, b, c]);
    assert_eq!(pool.hook.get_total_target_weight(), 600_000);
    // still priced, so it keeps charging the flat default both ways
    assert_eq!(pool.hook.get_input_fee(&a), DEFAULT_FEE);
    assert_eq!(pool.hook.get_output_fee(&a), DEFAULT_FEE);
    // custody is untouched
    assert_eq!(pool.hook.get_reserve(&a), 10 * ONE_ETH);

    assert_eq!(
        pool.hook.try_remove_supported_asset(&pool.owner, &a),
        Err(Ok(ErrorCode::AssetNotSupported))
    );

    // the freed weight can be reused
    pool.hook.add_supported_asset(&pool.owner, &a, &400_000);
    assert_eq!(pool.hook.get_total_target_weight(), WEIGHT_DENOMINATOR);
}

#[test]
fn weight_bound_holds_across_sequences() {
    let pool = Pool::new(FeeModel::Dynamic);
    let mut assets = std::vec::Vec::new();
    for _ in 0..8 {
        assets.push(Address::generate(&pool.env));
    }

    let weights = [200_000u32, 350_000, 150_000, 400_000, 100_000, 250_000, 50_000, 300_000];
    for (asset, weight) in assets.iter().zip(weights.iter()) {
        let _ = pool.hook.try_add_supported_asset(&pool.owner, asset, weight);
        assert!(pool.hook.get_total_target_weight() <= WEIGHT_DENOMINATOR);
    }
    for (asset, weight) in assets.iter().rev().zip(weights.iter()) {
        let _ = pool.hook.try_update_target_weight(&pool.owner, asset, weight);
        assert!(pool.hook.get_total_target_weight() <= WEIGHT_DENOMINATOR);
    }

    let sum: u32 = assets
        .iter()
        .map(|asset| pool.hook.get_target_weight(asset))
        .sum();
    assert_eq!(sum, pool.hook.get_total_target_weight());
}
