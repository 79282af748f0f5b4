use lrtswap::{
    constants::{ ONE_ETH, RATE_PRECISION },
    error::{ ErrorCode, LrtResult },
    math::fixed_point::mul_div_floor,
    validate,
};
use soroban_sdk::Env;

/// ETH value of `reserve` units priced at `rate`, rounded down.
pub fn asset_value(env: &Env, reserve: i128, rate: i128) -> LrtResult<i128> {
    mul_div_floor(env, reserve, rate, RATE_PRECISION)
}

/// Constant-sum quote: the amount of the output asset carrying the same ETH
/// value as `amount_in` of the input asset, before fees.
pub fn exchange_amount(env: &Env, amount_in: i128, rate_in: i128, rate_out: i128) -> LrtResult<i128> {
    validate!(
        env,
        rate_in > 0 && rate_out > 0,
        ErrorCode::InvalidRate,
        "LRT Hook: Exchange amount: rates must be positive, got {} and {}",
        rate_in,
        rate_out
    )?;
    validate!(
        env,
        amount_in >= 0,
        ErrorCode::InvalidAmount,
        "LRT Hook: Exchange amount: negative amount {}",
        amount_in
    )?;

    mul_div_floor(env, amount_in, rate_in, rate_out)
}

/// Value of one basket share. Bootstraps at one ETH while no shares exist.
pub fn share_price(env: &Env, total_pool_value: i128, total_shares: i128) -> LrtResult<i128> {
    if total_shares == 0 {
        return Ok(ONE_ETH);
    }
    mul_div_floor(env, total_pool_value, ONE_ETH, total_shares)
}

pub fn shares_value(env: &Env, shares: i128, price: i128) -> LrtResult<i128> {
    mul_div_floor(env, shares, price, ONE_ETH)
}

#[cfg(test)]
mod test {
    use lrtswap::{ constants::ONE_ETH, error::ErrorCode };
    use soroban_sdk::Env;
    use test_case::test_case;

    use super::{ asset_value, exchange_amount, share_price };

    #[test]
    fn exchange_amount_matches_rate_ratio() {
        let env = Env::default();
        let amount_out = exchange_amount(
            &env,
            10 * ONE_ETH,
            1_050_000_000_000_000_000,
            1_100_000_000_000_000_000
        );
        assert_eq!(amount_out, Ok(9_545_454_545_454_545_454));
    }

    #[test_case(0, ONE_ETH; "zero input rate")]
    #[test_case(ONE_ETH, 0; "zero output rate")]
    #[test_case(-1, ONE_ETH; "negative rate")]
    fn exchange_amount_rejects_unpriced_assets(rate_in: i128, rate_out: i128) {
        let env = Env::default();
        assert_eq!(exchange_amount(&env, ONE_ETH, rate_in, rate_out), Err(ErrorCode::InvalidRate));
    }

    #[test]
    fn asset_value_scales_by_rate() {
        let env = Env::default();
        assert_eq!(asset_value(&env, 100 * ONE_ETH, 1_500_000_000_000_000_000), Ok(150 * ONE_ETH));
        assert_eq!(asset_value(&env, 3, 1), Ok(0));
    }

    #[test_case(0, 0, ONE_ETH; "bootstrap price with no supply")]
    #[test_case(300 * ONE_ETH, 0, ONE_ETH; "bootstrap price ignores reserves")]
    #[test_case(350 * ONE_ETH, 300 * ONE_ETH, 1_166_666_666_666_666_666; "value over supply")]
    fn share_price_results(total_value: i128, total_shares: i128, expected: i128) {
        let env = Env::default();
        assert_eq!(share_price(&env, total_value, total_shares), Ok(expected));
    }
}
