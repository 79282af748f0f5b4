use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{ log, Env, I256 };

use crate::{
    constants::FEE_DENOMINATOR_I128,
    error::{ ErrorCode, LrtResult },
};

/// `floor(x * y / denominator)` for non-negative operands.
///
/// The product is formed in 256 bits, so `reserve * rate` style products never
/// overflow before the division. Fails with `MathError` on a zero denominator,
/// a negative operand, or a quotient that does not fit in `i128`.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> LrtResult<i128> {
    if denominator <= 0 || x < 0 || y < 0 {
        log!(env, "Math error: mul_div_floor operands {} {} {}", x, y, denominator);
        return Err(ErrorCode::MathError);
    }

    let product = I256::from_i128(env, x).mul(&I256::from_i128(env, y));
    match product.div(&I256::from_i128(env, denominator)).to_i128() {
        Some(result) => Ok(result),
        None => {
            log!(env, "Math error: mul_div_floor result does not fit in i128");
            Err(ErrorCode::MathError)
        }
    }
}

/// Portion of `amount` charged by `fee` (scaled to FEE_DENOMINATOR), rounded down.
pub fn fee_share(env: &Env, amount: i128, fee: u32) -> LrtResult<i128> {
    if amount < 0 {
        log!(env, "Math error: fee share of negative amount {}", amount);
        return Err(ErrorCode::MathError);
    }

    Ok(amount.fixed_mul_floor(env, &i128::from(fee), &FEE_DENOMINATOR_I128))
}

#[cfg(test)]
mod test {
    use soroban_sdk::Env;
    use test_case::test_case;

    use super::{ fee_share, mul_div_floor };
    use crate::{ constants::RATE_PRECISION, error::ErrorCode };

    #[test_case(10, 3, 4, 7; "truncates toward zero")]
    #[test_case(0, 5, 7, 0; "zero operand")]
    #[test_case(
        10_000_000_000_000_000_000,
        1_050_000_000_000_000_000,
        1_100_000_000_000_000_000,
        9_545_454_545_454_545_454;
        "rate ratio"
    )]
    #[test_case(
        1_000_000_000_000_000_000_000,
        1_500_000_000_000_000_000,
        RATE_PRECISION,
        1_500_000_000_000_000_000_000;
        "product wider than i128"
    )]
    fn mul_div_floor_results(x: i128, y: i128, denominator: i128, expected: i128) {
        let env = Env::default();
        assert_eq!(mul_div_floor(&env, x, y, denominator), Ok(expected));
    }

    #[test_case(1, 1, 0; "zero denominator")]
    #[test_case(-1, 1, 1; "negative operand")]
    #[test_case(i128::MAX, 2, 1; "quotient overflow")]
    fn mul_div_floor_errors(x: i128, y: i128, denominator: i128) {
        let env = Env::default();
        assert_eq!(mul_div_floor(&env, x, y, denominator), Err(ErrorCode::MathError));
    }

    #[test_case(1_000_000, 500, 500)]
    #[test_case(1_999, 500, 0)]
    #[test_case(9_545_454_545_454_545_454, 1_000, 9_545_454_545_454_545)]
    #[test_case(7, 0, 0)]
    fn fee_share_rounds_down(amount: i128, fee: u32, expected: i128) {
        let env = Env::default();
        assert_eq!(fee_share(&env, amount, fee), Ok(expected));
    }

    #[test]
    fn fee_share_rejects_negative_amount() {
        let env = Env::default();
        assert_eq!(fee_share(&env, -1, 500), Err(ErrorCode::MathError));
    }
}
