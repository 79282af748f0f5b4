use soroban_sdk::{ log, Env };

use crate::error::{ ErrorCode, LrtResult };

/// Checked arithmetic that logs and surfaces `MathError` instead of trapping.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> LrtResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> LrtResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> LrtResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> LrtResult<Self>;
}

#[track_caller]
#[inline(always)]
fn or_math_error<T>(env: &Env, result: Option<T>) -> LrtResult<T> {
    let caller = core::panic::Location::caller();
    result.ok_or_else(|| {
        log!(env, "Math error thrown at line {}", caller.line());
        ErrorCode::MathError
    })
}

macro_rules! impl_safe_math {
    ($($t:ty),+) => {
        $(
            impl SafeMath for $t {
                #[track_caller]
                fn safe_add(self, rhs: $t, env: &Env) -> LrtResult<$t> {
                    or_math_error(env, self.checked_add(rhs))
                }

                #[track_caller]
                fn safe_sub(self, rhs: $t, env: &Env) -> LrtResult<$t> {
                    or_math_error(env, self.checked_sub(rhs))
                }

                #[track_caller]
                fn safe_mul(self, rhs: $t, env: &Env) -> LrtResult<$t> {
                    or_math_error(env, self.checked_mul(rhs))
                }

                #[track_caller]
                fn safe_div(self, rhs: $t, env: &Env) -> LrtResult<$t> {
                    or_math_error(env, self.checked_div(rhs))
                }
            }
        )+
    };
}

impl_safe_math!(u128, u64, u32, i128, i64, i32);
