#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($env:expr, $struct:expr, $value:expr) => {{
        $struct = $crate::math::safe_math::SafeMath::safe_add($struct, $value, $env)?
    }};
}

#[macro_export]
macro_rules! safe_decrement {
    ($env:expr, $struct:expr, $value:expr) => {{
        $struct = $crate::math::safe_math::SafeMath::safe_sub($struct, $value, $env)?
    }};
}

// Validate all fees to be between the range 0..=MAX_FEE
#[macro_export]
macro_rules! validate_fees {
    ($env:expr, $($value:expr),+) => {
        {
            let mut result: $crate::error::LrtResult = Ok(());
            $(
                if result.is_ok() {
                    result = $crate::validate!(
                        $env,
                        $value <= $crate::constants::MAX_FEE,
                        $crate::error::ErrorCode::FeeTooHigh,
                        "fee {} is above the maximum of {}",
                        $value,
                        $crate::constants::MAX_FEE
                    );
                }
            )+
            result
        }
    };
}
