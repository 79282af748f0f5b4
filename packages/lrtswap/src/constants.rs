// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                           Precision
// ################################################################

/// ETH value of one unit of an asset is expressed with 18 decimals.
pub const RATE_PRECISION: i128 = 1_000_000_000_000_000_000; // expo = -18

/// One unit of value in the basket. Also the bootstrap share price.
pub const ONE_ETH: i128 = RATE_PRECISION;

/// 1_000_000 = 100%
pub const WEIGHT_DENOMINATOR: u32 = 1_000_000;
pub const WEIGHT_DENOMINATOR_I128: i128 = WEIGHT_DENOMINATOR as i128;

/// 1_000_000 = 100%
pub const FEE_DENOMINATOR: u32 = 1_000_000;
pub const FEE_DENOMINATOR_I128: i128 = FEE_DENOMINATOR as i128;

// ################################################################
//                             Fees
// ################################################################

/// 0.05%, applied to newly supported assets and when the pool holds no value
pub const DEFAULT_FEE: u32 = 500;

/// 1%
pub const MAX_FEE: u32 = 10_000;

/// Pair rate used by the pool-rate fee model when no rate was set for a pair
pub const DEFAULT_POOL_FEE_RATE: u32 = 500;

/// Returned to the host to keep the pool's own fee tier
pub const NO_FEE_OVERRIDE: u32 = 0;
