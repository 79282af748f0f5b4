use soroban_sdk::contracterror;

pub type LrtResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    #[doc = "Caller is not the owner (or not the bound host)"]
    Unauthorized = 1,
    #[doc = "Target weight is zero"]
    InvalidWeight = 2,
    #[doc = "Rate is negative, or zero where a priced asset is required"]
    InvalidRate = 3,
    #[doc = "Asset is already supported"]
    DuplicateAsset = 4,
    #[doc = "Asset is not supported"]
    AssetNotSupported = 5,
    #[doc = "Sum of target weights would exceed the weight denominator"]
    WeightOverflow = 6,
    #[doc = "Fee exceeds MAX_FEE"]
    FeeTooHigh = 7,
    #[doc = "Not enough reserve of the asset"]
    InsufficientReserve = 8,
    #[doc = "Token transfer was rejected by the token contract"]
    TransferFailed = 9,
    MathError = 10,
    #[doc = "Amount must be positive"]
    InvalidAmount = 11,
    #[doc = "Holder does not own enough basket shares"]
    InsufficientShares = 12,
    #[doc = "No rate oracle configured"]
    OracleNotSet = 13,
}
