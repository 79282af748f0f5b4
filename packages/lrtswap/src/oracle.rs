use soroban_sdk::{ contractclient, Address, Env };

/// External feed of ETH-denominated exchange rates for liquid restaking tokens.
///
/// Rates use 18 decimals (`RATE_PRECISION`). The hook only consumes this
/// interface; staleness and manipulation checks belong to the oracle.
#[contractclient(name = "RateOracleClient")]
pub trait RateOracle {
    /// Current rate of `asset` and the ledger timestamp it was last updated at.
    fn get_rate(env: Env, asset: Address) -> (i128, u64);

    /// Pulls a fresh rate for `asset` from the oracle's upstream source.
    ///
    /// Returns `(false, 0)` when no rate could be produced.
    fn refresh_rate(env: Env, asset: Address) -> (bool, i128);
}
