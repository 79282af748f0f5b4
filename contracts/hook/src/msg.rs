use soroban_sdk::{ contracttype, Address };

/// Identifies the host pool a swap is routed through.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    pub currency0: Address,
    pub currency1: Address,
    /// The host's own fee tier, left untouched by this hook
    pub fee: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapParams {
    /// Sells `currency0` for `currency1` when true
    pub zero_for_one: bool,
    /// Negative for an exact input of `-amount_specified`, positive for an exact output
    pub amount_specified: i128,
}

/// Balance adjustment handed back to the host, from the swapper's side.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SwapDelta {
    /// Amount of the input asset taken from the swapper (never positive)
    pub input: i128,
    /// Amount of the output asset owed to the swapper after fees
    pub output: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeforeSwapResult {
    pub delta: SwapDelta,
    pub fee_override: u32,
}

/// Checkpoints the host must route to this hook.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HookPermissions {
    pub before_initialize: bool,
    pub after_initialize: bool,
    pub before_add_liquidity: bool,
    pub after_add_liquidity: bool,
    pub before_remove_liquidity: bool,
    pub after_remove_liquidity: bool,
    pub before_swap: bool,
    pub after_swap: bool,
    pub before_donate: bool,
    pub after_donate: bool,
    pub before_swap_returns_delta: bool,
    pub after_swap_returns_delta: bool,
}
