use lrtswap::{ error::{ ErrorCode, LrtResult }, validate };
use soroban_sdk::{ Address, Env };

use crate::{ events::HookEvents, storage::{ get_host, get_owner, save_owner } };

/// Single-writer gate in front of every privileged operation.
pub fn require_owner(env: &Env, sender: &Address) -> LrtResult {
    sender.require_auth();

    validate!(
        env,
        *sender == get_owner(env),
        ErrorCode::Unauthorized,
        "LRT Hook: {} is not the owner",
        sender.clone()
    )
}

/// Only the host exchange the hook was deployed for may drive the swap checkpoints.
pub fn require_host(env: &Env, sender: &Address) -> LrtResult {
    sender.require_auth();

    validate!(
        env,
        *sender == get_host(env),
        ErrorCode::Unauthorized,
        "LRT Hook: {} is not the bound host",
        sender.clone()
    )
}

pub fn transfer_ownership(env: &Env, new_owner: Address) -> LrtResult {
    let previous_owner = get_owner(env);
    save_owner(env, &new_owner);

    HookEvents::ownership_transferred(env, previous_owner, new_owner);
    Ok(())
}
