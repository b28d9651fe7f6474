use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");

// ── Owner ────────────────────────────────────────────────────────────────────

/// Records `owner` as the single address allowed to make administrative
/// calls. Callers must have checked authority beforehand.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// The `is_owner` check used to gate administrative calls. Always false
/// before an owner has been recorded.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    get_owner(env).as_ref() == Some(caller)
}

/// Hands ownership to `new`. Returns `false`, leaving the owner unchanged,
/// when `caller` is not the current owner.
pub fn transfer_owner(env: &Env, caller: &Address, new: &Address) -> bool {
    if !is_owner(env, caller) {
        return false;
    }
    set_owner(env, new);
    true
}
