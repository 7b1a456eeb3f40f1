//! Board profile registry.
//!
//! Profiles self-register via [`inventory::submit!`] in [`crate::board`];
//! the frontend looks them up by name without any central list.

use crate::board::BoardProfile;

/// Profile used when none is selected.
pub const DEFAULT_BOARD: &str = "boson640";

/// Return all registered board profiles, sorted by name.
pub fn all() -> Vec<&'static BoardProfile> {
    let mut entries: Vec<_> = inventory::iter::<BoardProfile>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a board profile by its CLI name.
pub fn find(name: &str) -> Option<&'static BoardProfile> {
    inventory::iter::<BoardProfile>
        .into_iter()
        .find(|e| e.name == name)
}
