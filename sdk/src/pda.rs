use anchor_lang::prelude::Pubkey;

use crate::ID;

/// Seed of the singleton game configuration account.
pub const GAME_CONFIG_SEED: &[u8] = b"game_config";

/// Derives the game config address for an arbitrary deployment of the gacha
/// program. Pure function, no ledger access.
pub fn find_game_config_address_for_program(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GAME_CONFIG_SEED], program_id)
}

/// Derives the game config address and bump for the canonical program id.
pub fn find_game_config_address() -> (Pubkey, u8) {
    find_game_config_address_for_program(&ID)
}

/// Only the address is consumed downstream; the bump stays with the program.
pub fn get_game_config_pubkey() -> Pubkey {
    find_game_config_address().0
}
