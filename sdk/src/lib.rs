use anchor_lang::declare_id;

pub mod instruction;
pub mod pda;
pub mod state;

pub use instruction::{
    create_initialize_game_config_instruction, InitializeGameConfigAccounts,
    InitializeGameConfigParams,
};
pub use pda::{find_game_config_address, get_game_config_pubkey, GAME_CONFIG_SEED};
pub use state::GameConfig;

declare_id!("B71jh4j5NX3cXyKJ92YjpNApiHk93x2UKXPSqicY5jz1");
