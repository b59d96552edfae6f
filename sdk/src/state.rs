use anchor_lang::{prelude::Pubkey, AnchorDeserialize, AnchorSerialize, Discriminator};

/// Singleton configuration account of the gacha program, mirrored here for
/// client-side readback.
#[derive(Debug, Clone, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub authority: Pubkey,
    pub purchase_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub game_vault: Pubkey,
    pub pull_price: u64,
    pub last_pull_id: u64,
}

impl Discriminator for GameConfig {
    // sha256("account:GameConfig")[..8]
    const DISCRIMINATOR: [u8; 8] = [45, 146, 146, 33, 170, 69, 96, 133];
}

impl GameConfig {
    pub const SIZE: usize = 8       // discriminator
        + 32                        // authority
        + 32                        // purchase_mint
        + 32                        // reward_mint
        + 32                        // game_vault
        + 8                         // pull_price
        + 8                         // last_pull_id
        ;
}
