use anchor_lang::{
    prelude::Pubkey,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        system_program,
    },
    AnchorDeserialize, AnchorSerialize, Discriminator, InstructionData, ToAccountMetas,
};

use crate::pda::get_game_config_pubkey;

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct InitializeGameConfigParams {
    /// Price of one pull in the smallest unit of the purchase mint.
    pub pull_price: u64,
}

/// Argument block of the `initialize_game_config` instruction, encoded the
/// way anchor encodes it: the global discriminator followed by the borsh
/// serialized params.
#[derive(Debug, Clone, AnchorSerialize)]
pub struct InitializeGameConfig {
    pub params: InitializeGameConfigParams,
}

impl Discriminator for InitializeGameConfig {
    // sha256("global:initialize_game_config")[..8]
    const DISCRIMINATOR: [u8; 8] = [45, 61, 80, 55, 152, 63, 158, 47];
}

impl InstructionData for InitializeGameConfig {}

/// Accounts of `initialize_game_config`, in the exact order the program
/// declares them.
#[derive(Debug, Clone)]
pub struct InitializeGameConfigAccounts {
    pub game_config: Pubkey,
    pub authority: Pubkey,
    pub purchase_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub game_vault: Pubkey,
    pub payer: Pubkey,
    pub system_program: Pubkey,
}

impl InitializeGameConfigAccounts {
    pub fn populate(
        authority: Pubkey,
        purchase_mint: Pubkey,
        reward_mint: Pubkey,
        game_vault: Pubkey,
        payer: Pubkey,
    ) -> Self {
        Self {
            game_config: get_game_config_pubkey(),
            authority,
            purchase_mint,
            reward_mint,
            game_vault,
            payer,
            system_program: system_program::ID,
        }
    }
}

impl ToAccountMetas for InitializeGameConfigAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.game_config, false),
            AccountMeta::new_readonly(self.authority, false),
            AccountMeta::new_readonly(self.purchase_mint, false),
            AccountMeta::new_readonly(self.reward_mint, false),
            AccountMeta::new_readonly(self.game_vault, false),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub fn create_initialize_game_config_instruction(
    authority: Pubkey,
    purchase_mint: Pubkey,
    reward_mint: Pubkey,
    game_vault: Pubkey,
    payer: Pubkey,
    pull_price: u64,
) -> Instruction {
    let accounts = InitializeGameConfigAccounts::populate(
        authority,
        purchase_mint,
        reward_mint,
        game_vault,
        payer,
    )
    .to_account_metas(None);

    Instruction {
        program_id: crate::ID,
        accounts,
        data: InitializeGameConfig {
            params: InitializeGameConfigParams { pull_price },
        }
        .data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_data_is_discriminator_then_price() {
        let instruction = create_initialize_game_config_instruction(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            1_000_000,
        );
        assert_eq!(instruction.program_id, crate::ID);
        assert_eq!(
            instruction.data[..8],
            InitializeGameConfig::DISCRIMINATOR
        );
        assert_eq!(instruction.data[8..], 1_000_000u64.to_le_bytes());
    }

    #[test]
    fn account_metas_match_program_declaration() {
        let authority = Pubkey::new_unique();
        let purchase_mint = Pubkey::new_unique();
        let reward_mint = Pubkey::new_unique();
        let game_vault = Pubkey::new_unique();
        let payer = Pubkey::new_unique();

        let instruction = create_initialize_game_config_instruction(
            authority,
            purchase_mint,
            reward_mint,
            game_vault,
            payer,
            1,
        );
        let metas = &instruction.accounts;
        assert_eq!(metas.len(), 7);

        assert_eq!(metas[0].pubkey, get_game_config_pubkey());
        assert!(metas[0].is_writable);
        assert!(!metas[0].is_signer);

        assert_eq!(metas[1].pubkey, authority);
        assert_eq!(metas[2].pubkey, purchase_mint);
        assert_eq!(metas[3].pubkey, reward_mint);
        assert_eq!(metas[4].pubkey, game_vault);
        for meta in &metas[1..5] {
            assert!(!meta.is_writable);
            assert!(!meta.is_signer);
        }

        assert_eq!(metas[5].pubkey, payer);
        assert!(metas[5].is_writable);
        assert!(metas[5].is_signer);

        assert_eq!(metas[6].pubkey, system_program::ID);
        assert!(!metas[6].is_writable);
        assert!(!metas[6].is_signer);
    }

    #[test]
    fn params_roundtrip() {
        let params = InitializeGameConfigParams { pull_price: 42 };
        let bytes = anchor_lang::AnchorSerialize::try_to_vec(&params).unwrap();
        let decoded = InitializeGameConfigParams::try_from_slice(&bytes).unwrap();
        assert_eq!(params, decoded);
    }
}
