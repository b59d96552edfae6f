use gacha_client::rpc::{
    errors::RpcError, rpc_connection::RpcConnection, test_rpc::ProgramTestRpcConnection,
};
use gacha_sdk::{
    create_initialize_game_config_instruction, get_game_config_pubkey, GameConfig,
};
use log::info;
use solana_program_test::ProgramTest;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};

use crate::spl::{create_associated_token_account, create_confidential_transfer_mint, create_mint};

/// In-process ledger with only the built-in SPL programs (token, token-2022,
/// associated token account). Enough for every provisioning helper.
pub async fn setup_program_test() -> ProgramTestRpcConnection {
    let context = ProgramTest::default().start_with_context().await;
    ProgramTestRpcConnection { context }
}

/// In-process ledger that additionally deploys the gacha program from
/// `SBF_OUT_DIR` at its canonical id.
pub async fn setup_test_programs() -> ProgramTestRpcConnection {
    let mut program_test = ProgramTest::default();
    program_test.add_program("gacha_sol", gacha_sdk::ID, None);
    program_test.set_compute_max_units(1_400_000u64);
    let context = program_test.start_with_context().await;
    ProgramTestRpcConnection { context }
}

/// Ready-to-use fixture set for one exercise of `initialize_game_config`:
/// the config PDA, a purchase mint, a confidential-transfer reward mint and
/// the game vault, all provisioned under one fresh authority.
pub struct GachaTestEnv {
    pub authority: Keypair,
    pub purchase_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub game_vault: Pubkey,
    pub game_config: Pubkey,
    pub decimals: u8,
}

impl GachaTestEnv {
    pub async fn setup<R: RpcConnection>(
        rpc: &mut R,
        payer: &Keypair,
        decimals: u8,
    ) -> Result<Self, RpcError> {
        let game_config = get_game_config_pubkey();
        let authority = Keypair::new();

        let purchase_mint =
            create_mint(rpc, &authority.pubkey(), decimals, payer, &spl_token::id()).await?;
        let reward_mint = create_confidential_transfer_mint(
            rpc,
            &authority.pubkey(),
            decimals,
            payer,
            true,
            None,
        )
        .await?;
        let game_vault = create_associated_token_account(
            rpc,
            &purchase_mint,
            &authority.pubkey(),
            payer,
            &spl_token::id(),
        )
        .await?;

        info!(
            "provisioned fixtures: config {}, purchase mint {}, reward mint {}, vault {}",
            game_config, purchase_mint, reward_mint, game_vault
        );

        Ok(Self {
            authority,
            purchase_mint,
            reward_mint,
            game_vault,
            game_config,
            decimals,
        })
    }

    /// Submits `initialize_game_config` with the assembled accounts, signed
    /// by the payer, and waits for confirmation.
    pub async fn initialize_game_config<R: RpcConnection>(
        &self,
        rpc: &mut R,
        payer: &Keypair,
        pull_price: u64,
    ) -> Result<Signature, RpcError> {
        let instruction = create_initialize_game_config_instruction(
            self.authority.pubkey(),
            self.purchase_mint,
            self.reward_mint,
            self.game_vault,
            payer.pubkey(),
            pull_price,
        );
        rpc.create_and_send_transaction(&[instruction], &payer.pubkey(), &[payer])
            .await
    }

    pub async fn get_game_config<R: RpcConnection>(
        &self,
        rpc: &mut R,
    ) -> Result<Option<GameConfig>, RpcError> {
        rpc.get_anchor_account::<GameConfig>(&self.game_config).await
    }
}
