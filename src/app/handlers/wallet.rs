//! Wallet balance loading

use crate::app::{Message, State};
use iced::Task;
use tokswap::config::AppConfig;
use tokswap::core::wallet::{BalanceEntry, load_balances};

/// Reads the configured wallet file, if any. The demo wallet stays otherwise.
pub(crate) fn load_wallet_task(config: &AppConfig) -> Task<Message> {
    let Some(path) = config.wallet_file.clone() else {
        return Task::none();
    };
    Task::perform(
        async move { load_balances(&path).await.map_err(|e| e.user_message()) },
        Message::WalletLoaded,
    )
}

pub(crate) fn handle_wallet_loaded(state: &mut State, result: Result<Vec<BalanceEntry>, String>) {
    match result {
        Ok(balances) => {
            tracing::info!("Loaded {} wallet balances", balances.len());
            state.wallet.set_balances(balances);
            state.wallet_error = None;
        }
        Err(e) => {
            tracing::warn!("Wallet file unusable: {e}");
            state.wallet_error = Some(e);
        }
    }
}
