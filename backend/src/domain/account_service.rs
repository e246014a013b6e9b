//! Account operations for callers of the allowance backend.
//!
//! The service wraps the `Account` model with logging and display formatting.
//! It holds no account state itself: callers own their accounts and pass them
//! in, which keeps the service cheap to clone and share.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::domain::models::account::Account;
use crate::io::mappers::account_mapper::AccountMapper;
use shared::{
    AccountConfig, AccountSnapshot, ApplyWeeklyAllowanceResponse, DepositRequest,
    DepositResponse, SpendRequest, SpendResponse, UpdateWeeklyAllowanceRequest,
    UpdateWeeklyAllowanceResponse,
};

/// Service for driving allowance accounts
#[derive(Clone)]
pub struct AccountService {
    config: AccountConfig,
}

impl AccountService {
    pub fn new() -> Self {
        Self {
            config: AccountConfig::default(),
        }
    }

    pub fn with_config(config: AccountConfig) -> Self {
        Self { config }
    }

    /// Open a new, empty account with a generated ID
    pub fn open_account(&self, name: &str) -> Account {
        let account = Account::new(Account::generate_id(epoch_millis(Utc::now())), name);
        info!("Opened account {} for {}", account.id(), account.name());
        account
    }

    pub fn deposit(&self, account: &mut Account, request: DepositRequest) -> Result<DepositResponse> {
        info!("Depositing {} into account {}", request.amount, account.id());
        let previous_balance = account.balance();

        if let Err(e) = account.deposit(request.amount) {
            warn!("Rejected deposit of {} into account {}: {}", request.amount, account.id(), e);
            return Err(e.into());
        }

        self.log_balance_change(account, previous_balance);
        let formatted_amount = self.format_amount(request.amount);

        Ok(DepositResponse {
            success_message: format!("{} added successfully!", formatted_amount),
            new_balance: account.balance(),
            formatted_amount,
        })
    }

    pub fn spend(&self, account: &mut Account, request: SpendRequest) -> Result<SpendResponse> {
        info!("Spending {} from account {}", request.amount, account.id());
        let previous_balance = account.balance();

        if let Err(e) = account.spend(request.amount) {
            warn!(
                "Rejected spend of {} from account {} (balance {}): {}",
                request.amount,
                account.id(),
                previous_balance,
                e
            );
            return Err(e.into());
        }

        self.log_balance_change(account, previous_balance);
        let formatted_amount = self.format_amount(request.amount);

        Ok(SpendResponse {
            success_message: format!("{} spent successfully!", formatted_amount),
            new_balance: account.balance(),
            formatted_amount,
        })
    }

    /// Replace the weekly allowance amount for an account
    pub fn update_weekly_allowance(
        &self,
        account: &mut Account,
        request: UpdateWeeklyAllowanceRequest,
    ) -> Result<UpdateWeeklyAllowanceResponse> {
        info!("Updating weekly allowance for account {}: {}", account.id(), request.amount);

        if let Err(e) = account.set_weekly_allowance(request.amount) {
            warn!("Rejected weekly allowance of {} for account {}: {}", request.amount, account.id(), e);
            return Err(e.into());
        }

        Ok(UpdateWeeklyAllowanceResponse {
            weekly_allowance: account.weekly_allowance(),
            success_message: format!(
                "Weekly allowance set to {}",
                self.format_amount(account.weekly_allowance())
            ),
        })
    }

    /// Credit one period's allowance. Scheduling is up to the caller.
    pub fn apply_weekly_allowance(&self, account: &mut Account) -> ApplyWeeklyAllowanceResponse {
        let amount_applied = account.weekly_allowance();
        let previous_balance = account.balance();

        account.apply_weekly_allowance();

        info!("Applied weekly allowance of {} to account {}", amount_applied, account.id());
        self.log_balance_change(account, previous_balance);

        ApplyWeeklyAllowanceResponse {
            amount_applied,
            new_balance: account.balance(),
            success_message: format!("{} allowance added!", self.format_amount(amount_applied)),
        }
    }

    pub fn snapshot(&self, account: &Account) -> AccountSnapshot {
        AccountMapper::to_dto(account)
    }

    /// Format amount for display
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }

    pub fn get_config(&self) -> &AccountConfig {
        &self.config
    }

    fn log_balance_change(&self, account: &Account, previous_balance: f64) {
        if self.config.enable_debug_logging {
            debug!(
                "Account {} balance: {} -> {}",
                account.id(),
                previous_balance,
                account.balance()
            );
        }
    }
}

/// Milliseconds since the epoch, or 0 for a clock set before it
fn epoch_millis(now: DateTime<Utc>) -> u64 {
    u64::try_from(now.timestamp_millis()).unwrap_or(0)
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
