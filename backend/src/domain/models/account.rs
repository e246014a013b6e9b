//! Domain model for a single allowance account.
//!
//! An account holds one balance and one weekly allowance amount. Every mutator
//! validates its input before touching any field, so a rejected call leaves the
//! account exactly as it was.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: String,
    name: String,
    balance: f64,
    weekly_allowance: f64,
}

/// Broad classification of account failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountErrorKind {
    InvalidInput,
    InsufficientFunds,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountError {
    #[error("Amount must be a number.")]
    InvalidAmount,
    #[error("Amount cannot be negative.")]
    NegativeAmount,
    #[error("Weekly allowance cannot be negative.")]
    NegativeWeeklyAllowance,
    #[error("Balance cannot be negative.")]
    NegativeBalance,
    #[error("Insufficient balance.")]
    InsufficientFunds,
}

impl AccountError {
    pub fn kind(&self) -> AccountErrorKind {
        match self {
            AccountError::InvalidAmount
            | AccountError::NegativeAmount
            | AccountError::NegativeWeeklyAllowance
            | AccountError::NegativeBalance => AccountErrorKind::InvalidInput,
            AccountError::InsufficientFunds => AccountErrorKind::InsufficientFunds,
        }
    }
}

/// Reject NaN first, then anything below zero with the caller's negative error.
fn check_amount(amount: f64, negative: AccountError) -> Result<(), AccountError> {
    if amount.is_nan() {
        return Err(AccountError::InvalidAmount);
    }
    if amount < 0.0 {
        return Err(negative);
    }
    Ok(())
}

impl Account {
    /// Create an empty account. The id and name are taken as given.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance: 0.0,
            weekly_allowance: 0.0,
        }
    }

    /// Generate a unique account ID.
    /// Format: account::<epoch_millis>::<uuid>
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("account::{}::{}", epoch_millis, Uuid::new_v4().simple())
    }

    /// Rebuild an account from previously captured values
    pub fn restore(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        weekly_allowance: f64,
    ) -> Result<Self, AccountError> {
        check_amount(balance, AccountError::NegativeBalance)?;
        check_amount(weekly_allowance, AccountError::NegativeWeeklyAllowance)?;

        Ok(Self {
            id: id.into(),
            name: name.into(),
            balance,
            weekly_allowance,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn weekly_allowance(&self) -> f64 {
        self.weekly_allowance
    }

    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount, AccountError::NegativeAmount)?;

        self.balance += amount;
        Ok(())
    }

    /// Remove money from the balance. The sign check runs before the solvency check.
    pub fn spend(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount, AccountError::NegativeAmount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }

        self.balance -= amount;
        Ok(())
    }

    /// Replace (not add to) the weekly allowance amount
    pub fn set_weekly_allowance(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount, AccountError::NegativeWeeklyAllowance)?;

        self.weekly_allowance = amount;
        Ok(())
    }

    /// Credit the weekly allowance once. Each call credits it again; the caller
    /// owns the once-per-week cadence.
    pub fn apply_weekly_allowance(&mut self) {
        self.balance += self.weekly_allowance;
    }
}
