//! Mappers for converting between the account domain model and shared DTOs.

use crate::domain::models::account::{Account, AccountError};
use shared::AccountSnapshot;

pub struct AccountMapper;

impl AccountMapper {
    pub fn to_dto(domain: &Account) -> AccountSnapshot {
        AccountSnapshot {
            id: domain.id().to_string(),
            name: domain.name().to_string(),
            balance: domain.balance(),
            weekly_allowance: domain.weekly_allowance(),
        }
    }

    /// Snapshots arrive from outside the domain, so they go through validation.
    pub fn to_domain(dto: AccountSnapshot) -> Result<Account, AccountError> {
        Account::restore(dto.id, dto.name, dto.balance, dto.weekly_allowance)
    }
}
