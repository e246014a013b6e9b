//! # Domain Module
//!
//! Business rules for a weekly-allowance account.
//!
//! - **models::account**: the `Account` value object and its validation errors
//! - **account_service**: caller-facing operations with logging and formatted responses
//!
//! The domain layer has no storage or transport concerns; callers own the
//! `Account` values and decide when the weekly allowance is applied.

pub mod account_service;
pub mod models;

pub use account_service::*;
pub use models::account::{Account, AccountError, AccountErrorKind};
