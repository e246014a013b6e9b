pub mod mappers;

pub use mappers::account_mapper::AccountMapper;
