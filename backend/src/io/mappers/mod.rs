pub mod account_mapper;
