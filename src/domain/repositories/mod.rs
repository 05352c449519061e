pub mod account_lookup;
pub mod group_repository;
