pub mod file_account_lookup;
pub mod file_group_repository;
