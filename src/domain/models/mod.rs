pub mod account;
pub mod group;
pub mod platform;
