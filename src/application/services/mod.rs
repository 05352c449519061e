pub mod group_service;
pub mod membership_resolver;
