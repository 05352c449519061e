// Application layer - DTOs, services and error mapping
pub mod dto;
pub mod errors;
pub mod services;
