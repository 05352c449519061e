// Domain layer - models, errors and repository interfaces
pub mod errors;
pub mod models;
pub mod repositories;
