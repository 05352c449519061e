// Presentation layer - transport-facing error contract
pub mod errors;
