// Port interfaces
pub mod ports;

// Core price-series types
pub mod types;

// Domain-specific error types
pub mod errors;
