// Deterministic data source for tests
pub mod mock;

// Yahoo Finance chart API client
pub mod yahoo;
