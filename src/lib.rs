pub mod adapter;
pub mod domain;
pub mod infrastructure;
pub mod usecase;

/// In-memory store and state builders shared by unit and integration tests.
pub mod test_support;
