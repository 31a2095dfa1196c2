pub mod bitpack;
pub mod errors;

// Re-export error types for public API
pub use errors::{AlphabetNotFoundError, ConfigError, find_closest_alphabet};
