// Command handlers module
pub mod filter_words;
pub mod passwords;
pub mod twofa_domains;

// Re-exports for cleaner imports
pub use filter_words::execute as filter_words;
pub use passwords::execute as passwords;
pub use twofa_domains::execute as twofa_domains;
