//! Scan layer tests
//!
//! Resolver behaviour over parsed models:
//! - Every resolver under each namespace profile
//! - Path-based scanning and its error cases
//! - Agreement between the three tag spellings
//! - Serialized results (with the `serde` feature)

mod tests_scanner;
