//! Shared test helpers.

pub mod model_fixtures;
