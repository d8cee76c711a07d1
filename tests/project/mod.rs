//! Project layer tests
//!
//! Model discovery and convention checks over directories of models.
