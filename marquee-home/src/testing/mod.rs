//! Test support: deterministic stand-ins for the collaborator services.
//!
//! Kept in the library (not behind `cfg(test)`) so integration tests and
//! downstream crates can drive sections without a server or a UI shell.

pub mod stubs;
