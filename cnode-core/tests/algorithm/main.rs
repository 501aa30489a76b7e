//! Check-node algorithm and update policy tests.

#[path = "../common/mod.rs"]
mod common;
