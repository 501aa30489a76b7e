//! Exclusive reduction tests.

mod prop_tests;
mod test;
