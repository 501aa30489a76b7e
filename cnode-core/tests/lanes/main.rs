//! Lane ALU and message representation tests.

mod prop_tests;
mod test;
