// Shared test infrastructure
#![allow(dead_code)]

pub mod harness;
