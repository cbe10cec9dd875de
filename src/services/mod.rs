//! Process-level services

pub mod tracing_setup;
