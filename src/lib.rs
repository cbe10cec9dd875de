// Library interface for the jot editor
// This allows tests and the binary to share the editor core

pub mod config;
pub mod config_io;
pub mod input;
pub mod model;
pub mod services;
pub mod session;
pub mod state;
pub mod view;
