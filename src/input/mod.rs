//! Input pipeline: key translation, handler results and the modal state machine

pub mod handler;
pub mod key;
pub mod modal;
